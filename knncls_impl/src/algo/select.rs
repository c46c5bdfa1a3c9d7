use rand::Rng;

/// Rearranges `v` in place so that its first `k` slots hold the `k` smallest
/// elements, in no particular order among themselves.
///
/// Randomized quickselect: a uniformly random pivot is swapped to the
/// rightmost slot, then partitioned on strict `<`. Expected O(n) time, O(1)
/// space beyond `v`. `k >= v.len()` is a no-op.
pub fn quickselect<T: PartialOrd>(v: &mut [T], k: usize) {
    if k == 0 || k >= v.len() {
        return;
    }

    let mut rng = rand::thread_rng();
    let mut l = 0;
    let mut h = v.len() - 1;

    loop {
        if l >= h {
            return;
        }
        let pi = random_partition(v, l, h, &mut rng);
        if pi == k - 1 {
            return;
        }
        if k - 1 < pi {
            h = pi - 1;
        } else {
            l = pi + 1;
        }
    }
}

fn random_partition<T: PartialOrd, R: Rng>(v: &mut [T], l: usize, h: usize, rng: &mut R) -> usize {
    let pivot = rng.gen_range(l..=h);
    v.swap(pivot, h);
    partition(v, l, h)
}

// Lomuto partition with the pivot in the rightmost slot.
fn partition<T: PartialOrd>(v: &mut [T], l: usize, h: usize) -> usize {
    let mut x = l;
    for i in l..h {
        if v[i] < v[h] {
            v.swap(x, i);
            x += 1;
        }
    }
    v.swap(h, x);
    x
}
