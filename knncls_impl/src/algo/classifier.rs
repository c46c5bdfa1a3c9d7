use crate::{
    algo::quickselect,
    data::{DataPoint, DataSet},
    DistanceMetric, KnnError, KnnResult, MAX_K,
};
use std::cmp::Ordering;

/// An (index, distance) record; `index` points into the training set, the
/// classifier never hands out owned points.
///
/// Equal distances are ordered by insertion index, which keeps the selected
/// k-set reproducible across runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.distance.partial_cmp(&other.distance) {
            Some(Ordering::Equal) => Some(self.index.cmp(&other.index)),
            ordering => ordering,
        }
    }
}

/// Plurality label of the `k` training points nearest to `query`.
///
/// `k` must be in `[1, min(10, |set|)]`. Among the selected points, labels
/// are tallied in their post-quickselect order and the first label reaching
/// the highest tally wins.
pub fn classify(
    set: &DataSet,
    query: &DataPoint,
    k: usize,
    metric: DistanceMetric,
) -> KnnResult<String> {
    let limit = set.len().min(MAX_K);
    if k < 1 || k > limit {
        return Err(KnnError::InvalidK { k, limit });
    }

    let mut neighbors = rank(set, query, metric)?;
    quickselect(&mut neighbors, k);

    let mut tallies: Vec<(&str, usize)> = Vec::with_capacity(k);
    for neighbor in &neighbors[..k] {
        let label = set.point(neighbor.index).label();
        match tallies.iter_mut().find(|(tallied, _)| *tallied == label) {
            Some((_, count)) => *count += 1,
            None => tallies.push((label, 1)),
        }
    }

    let mut winner = &tallies[0];
    for tally in &tallies[1..] {
        if tally.1 > winner.1 {
            winner = tally;
        }
    }
    trace!("classify: k = {k}, winner = {:?}", winner);
    Ok(winner.0.to_string())
}

// Distances to every training point, in insertion order.
fn rank(set: &DataSet, query: &DataPoint, metric: DistanceMetric) -> KnnResult<Vec<Neighbor>> {
    set.points()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            Ok(Neighbor {
                index,
                distance: metric.between(query, point)?,
            })
        })
        .collect()
}
