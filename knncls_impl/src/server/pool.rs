use crate::KnnResult;
use std::{
    collections::VecDeque,
    sync::{Arc, Condvar, Mutex},
    thread::JoinHandle,
};

/// A unit of work for a pooled worker.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fixed-size worker pool over an unbounded FIFO job queue.
///
/// Workers pop strictly in submission order; there are no priorities. The
/// wait predicate is evaluated under the queue lock, so a shutdown racing a
/// submission cannot strand a worker.
pub struct ThreadPool {
    shared: Arc<PoolShared>,
    workers: Vec<JoinHandle<()>>,
}

struct PoolShared {
    state: Mutex<PoolState>,
    job_ready: Condvar,
}

#[derive(Default)]
struct PoolState {
    jobs: VecDeque<Job>,
    should_terminate: bool,
}

impl ThreadPool {
    /// Starts `size` workers.
    pub fn new(size: usize) -> Self {
        let shared = Arc::new(PoolShared {
            state: Mutex::new(PoolState::default()),
            job_ready: Condvar::new(),
        });

        let workers = (0..size)
            .map(|id| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || worker_loop(id, &shared))
            })
            .collect();

        debug!("Worker pool of size {size} started");
        Self { shared, workers }
    }

    /// Enqueues a job; never blocks on the workers.
    pub fn submit(&self, job: Job) -> KnnResult<()> {
        {
            let mut state = self.shared.state.lock()?;
            state.jobs.push_back(job);
        }
        self.shared.job_ready.notify_one();
        Ok(())
    }

    /// Lets queued and in-flight jobs finish, then joins all workers.
    pub fn shutdown(mut self) -> KnnResult<()> {
        {
            let mut state = self.shared.state.lock()?;
            state.should_terminate = true;
        }
        self.shared.job_ready.notify_all();

        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                error!("A pooled worker panicked");
            }
        }
        debug!("Worker pool shut down");
        Ok(())
    }
}

impl std::fmt::Debug for ThreadPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadPool")
            .field("workers", &self.workers.len())
            .finish()
    }
}

fn worker_loop(id: usize, shared: &PoolShared) {
    loop {
        let job = {
            let mut state = match shared.state.lock() {
                Ok(state) => state,
                Err(_) => return,
            };
            while state.jobs.is_empty() && !state.should_terminate {
                state = match shared.job_ready.wait(state) {
                    Ok(state) => state,
                    Err(_) => return,
                };
            }
            match state.jobs.pop_front() {
                Some(job) => job,
                // terminating and fully drained
                None => return,
            }
        };
        trace!("Worker {id} picked up a job");
        job();
    }
}
