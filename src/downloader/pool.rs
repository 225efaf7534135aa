use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;

use itertools::Itertools;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::error::Error;

/// Fixed-size pool of blocking workers. At most `workers` tasks run at once;
/// the rest wait in submission order. Threads are released when the pool is dropped.
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

/// Result slot for a task handed to [`WorkerPool::submit`].
pub struct TaskHandle<R> {
    receiver: mpsc::Receiver<thread::Result<R>>,
}

impl<R> TaskHandle<R> {
    /// Blocks until the task finishes.
    pub fn join(self) -> Result<R, Error> {
        match self.receiver.recv() {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(_)) | Err(_) => Err(Error::TaskPanicked),
        }
    }
}

impl WorkerPool {
    pub fn new(workers: usize) -> Result<Self, Error> {
        if workers == 0 {
            return Err(Error::InvalidConcurrency);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("fetch-worker-{}", index))
            .build()?;

        debug!(workers, "worker pool started");

        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn submit<F, R>(&self, task: F) -> TaskHandle<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (sender, receiver) = mpsc::sync_channel(1);

        self.pool.spawn_fifo(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(task));
            let _ = sender.send(result);
        });

        TaskHandle { receiver }
    }

    /// Runs `task` over every item and returns the results in input order,
    /// whatever order the workers finish in.
    ///
    /// A panicking task does not stop its siblings; the panic is resumed on the
    /// caller once every task has finished.
    pub fn map<T, R, F>(&self, items: &[T], task: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        let (sender, receiver) = mpsc::channel();
        let task = &task;

        self.pool.scope_fifo(|scope| {
            for (index, item) in items.iter().enumerate() {
                let sender = sender.clone();
                scope.spawn_fifo(move |_| {
                    let _ = sender.send((index, task(item)));
                });
            }
        });

        drop(sender);

        receiver
            .into_iter()
            .sorted_by_key(|(index, _)| *index)
            .map(|(_, result)| result)
            .collect()
    }
}
