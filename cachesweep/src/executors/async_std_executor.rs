use crate::traits::{Executor, Task};

/// Runs tasks on async-std's blocking thread pool.
#[derive(Default, Debug, Clone, Copy)]
pub struct AsyncStd;

impl Executor for AsyncStd {
    fn execute(&self, task: Task) {
        // async-std detaches tasks whose handle is dropped.
        drop(async_std::task::spawn_blocking(task));
    }
}
