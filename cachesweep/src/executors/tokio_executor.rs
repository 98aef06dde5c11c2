use tokio::runtime::Handle;

use crate::traits::{Executor, Task};

/// Runs tasks on the blocking pool of a tokio runtime.
#[derive(Debug, Clone)]
pub struct Tokio {
    handle: Handle,
}

impl Tokio {
    /// Create an executor for the given runtime.
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Create an executor for the runtime the caller is running on, if any.
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl Executor for Tokio {
    fn execute(&self, task: Task) {
        // Dropping the join handle detaches the task.
        drop(self.handle.spawn_blocking(task));
    }
}
