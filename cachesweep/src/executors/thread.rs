use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        mpsc::{self, SendError, Sender},
        Arc, Mutex,
    },
};

use tracing::{debug, error};

use crate::traits::{Executor, Task};

const DEFAULT_THREAD_NAME: &str = "cachesweep-worker";

/// Runs tasks one after another on a single, lazily spawned worker thread.
///
/// Clones share the worker. It exits once every clone is dropped and the queue
/// is drained. A panicking task is logged and does not take the worker down,
/// so later tasks still run. If the thread cannot be spawned, the task runs on
/// the calling thread instead so that completion callbacks are never lost.
#[derive(Debug, Clone)]
pub struct Thread {
    /// Name given to the worker thread.
    name: String,
    worker: Arc<Mutex<Option<Sender<Task>>>>,
}

impl Thread {
    /// Create a new thread executor with a custom thread name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            worker: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the name given to the worker thread.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn spawn_worker(&self) -> std::io::Result<Sender<Task>> {
        let (sender, receiver) = mpsc::channel::<Task>();
        let name = self.name.clone();
        std::thread::Builder::new()
            .name(self.name.clone())
            .spawn(move || {
                for task in receiver {
                    if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
                        error!(thread = %name, "Background task panicked");
                    }
                }
            })?;
        debug!(thread = %self.name, "Spawned worker thread");
        Ok(sender)
    }
}

impl Default for Thread {
    fn default() -> Self {
        Self::new(DEFAULT_THREAD_NAME)
    }
}

impl Executor for Thread {
    fn execute(&self, task: Task) {
        let mut worker = match self.worker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // A dead worker hands the task back
        let task = match worker.as_ref() {
            Some(sender) => match sender.send(task) {
                Ok(()) => return,
                Err(SendError(task)) => task,
            },
            None => task,
        };

        match self.spawn_worker() {
            Ok(sender) => {
                if let Err(SendError(task)) = sender.send(task) {
                    task()
                }
                *worker = Some(sender);
            }
            Err(err) => {
                *worker = None;
                drop(worker);
                error!(thread = %self.name, error = %err, "Failed to spawn worker thread, running inline");
                task()
            }
        }
    }
}
