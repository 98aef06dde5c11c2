use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError, Sender},
    time::Duration,
};

use tracing::debug;

use crate::traits::{Executor, Task};

/// A task queue owned by the main (UI) thread.
///
/// Other threads submit work through a [MainHandle]; nothing runs until the
/// owning thread calls [MainQueue::run_pending] or [MainQueue::run_next].
///
/// # Examples
/// ```
/// use cachesweep::{Executor, MainQueue};
///
/// let queue = MainQueue::new();
/// let handle = queue.handle();
///
/// std::thread::spawn(move || handle.execute(Box::new(|| println!("done"))))
///     .join()
///     .unwrap();
///
/// assert_eq!(queue.run_pending(), 1);
/// ```
#[derive(Debug)]
pub struct MainQueue {
    sender: Sender<Task>,
    receiver: Receiver<Task>,
}

/// A cloneable handle submitting tasks to a [MainQueue].
#[derive(Debug, Clone)]
pub struct MainHandle {
    sender: Sender<Task>,
}

impl MainQueue {
    /// Create a new, empty [MainQueue].
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a handle that submits tasks to this queue.
    pub fn handle(&self) -> MainHandle {
        MainHandle {
            sender: self.sender.clone(),
        }
    }

    /// Run every task that is already queued, without waiting.
    /// Returns the number of tasks run.
    pub fn run_pending(&self) -> usize {
        let mut count = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task();
            count += 1;
        }
        count
    }

    /// Wait up to `timeout` for one task and run it.
    /// Returns whether a task was run.
    pub fn run_next(&self, timeout: Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(task) => {
                task();
                true
            }
            // The queue holds a sender itself, so it never disconnects.
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }
}

impl Default for MainQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for MainHandle {
    fn execute(&self, task: Task) {
        if self.sender.send(task).is_err() {
            debug!("Main queue dropped, discarding task");
        }
    }
}
