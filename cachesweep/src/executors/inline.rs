use crate::traits::{Executor, Task};

/// Runs every task immediately on the calling thread.
/// Useful in tests, or when the caller already is on a worker thread.
#[derive(Default, Debug, Clone, Copy)]
pub struct Inline;

impl Executor for Inline {
    fn execute(&self, task: Task) {
        task()
    }
}

#[cfg(test)]
mod tests {
    use super::Inline;
    use crate::traits::Executor;
    use std::{cell::Cell, sync::atomic::{AtomicBool, Ordering}, sync::Arc};

    #[test]
    fn test_runs_before_returning() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();

        Inline.execute(Box::new(move || flag.store(true, Ordering::SeqCst)));

        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_runs_on_calling_thread() {
        thread_local!(static MARK: Cell<bool> = Cell::new(false));
        MARK.with(|mark| mark.set(true));

        let (tx, rx) = std::sync::mpsc::channel();
        Inline.execute(Box::new(move || tx.send(MARK.with(Cell::get)).unwrap()));

        assert!(rx.recv().unwrap());
    }
}
