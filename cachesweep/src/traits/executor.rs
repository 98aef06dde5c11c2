/// A unit of work handed to an [Executor].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Somewhere to run work.
///
/// The service runs filesystem work on a background executor and hands
/// completion callbacks to a second executor representing the caller's main
/// context. Implementations decide which thread actually runs the task.
pub trait Executor {
    /// Submit a task. Must not block until the task completes, unless the
    /// executor is explicitly inline.
    fn execute(&self, task: Task);
}

impl<E> Executor for &E
where
    E: Executor + ?Sized,
{
    fn execute(&self, task: Task) {
        (**self).execute(task)
    }
}

impl<E> Executor for std::sync::Arc<E>
where
    E: Executor + ?Sized,
{
    fn execute(&self, task: Task) {
        (**self).execute(task)
    }
}
