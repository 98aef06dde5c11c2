mod inline;
mod main_queue;
mod thread;

#[cfg(feature = "rt_async-std_1")]
mod async_std_executor;
#[cfg(feature = "rt_tokio_1")]
mod tokio_executor;

pub use inline::Inline;
pub use main_queue::{MainHandle, MainQueue};
pub use thread::Thread;

#[cfg(feature = "rt_async-std_1")]
pub use async_std_executor::AsyncStd;
#[cfg(feature = "rt_tokio_1")]
pub use tokio_executor::Tokio;
