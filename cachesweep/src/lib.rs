//! # cachesweep
//!
//! `cachesweep` measures, formats and clears on-disk cache directories. It is meant for applications that keep a handful of cache folders below a common cache root (an image cache, an HTTP cache, ...) and want to show the user how much space they take and let them reclaim it.
//!
//! The crate offers:
//!
//! * **Measuring**: the total size of all regular files below the configured directories. Symlinks are never followed, missing directories count as empty.
//! * **Formatting**: [ByteSize] renders byte counts as `Byte`, `KB`, `MB`, `GB` or `TB` with two fraction digits, rounded half-up.
//! * **Clearing**: best-effort, bottom-up deletion, either on the calling thread or on a background [Executor] with a completion callback delivered on a main context such as a [MainQueue].
//!
//! Filesystem errors are logged through `tracing` and absorbed: a directory that cannot be measured counts as zero bytes, an entry that cannot be deleted is left behind.
//!
//! ## Usage
//!
//! Add `cachesweep` to your `Cargo.toml` dependencies:
//!
//! ```bash,no_run
//! cargo add cachesweep
//! ```
//!
//! Then create a service using the `CacheServiceBuilder`:
//!
//! ```
//! use cachesweep::CacheServiceBuilder;
//!
//! let service = CacheServiceBuilder::new()
//!     .with_cache_root(std::env::temp_dir().join("cachesweep-lib-doc"))
//!     .with_directory("http_cache")
//!     .build()
//!     .unwrap();
//!
//! println!("Cache size: {}", service.cache_size());
//! ```
//!
//! Or clear in the background and get notified on your main loop:
//!
//! ```
//! use cachesweep::{CacheServiceBuilder, MainQueue};
//! use std::time::Duration;
//!
//! let service = CacheServiceBuilder::new()
//!     .with_cache_root(std::env::temp_dir().join("cachesweep-lib-doc-bg"))
//!     .with_image_cache_dirs()
//!     .build()
//!     .unwrap();
//!
//! let main_queue = MainQueue::new();
//! service.clear_in_background(false, main_queue.handle(), || println!("Cache cleared"));
//!
//! // Somewhere in the main loop
//! main_queue.run_next(Duration::from_secs(10));
//! ```
//!
//! ## Runtimes
//!
//! The async helpers ([CacheService::measure_async], [CacheService::clear_async]) run inline by default (`implicit-blocking`).
//! Enable `rt_tokio_1` or `rt_async-std_1` to move the work to the runtime's blocking pool.
//!
//! ## License
//!
//! cachesweep is licensed under the MIT license.
//!

#[cfg(all(feature = "blocking", feature = "rt_tokio_1"))]
compile_error!("Cannot enable both the `blocking` and `rt_tokio_1` features at the same time.");

#[cfg(all(feature = "blocking", feature = "rt_async-std_1"))]
compile_error!("Cannot enable both the `blocking` and `rt_async-std_1` features at the same time.");

#[cfg(all(feature = "rt_tokio_1", feature = "rt_async-std_1"))]
compile_error!("Cannot enable both the `rt_tokio_1` and `rt_async-std_1` features at the same time.");

#[cfg(not(any(
    feature = "blocking",
    feature = "implicit-blocking",
    feature = "rt_tokio_1",
    feature = "rt_async-std_1"
)))]
compile_error!("One of the `blocking`, `implicit-blocking`, `rt_tokio_1` or `rt_async-std_1` features must be enabled.");

#[cfg(test)]
mod test_utils;

mod builder;
mod byte_size;
mod config;
mod directory_set;
mod error;
mod executors;
mod macros;
mod service;
mod traits;
mod utils;

pub(crate) use error::Result;

reexport_executor!(Thread);
reexport_executor!(Inline);
#[cfg(feature = "rt_tokio_1")]
reexport_executor!(Tokio);
#[cfg(feature = "rt_async-std_1")]
reexport_executor!(AsyncStd);

// Export basic types
pub use builder::CacheServiceBuilder;
pub use byte_size::{format_size, ByteSize, Unit};
pub use config::CacheConfig;
pub use directory_set::{CacheDirectorySet, IMAGE_CACHE_DIRS};
pub use error::Error;
pub use executors::{MainHandle, MainQueue};
pub use service::CacheService;
pub use traits::{Executor, Task};
pub use utils::disk_util;

/// Errors raised while building a [CacheService].
pub mod build {
    pub use crate::builder::Error;
}

// README doctests
#[doc = include_str!("../../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
