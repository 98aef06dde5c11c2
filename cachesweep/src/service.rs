use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    executors::Thread,
    traits::Executor,
    utils::{disk_util, runtime::run_blocking},
    ByteSize, CacheConfig, CacheDirectorySet, Result,
};

/// Measures and clears a configured set of cache directories.
///
/// Filesystem errors never escape: a directory that cannot be measured counts
/// as empty, and entries that cannot be deleted are left behind. Both are
/// logged. Concurrent calls on the same directories are not serialized.
#[derive(Debug)]
pub struct CacheService<E = Thread>
where
    E: Executor,
{
    config: CacheConfig,
    executor: E,
}

impl<E> CacheService<E>
where
    E: Executor,
{
    /// Create a new [CacheService].
    pub fn new(config: CacheConfig, executor: E) -> CacheService<E> {
        CacheService { config, executor }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// The configured directories, resolved against the cache root.
    pub fn directories(&self) -> CacheDirectorySet {
        self.config.directories()
    }

    /// Total size in bytes of all regular files in the cache directories.
    ///
    /// Blocks on filesystem I/O, so keep it off the main thread.
    pub fn measure_size(&self) -> u64 {
        disk_util::measure_size(&self.directories())
    }

    /// Size of each cache directory, in configuration order.
    pub fn measure_each(&self) -> Vec<(PathBuf, u64)> {
        self.directories()
            .into_iter()
            .map(|path| {
                let size = disk_util::measure_dir(&path);
                (path, size)
            })
            .collect()
    }

    /// Total size of the cache directories, ready for display.
    pub fn cache_size(&self) -> ByteSize {
        ByteSize::new(self.measure_size())
    }

    /// Delete the contents of every cache directory on the calling thread.
    ///
    /// With `delete_root`, the emptied directories are removed as well.
    pub fn clear(&self, delete_root: bool) {
        clear(self.directories(), delete_root)
    }

    /// Delete the contents of every cache directory on the background
    /// executor, then submit `on_done` to `main`.
    ///
    /// `on_done` runs even if some entries could not be deleted.
    pub fn clear_in_background<M, F>(&self, delete_root: bool, main: M, on_done: F)
    where
        M: Executor + Send + 'static,
        F: FnOnce() + Send + 'static,
    {
        let directories = self.directories();
        self.executor.execute(Box::new(move || {
            clear(directories, delete_root);
            main.execute(Box::new(on_done));
        }));
    }

    /// Measure the cache directories on the background executor, then submit
    /// `on_done` with the result to `main`.
    pub fn measure_in_background<M, F>(&self, main: M, on_done: F)
    where
        M: Executor + Send + 'static,
        F: FnOnce(ByteSize) + Send + 'static,
    {
        let directories = self.directories();
        self.executor.execute(Box::new(move || {
            let size = ByteSize::new(disk_util::measure_size(&directories));
            debug!(%size, "Measured cache size");
            main.execute(Box::new(move || on_done(size)));
        }));
    }

    /// Measure the cache directories without blocking the async runtime.
    pub async fn measure_async(&self) -> Result<ByteSize> {
        let directories = self.directories();
        run_blocking(move || ByteSize::new(disk_util::measure_size(&directories))).await
    }

    /// Clear the cache directories without blocking the async runtime.
    pub async fn clear_async(&self, delete_root: bool) -> Result<()> {
        let directories = self.directories();
        run_blocking(move || clear(directories, delete_root)).await
    }
}

fn clear(directories: CacheDirectorySet, delete_root: bool) {
    info!(
        directories = directories.len(),
        delete_root, "Clearing cache directories"
    );
    disk_util::clear_directories(&directories, delete_root);
    debug!("Finished clearing cache directories");
}
