use std::path::PathBuf;

use tracing::debug;

use crate::{
    builder::Error, directory_set::IMAGE_CACHE_DIRS, executors::Thread, traits::Executor,
    CacheConfig, CacheService, Result,
};

/// A builder for creating a new [CacheService].
///
/// Without [CacheServiceBuilder::with_executor], background work runs on a
/// dedicated [Thread].
///
/// # Examples
/// ```
/// use cachesweep::{CacheServiceBuilder, InlineExecutor};
///
/// let service = CacheServiceBuilder::new()
///     .with_cache_root(std::env::temp_dir().join("cachesweep-doc"))
///     .with_image_cache_dirs()
///     .with_executor(InlineExecutor)
///     .build()
///     .unwrap();
///
/// assert_eq!(service.directories().len(), 2);
/// ```
#[derive(Debug)]
pub struct CacheServiceBuilder<E = Thread> {
    cache_root: Option<PathBuf>,
    directory_names: Vec<PathBuf>,
    executor: E,
}

impl CacheServiceBuilder {
    /// Create a builder using the default [Thread] executor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for CacheServiceBuilder {
    fn default() -> Self {
        CacheServiceBuilder {
            cache_root: None,
            directory_names: Vec::new(),
            executor: Thread::default(),
        }
    }
}

impl<E> CacheServiceBuilder<E> {
    /// Set the directory all cache directory names are resolved against.
    pub fn with_cache_root(mut self, cache_root: impl Into<PathBuf>) -> Self {
        self.cache_root = Some(cache_root.into());
        self
    }

    /// Add a cache directory, relative to the cache root.
    pub fn with_directory(mut self, name: impl Into<PathBuf>) -> Self {
        self.directory_names.push(name.into());
        self
    }

    /// Add several cache directories, relative to the cache root.
    pub fn with_directories<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        self.directory_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Add the image cache directories ([IMAGE_CACHE_DIRS]).
    pub fn with_image_cache_dirs(self) -> Self {
        self.with_directories(IMAGE_CACHE_DIRS)
    }

    /// Use a different executor for background work.
    pub fn with_executor<E2>(self, executor: E2) -> CacheServiceBuilder<E2>
    where
        E2: Executor,
    {
        CacheServiceBuilder {
            cache_root: self.cache_root,
            directory_names: self.directory_names,
            executor,
        }
    }

    /// Build the service, validating the configuration.
    pub fn build(self) -> Result<CacheService<E>>
    where
        E: Executor,
    {
        let cache_root = self.cache_root.ok_or(Error::MissingCacheRoot)?;
        let config = CacheConfig::new(cache_root, self.directory_names)?;

        debug!(
            cache_root = %config.cache_root().display(),
            directories = config.directory_names().len(),
            "Built cache service"
        );

        Ok(CacheService::new(config, self.executor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{executors::Inline, Error as CrateError};

    #[test]
    fn test_default() {
        _ = CacheServiceBuilder::default();
    }

    #[test]
    fn test_missing_cache_root() {
        let result = CacheServiceBuilder::new().with_directory("a").build();

        assert!(matches!(
            result,
            Err(CrateError::BuildError(Error::MissingCacheRoot))
        ));
    }

    #[test]
    fn test_invalid_directory_name() {
        let result = CacheServiceBuilder::new()
            .with_cache_root("/cache")
            .with_directory("../etc")
            .build();

        match result {
            Err(CrateError::BuildError(Error::InvalidDirectoryName { name, .. })) => {
                assert_eq!(name, "../etc");
            }
            other => panic!("Unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_executor_type_changes() {
        let service: CacheService<Inline> = CacheServiceBuilder::new()
            .with_cache_root("/cache")
            .with_directory("a")
            .with_directories(["b", "c"])
            .with_executor(Inline)
            .build()
            .unwrap();

        assert_eq!(service.config().directory_names().len(), 3);
    }

    #[test]
    fn test_image_cache_preset() {
        let service = CacheServiceBuilder::new()
            .with_cache_root("/cache")
            .with_image_cache_dirs()
            .build()
            .unwrap();

        let names: Vec<_> = service.config().directory_names().to_vec();
        assert_eq!(
            names,
            vec![
                PathBuf::from("image_cache"),
                PathBuf::from("image_manager_disk_cache")
            ]
        );
    }
}
