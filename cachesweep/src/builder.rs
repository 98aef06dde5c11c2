mod service_builder;

pub use service_builder::CacheServiceBuilder;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No cache root was configured.")]
    MissingCacheRoot,
    #[error("Invalid cache directory name {name:?}: {reason}")]
    InvalidDirectoryName { name: String, reason: &'static str },
}
