#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    BuildError(#[from] crate::builder::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    WalkError(#[from] walkdir::Error),
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_display() {
        let err = Error::from(crate::builder::Error::MissingCacheRoot);
        assert_eq!(err.to_string(), "No cache root was configured.");
    }

    #[test]
    fn test_io_error_display() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.to_string(), "I/O error: denied");
    }
}
