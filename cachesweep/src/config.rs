use std::path::{Component, Path, PathBuf};

use crate::{builder, CacheDirectorySet};

/// Where the caches live.
///
/// Directory names are kept relative and resolved against the cache root each
/// time the directories are needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// The application's cache root.
    cache_root: PathBuf,
    /// Cache directory names, relative to `cache_root`.
    directory_names: Vec<PathBuf>,
}

impl CacheConfig {
    /// Create a new [CacheConfig], validating every directory name.
    pub fn new<I, S>(
        cache_root: impl Into<PathBuf>,
        directory_names: I,
    ) -> Result<Self, builder::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        let directory_names = directory_names
            .into_iter()
            .map(Into::into)
            .map(|name| validate_name(&name).map(|_| name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            cache_root: cache_root.into(),
            directory_names,
        })
    }

    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    pub fn directory_names(&self) -> &[PathBuf] {
        &self.directory_names
    }

    /// Resolve the configured names against the cache root.
    pub fn directories(&self) -> CacheDirectorySet {
        CacheDirectorySet::resolve(&self.cache_root, &self.directory_names)
    }
}

/// Directory names must stay below the cache root.
pub(crate) fn validate_name(name: &Path) -> Result<(), builder::Error> {
    let invalid = |reason| builder::Error::InvalidDirectoryName {
        name: name.display().to_string(),
        reason,
    };

    let mut has_normal = false;
    for component in name.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                return Err(invalid("must be relative"))
            }
            Component::ParentDir => return Err(invalid("must not leave the cache root")),
            Component::CurDir => {}
            Component::Normal(_) => has_normal = true,
        }
    }

    if !has_normal {
        return Err(invalid("must name a directory"));
    }

    Ok(())
}
