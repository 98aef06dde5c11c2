use std::path::{Path, PathBuf};

/// Names of the image cache directories kept below an application cache root.
pub const IMAGE_CACHE_DIRS: [&str; 2] = ["image_cache", "image_manager_disk_cache"];

/// An ordered set of cache directories that are measured and cleared together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheDirectorySet {
    paths: Vec<PathBuf>,
}

impl CacheDirectorySet {
    /// Create an empty [CacheDirectorySet].
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve each name against `root`, keeping the order of `names`.
    pub fn resolve<I, S>(root: impl AsRef<Path>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let root = root.as_ref();
        names.into_iter().map(|name| root.join(name)).collect()
    }

    /// Append a directory to the set.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<P> FromIterator<P> for CacheDirectorySet
where
    P: Into<PathBuf>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CacheDirectorySet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl IntoIterator for CacheDirectorySet {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_order() {
        let set = CacheDirectorySet::resolve("/cache", IMAGE_CACHE_DIRS);

        let paths: Vec<_> = set.iter().cloned().collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/cache/image_cache"),
                PathBuf::from("/cache/image_manager_disk_cache"),
            ]
        );
    }

    #[test]
    fn test_push() {
        let mut set = CacheDirectorySet::new();
        assert!(set.is_empty());

        set.push("/a");
        set.push(PathBuf::from("/b"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.into_iter().last(), Some(PathBuf::from("/b")));
    }
}
