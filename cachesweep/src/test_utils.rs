use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new() -> Self {
        let uuid = Uuid::new_v4();
        let path = std::env::temp_dir().join(format!("cachesweep_{uuid}"));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path {
        self.path.as_ref()
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // Tests may have removed parts of the tree already.
        _ = std::fs::remove_dir_all(&self.path);
    }
}

pub fn create_arb_data(range: usize) -> Vec<u8> {
    let mut vec = Vec::with_capacity(range);
    for i in 0..range {
        vec.push((i % 255) as u8);
    }
    vec
}

/// Write `len` bytes to `path`, creating parent directories.
pub fn write_file(path: impl AsRef<Path>, len: usize) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, create_arb_data(len)).unwrap();
}
