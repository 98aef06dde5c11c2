use std::{fs, io::ErrorKind, path::Path};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{CacheDirectorySet, Result};

/// Sum the sizes of all regular files below `path`.
///
/// Symlinks are not followed and, like directories and special files, add
/// nothing to the total. This includes `path` itself: a missing root, or a
/// symlink or file in place of the directory, measures as zero, matching what
/// [clear_directory] leaves alone. Any other error aborts the walk.
pub fn dir_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();

    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => return Ok(0),
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
        Err(err) => return Err(err.into()),
    }

    let mut total = 0u64;
    for entry in WalkDir::new(path).follow_root_links(false) {
        let entry = match entry {
            // Removed between the check above and the walk
            Err(err) if err.depth() == 0 && is_not_found(&err) => return Ok(0),
            entry => entry?,
        };

        if entry.file_type().is_file() {
            total = total.saturating_add(entry.metadata()?.len());
        }
    }

    Ok(total)
}

/// Measure a single directory, logging failures and counting them as zero.
pub fn measure_dir(path: impl AsRef<Path>) -> u64 {
    let path = path.as_ref();
    match dir_size(path) {
        Ok(size) => {
            debug!(path = %path.display(), size, "Measured cache directory");
            size
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Failed to measure cache directory");
            0
        }
    }
}

/// Total size of every directory in the set. Never fails.
pub fn measure_size(directories: &CacheDirectorySet) -> u64 {
    directories
        .iter()
        .map(measure_dir)
        .fold(0u64, u64::saturating_add)
}

/// Delete everything below `path`, bottom-up.
///
/// The directory itself is removed only if `delete_root` is set and nothing
/// was left behind. Failures are logged and skipped. A missing `path` is a no-op.
pub fn clear_directory(path: impl AsRef<Path>, delete_root: bool) {
    let path = path.as_ref();

    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Cache directory already absent");
            return;
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Failed to inspect cache directory");
            return;
        }
    };

    // A plain file or a symlink in place of the directory
    if !metadata.is_dir() {
        if delete_root {
            remove_entry(path, false);
        }
        return;
    }

    for entry in WalkDir::new(path).min_depth(1).contents_first(true) {
        match entry {
            Ok(entry) => remove_entry(entry.path(), entry.file_type().is_dir()),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Skipping unreadable cache entry")
            }
        }
    }

    if delete_root {
        remove_entry(path, true);
    }
}

/// Clear every directory in the set. Never fails.
pub fn clear_directories(directories: &CacheDirectorySet, delete_root: bool) {
    for path in directories {
        clear_directory(path, delete_root);
    }
}

fn remove_entry(path: &Path, is_dir: bool) {
    let result = if is_dir {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Failed to remove cache entry")
        }
    }
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|err| err.kind() == ErrorKind::NotFound)
        .unwrap_or(false)
}
