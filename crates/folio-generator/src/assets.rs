//! Static asset copying.
//!
//! Everything under the static directory is copied into the output directory
//! with its relative path preserved. Hidden files and directories are skipped.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Asset copying errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error.
    #[error("failed to walk asset directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Invalid asset path.
    #[error("invalid asset path: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Copy `source_dir` into `dest_dir`, returning the number of files copied.
///
/// A missing source directory copies nothing.
pub fn copy_assets(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    if !source_dir.exists() {
        debug!(source = %source_dir.display(), "no static directory, skipping");
        return Ok(0);
    }

    info!(
        source = %source_dir.display(),
        dest = %dest_dir.display(),
        "copying static assets"
    );

    let walker = WalkDir::new(source_dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name().to_string_lossy().as_ref()));

    let mut count = 0;
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .map_err(|_| AssetError::InvalidPath(entry.path().to_path_buf()))?;
        let dest_path = dest_dir.join(relative);

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest_path)?;
        debug!(file = %relative.display(), "copied asset");
        count += 1;
    }

    info!(count, "assets copied");
    Ok(count)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
