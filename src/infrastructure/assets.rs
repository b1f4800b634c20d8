// SPDX-License-Identifier: MPL-2.0
//! File access for artwork assets.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Reads a code asset as UTF-8 text.
pub async fn read_code_asset(path: PathBuf) -> Result<String> {
    tokio::fs::read_to_string(&path).await.map_err(|err| {
        Error::Io(format!("failed to read {}: {}", path.display(), err))
    })
}

/// Copies an artwork image to a user-chosen destination.
///
/// Returns the destination path on success so the caller can report it.
pub async fn save_image_copy(source: PathBuf, destination: PathBuf) -> Result<PathBuf> {
    if same_file(&source, &destination) {
        return Ok(destination);
    }
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::copy(&source, &destination).await.map_err(|err| {
        Error::Io(format!(
            "failed to copy {} to {}: {}",
            source.display(),
            destination.display(),
            err
        ))
    })?;
    Ok(destination)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
