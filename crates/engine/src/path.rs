// crates/engine/src/path.rs
use crate::error::{EngineError, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Resolve `base/package` to a canonical directory.
///
/// # Errors
/// Returns [`EngineError::RootResolution`] if the path does not exist,
/// cannot be canonicalized, or is not a directory.
pub fn resolve_root(base: &Path, package: &str) -> Result<PathBuf> {
    let candidate = logical_absolute(&base.join(package));
    let resolved = candidate
        .canonicalize()
        .map_err(|source| EngineError::RootResolution {
            path: candidate.clone(),
            source,
        })?;

    if !resolved.is_dir() {
        return Err(EngineError::RootResolution {
            path: resolved,
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    Ok(resolved)
}
