// crates/engine/src/filesystem.rs
use crate::counter::line_count;
use crate::error::EngineError;
use crate::exclusion::ExclusionSet;
use crate::stats::LineCount;
use globset::GlobMatcher;
use ignore::{DirEntry, WalkBuilder};
use std::path::Path;

/// Sum line counts of files directly inside `root/dir_name`.
///
/// Subdirectories are never entered. Hidden files are skipped, as a shell
/// `*.py` glob would. A missing directory counts zero.
pub fn count_shallow(root: &Path, dir_name: &str, pattern: &GlobMatcher) -> LineCount {
    let dir = root.join(dir_name);
    if !dir.is_dir() {
        log::debug!("{} is not a directory, counting 0", dir.display());
        return LineCount::zero();
    }

    let mut builder = WalkBuilder::new(&dir);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(true)
        .max_depth(Some(1));

    builder
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("{} (in {})", EngineError::from(e), dir.display());
                None
            }
        })
        .filter(|entry| entry.depth() == 1 && is_regular_file(entry))
        .filter(|entry| name_matches(entry, pattern))
        .map(|entry| line_count(entry.path()))
        .sum()
}

/// Sum line counts of an explicit list of files relative to `root`.
///
/// Missing files contribute zero.
pub fn count_files<P: AsRef<Path>>(root: &Path, paths: &[P]) -> LineCount {
    paths
        .iter()
        .map(|p| root.join(p))
        .map(|path| {
            if path.is_file() {
                line_count(&path)
            } else {
                log::debug!("{} is missing, counting 0", path.display());
                LineCount::zero()
            }
        })
        .sum()
}

/// Sum line counts of every file under `root` whose name matches `pattern`
/// and whose root-relative path matches no exclusion.
///
/// Hidden and ignored files are included. Excluded directories are pruned.
pub fn count_recursive_excluding(
    root: &Path,
    pattern: &GlobMatcher,
    exclusions: &ExclusionSet,
) -> LineCount {
    let walk_root = root.to_path_buf();
    let prune = exclusions.clone();

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            let relative = entry.path().strip_prefix(&walk_root).unwrap_or(entry.path());
            !prune.is_excluded_dir(relative)
        });

    builder
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("{} (under {})", EngineError::from(e), root.display());
                None
            }
        })
        .filter(|entry| is_regular_file(entry) && name_matches(entry, pattern))
        .filter(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let excluded = exclusions.is_excluded(relative);
            if excluded {
                log::trace!("excluded {}", relative.display());
            }
            !excluded
        })
        .map(|entry| line_count(entry.path()))
        .sum()
}

fn is_regular_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        // Unfollowed symlinks count when they point at a file.
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

fn name_matches(entry: &DirEntry, pattern: &GlobMatcher) -> bool {
    entry
        .path()
        .file_name()
        .is_some_and(|name| pattern.is_match(name))
}
