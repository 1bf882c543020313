// crates/engine/src/exclusion.rs
//! Exclusion matching on whole path segments.
//!
//! A pattern is split on `/` into segments. With a trailing `/` it names
//! directories only and matches when its segments occur as a contiguous run of
//! a file's parent components. Without one the run may also end on the file
//! name. Matching is unanchored but never splits a segment, so `channels/`
//! excludes `a/channels/x.py` but not `mychannels/x.py`.

use crate::error::{EngineError, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    raw: String,
    segments: Vec<OsString>,
    dir_only: bool,
}

impl Exclusion {
    /// # Errors
    /// Returns [`EngineError::Config`] when the pattern has no segments.
    pub fn parse(raw: &str) -> Result<Self> {
        let segments: Vec<OsString> = raw
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .map(OsString::from)
            .collect();
        if segments.is_empty() {
            return Err(EngineError::Config(format!(
                "exclusion pattern '{raw}' has no path segments"
            )));
        }
        Ok(Self {
            raw: raw.to_string(),
            segments,
            dir_only: raw.ends_with('/'),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Test a path relative to the walk root.
    pub fn matches(&self, relative: &Path) -> bool {
        let components = normal_components(relative);
        let searchable = if self.dir_only {
            // Drop the file name: only directories can satisfy the pattern.
            &components[..components.len().saturating_sub(1)]
        } else {
            &components[..]
        };
        self.matches_components(searchable)
    }

    /// Test a directory path relative to the walk root, so whole subtrees
    /// can be pruned before they are entered.
    pub fn matches_dir(&self, relative: &Path) -> bool {
        self.matches_components(&normal_components(relative))
    }

    fn matches_components(&self, components: &[&OsStr]) -> bool {
        let n = self.segments.len();
        components.len() >= n
            && components
                .windows(n)
                .any(|w| w.iter().zip(&self.segments).all(|(a, b)| *a == b.as_os_str()))
    }
}

// Non-UTF-8 names keep their position so neighbours never look adjacent.
fn normal_components(path: &Path) -> Vec<&OsStr> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s),
            _ => None,
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    patterns: Vec<Exclusion>,
}

impl ExclusionSet {
    /// # Errors
    /// Returns the first pattern that fails [`Exclusion::parse`].
    pub fn parse<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Exclusion::parse(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn is_excluded(&self, relative: &Path) -> bool {
        self.patterns.iter().any(|p| p.matches(relative))
    }

    pub fn is_excluded_dir(&self, relative: &Path) -> bool {
        self.patterns.iter().any(|p| p.matches_dir(relative))
    }

    /// Patterns in configured order, as written.
    pub fn labels(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.as_str().to_string()).collect()
    }
}
