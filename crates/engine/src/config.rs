// crates/engine/src/config.rs
use crate::error::{EngineError, Result};
use crate::exclusion::ExclusionSet;
use derive_builder::Builder;
use globset::{Glob, GlobMatcher};
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "aegis core agent line count";
pub const DEFAULT_PACKAGE: &str = "aegis";
pub const DEFAULT_FILE_PATTERN: &str = "*.py";
pub const DEFAULT_COMPONENTS: &[&str] = &[
    "agent",
    "agent/tools",
    "bus",
    "config",
    "cron",
    "heartbeat",
    "session",
    "utils",
];
pub const DEFAULT_ROOT_FILES: &[&str] = &["__init__.py", "__main__.py"];
pub const DEFAULT_EXCLUSIONS: &[&str] = &["channels/", "cli/", "providers/"];

/// Fixed layout of the project being measured.
///
/// Every path except `base` is relative to the package root `base/package`.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ReportConfig {
    #[builder(default = "PathBuf::from(\".\")")]
    pub base: PathBuf,
    #[builder(default = "DEFAULT_PACKAGE.to_string()")]
    pub package: String,
    #[builder(default = "DEFAULT_TITLE.to_string()")]
    pub title: String,
    #[builder(default = "to_strings(DEFAULT_COMPONENTS)")]
    pub components: Vec<String>,
    #[builder(default = "DEFAULT_ROOT_FILES.iter().map(PathBuf::from).collect()")]
    pub root_files: Vec<PathBuf>,
    #[builder(default = "DEFAULT_FILE_PATTERN.to_string()")]
    pub file_pattern: String,
    #[builder(default = "to_strings(DEFAULT_EXCLUSIONS)")]
    pub exclusions: Vec<String>,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl ReportConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(package) = &self.package
            && package.trim().is_empty()
        {
            return Err("package name must not be empty".to_string());
        }
        if let Some(pattern) = &self.file_pattern {
            Glob::new(pattern).map_err(|e| format!("invalid file pattern '{pattern}': {e}"))?;
        }
        if let Some(exclusions) = &self.exclusions {
            ExclusionSet::parse(exclusions).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
            package: DEFAULT_PACKAGE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            components: to_strings(DEFAULT_COMPONENTS),
            root_files: DEFAULT_ROOT_FILES.iter().map(PathBuf::from).collect(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            exclusions: to_strings(DEFAULT_EXCLUSIONS),
        }
    }
}

impl ReportConfig {
    /// Compile the file-name pattern.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidPattern`] if the glob does not parse.
    pub fn matcher(&self) -> Result<GlobMatcher> {
        compile_pattern(&self.file_pattern)
    }

    /// # Errors
    /// Returns [`EngineError::Config`] for an exclusion with no path segments.
    pub fn exclusion_set(&self) -> Result<ExclusionSet> {
        ExclusionSet::parse(&self.exclusions)
    }
}

/// Compile a file-name glob such as `*.py`.
///
/// # Errors
/// Returns [`EngineError::InvalidPattern`] if the glob does not parse.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|g| g.compile_matcher())
        .map_err(|source| EngineError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

impl From<ReportConfigBuilderError> for EngineError {
    fn from(e: ReportConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ReportConfigBuilder::default().build().unwrap();
        let default = ReportConfig::default();
        assert_eq!(built.package, default.package);
        assert_eq!(built.components, default.components);
        assert_eq!(built.root_files, default.root_files);
        assert_eq!(built.exclusions, default.exclusions);
        assert_eq!(built.file_pattern, "*.py");
    }

    #[test]
    fn component_order_is_preserved() {
        let config = ReportConfigBuilder::default()
            .components(vec!["zeta".to_string(), "alpha".to_string()])
            .build()
            .unwrap();
        assert_eq!(config.components, ["zeta", "alpha"]);
    }

    #[test]
    fn rejects_bad_glob() {
        let err = ReportConfigBuilder::default()
            .file_pattern("[*.py")
            .build()
            .unwrap_err();
        assert!(EngineError::from(err).to_string().contains("invalid file pattern"));
    }

    #[test]
    fn rejects_empty_exclusion() {
        let result = ReportConfigBuilder::default()
            .exclusions(vec!["/".to_string()])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn matcher_checks_file_names() {
        let matcher = ReportConfig::default().matcher().unwrap();
        assert!(matcher.is_match("loop.py"));
        assert!(!matcher.is_match("loop.pyc"));
        assert!(!matcher.is_match("README.md"));
    }
}
