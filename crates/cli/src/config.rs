// crates/cli/src/config.rs
use crate::args::Args;
pub use core_lines_engine::config::{ReportConfig, ReportConfigBuilder};
use std::path::{Path, PathBuf};

/// Directory this tool was built in; the measured package lives beneath it.
pub fn default_base() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

impl From<&Args> for ReportConfig {
    fn from(args: &Args) -> Self {
        let base = args.root.clone().unwrap_or_else(default_base);
        Self {
            base,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_base_is_independent_of_cwd() {
        let base = default_base();
        assert!(base.is_absolute());
        assert!(base.starts_with(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn root_flag_overrides_base_only() {
        let args = Args::parse_from(["core_lines", "--root", "/tmp/project"]);
        let config = ReportConfig::from(&args);
        assert_eq!(config.base, PathBuf::from("/tmp/project"));
        assert_eq!(config.package, "aegis");
        assert_eq!(config.components, ReportConfig::default().components);
    }
}
