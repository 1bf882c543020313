// crates/engine/src/report.rs
use crate::config::ReportConfig;
use crate::error::Result;
use crate::filesystem::{count_files, count_recursive_excluding, count_shallow};
use crate::path::resolve_root;
use crate::stats::{CountEntry, Report};

/// Label used for the combined root-file row.
pub const ROOT_LABEL: &str = "(root)";

/// Build the report for `config`.
///
/// Rows follow the configured component order, then the root-file group.
/// The root is resolved and the configuration compiled before anything is
/// counted.
///
/// # Errors
/// Returns an error if the root cannot be resolved or the configuration is
/// invalid. Unreadable files never fail the report.
pub fn generate(config: &ReportConfig) -> Result<Report> {
    let root = resolve_root(&config.base, &config.package)?;
    let pattern = config.matcher()?;
    let exclusions = config.exclusion_set()?;
    log::debug!("counting under {}", root.display());

    let mut entries = Vec::with_capacity(config.components.len() + 1);
    for dir in &config.components {
        let lines = count_shallow(&root, dir, &pattern);
        log::debug!("{dir}/: {lines} lines");
        entries.push(CountEntry::new(format!("{dir}/"), lines));
    }

    let root_lines = count_files(&root, &config.root_files);
    log::debug!("{ROOT_LABEL}: {root_lines} lines");
    entries.push(CountEntry::new(ROOT_LABEL, root_lines));

    let total = count_recursive_excluding(&root, &pattern, &exclusions);
    log::debug!("core total: {total} lines");

    Ok(Report {
        title: config.title.clone(),
        entries,
        total,
        excludes: exclusions.labels(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfigBuilder;
    use crate::error::EngineError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, lines: usize) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "pass\n".repeat(lines)).unwrap();
    }

    fn sample_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("aegis");
        write(&pkg, "__init__.py", 5);
        write(&pkg, "agent/loop.py", 30);
        write(&pkg, "agent/memory.py", 12);
        write(&pkg, "agent/tools/shell.py", 8);
        write(&pkg, "bus/queue.py", 4);
        write(&pkg, "channels/telegram.py", 100);
        write(&pkg, "providers/base.py", 40);
        write(&pkg, "cli/commands.py", 60);
        write(&pkg, "skills/registry.py", 7);
        temp
    }

    fn config_for(base: &Path) -> ReportConfig {
        ReportConfigBuilder::default().base(base).build().unwrap()
    }

    #[test]
    fn rows_follow_configured_order() {
        let temp = sample_tree();
        let report = generate(&config_for(temp.path())).unwrap();
        let labels: Vec<_> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "agent/",
                "agent/tools/",
                "bus/",
                "config/",
                "cron/",
                "heartbeat/",
                "session/",
                "utils/",
                "(root)"
            ]
        );
    }

    #[test]
    fn counts_each_aggregation() {
        let temp = sample_tree();
        let report = generate(&config_for(temp.path())).unwrap();
        let lines: Vec<usize> = report.entries.iter().map(|e| e.lines.value()).collect();
        assert_eq!(lines, [42, 8, 4, 0, 0, 0, 0, 0, 5]);
        // skills/ is not a listed component but still counts toward the total.
        assert_eq!(report.total, 66usize);
        assert_eq!(report.excludes, ["channels/", "cli/", "providers/"]);
    }

    #[test]
    fn missing_root_aborts_before_counting() {
        let temp = TempDir::new().unwrap();
        let err = generate(&config_for(temp.path())).unwrap_err();
        assert!(matches!(err, EngineError::RootResolution { .. }));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let temp = sample_tree();
        let config = config_for(temp.path());
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }
}
