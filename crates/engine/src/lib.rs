// crates/engine/src/lib.rs
//! Line counting engine behind the `core_lines` report.
//!
//! Three aggregations feed one [`Report`]: shallow counts for each configured
//! component directory, a combined count for the package's root files, and a
//! recursive total over the whole package with excluded subtrees removed.
//! Every operation takes the resolved root explicitly.

pub mod config;
pub mod counter;
pub mod error;
pub mod exclusion;
pub mod filesystem;
pub mod path;
pub mod report;
pub mod stats;

pub use config::{ReportConfig, ReportConfigBuilder};
pub use counter::line_count;
pub use error::{EngineError, Result};
pub use exclusion::ExclusionSet;
pub use filesystem::{count_files, count_recursive_excluding, count_shallow};
pub use report::generate;
pub use stats::{CountEntry, LineCount, Report};
