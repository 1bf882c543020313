// crates/cli/src/lib.rs
//! `core_lines`: core source line report for the aegis package.
//!
//! The binary measures `<checkout>/aegis`, where `<checkout>` is the
//! workspace directory this crate was built from (two levels above
//! `crates/cli`). It expects the Python package to sit beside the workspace
//! `Cargo.toml`:
//!
//! ```text
//! <checkout>/
//! ├── Cargo.toml
//! ├── crates/cli/
//! └── aegis/
//!     ├── __init__.py
//!     ├── agent/
//!     └── ...
//! ```
//!
//! If that directory is missing the run fails with exit code 1 before any
//! counting. The hidden `--root <DIR>` flag substitutes another checkout.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::args::Args;
use crate::error::Result;
use core_lines_engine::ReportConfig;

/// Generate and render the report described by `args`.
///
/// # Errors
/// Returns an error if the project root cannot be resolved, the built-in
/// configuration is invalid, or the output cannot be serialized.
pub fn run(args: &Args) -> Result<String> {
    let config = ReportConfig::from(args);
    let report = core_lines_engine::generate(&config)?;
    presentation::render(&report, args.format)
}
