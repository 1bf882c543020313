// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
///
/// The measured layout is fixed in [`core_lines_engine::ReportConfig`]; only
/// presentation and diagnostics are configurable here.
#[derive(Parser, Debug)]
#[command(
    name = "core_lines",
    version = crate::VERSION,
    about = "Report core source line counts for the aegis package"
)]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Project root to use instead of the built-in location
    #[arg(long, hide = true, value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,
}
