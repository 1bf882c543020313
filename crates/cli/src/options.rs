// crates/cli/src/options.rs
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text table
    #[default]
    Table,
    /// Pretty-printed JSON object
    Json,
}
