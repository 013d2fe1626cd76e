//! CLI argument definitions using clap.

use clap::Parser;
use eyre::Result;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lexord")]
#[command(about = "Re-encode phonetic dictionary readings into canonical ordinal keys")]
#[command(version)]
pub struct Cli {
    /// Input dictionary file (stdin when omitted)
    pub input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    crate::encode::execute(cli.try_into()?)
}
