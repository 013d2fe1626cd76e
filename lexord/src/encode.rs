//! Re-encoding entry point - stream plumbing around the pipeline.

use crate::cli::Cli;
use eyre::{Context, Result};
use lexord_bopomofo::BopomofoCodec;
use lexord_core::Pipeline;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Resolved configuration for one re-encoding run.
#[derive(Debug)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl TryFrom<Cli> for Config {
    type Error = eyre::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        Ok(Self {
            input: cli.input,
            output: cli.output,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        input = ?config.input.as_ref().map(|p| p.display().to_string()),
        output = ?config.output.as_ref().map(|p| p.display().to_string()),
        "re-encoding dictionary"
    );

    let reader: Box<dyn BufRead> = match &config.input {
        Some(path) => Box::new(BufReader::new(File::open(path).wrap_err_with(|| {
            format!("failed to open input: {}", path.display())
        })?)),
        None => Box::new(std::io::stdin().lock()),
    };

    let mut writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).wrap_err_with(
            || format!("failed to create output: {}", path.display()),
        )?)),
        None => Box::new(std::io::stdout().lock()),
    };

    let pipeline = Pipeline::new(BopomofoCodec);
    let stats = pipeline
        .run(reader, &mut writer)
        .wrap_err("re-encoding failed")?;
    writer.flush().wrap_err("failed to flush output")?;

    tracing::info!(
        emitted = stats.emitted,
        skipped = stats.skipped,
        "dictionary re-encoded"
    );

    Ok(())
}
