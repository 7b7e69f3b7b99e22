mod commands;
mod config;
mod format;
mod telemetry;

use clap::Parser;
use config::{CliArgs, CliConfig};
use std::io::{BufWriter, Write};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry()?;
    tracing::debug!(?config, "starting");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    commands::run(config, &mut out)?;
    out.flush()?;
    Ok(())
}
