#![doc = include_str!("../README.md")]

mod cli;

use clap::Parser;
use cli::command::run;
use cli::config::{CliArgs, CliConfig};
use cli::telemetry::init_telemetry;
use std::io::{self, BufWriter, Write};

// Using mimalloc for better performance when printing large batches.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry()?;
    tracing::debug!(?config, "starting");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
