//! Table inspector (default binary).
//!
//! Prints the shipped configuration tables, answers single lookups and
//! re-validates table invariants. See [`blockfall::cli`] for commands.

use std::io::{self, Write};

use anyhow::Result;
use env_logger::{Builder, Env};

use blockfall::cli::{parse_args, run, CliConfig};

fn main() -> Result<()> {
    Builder::from_env(Env::new().filter_or("BLOCKFALL_LOG", "warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args, CliConfig::from_env())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
