//! `enigma`: enciphers and deciphers messages with a configured rotor machine.
//!
//! **Usage:**
//! ```text
//! enigma <CONFIG> [INPUT] [OUTPUT] [--verbose]
//! ```
//!
//! `CONFIG` is a machine description, classic or `.toml`. Messages are read
//! from `INPUT` (default: stdin) and written to `OUTPUT` (default: stdout).
//! Logs go to stderr; `RUST_LOG` overrides the level.
//!
//! Exits non-zero on any configuration, input or output error.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use enigma_clients::process;
use enigma_config::load_machine;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run messages through a rotor cipher machine.
#[derive(Parser)]
#[command(
    name = "enigma",
    version,
    about = "Encipher and decipher messages with a rotor cipher machine"
)]
struct Args {
    /// Machine description file.
    config: PathBuf,

    /// Message file (default: standard input).
    input: Option<PathBuf>,

    /// Output file (default: standard output).
    output: Option<PathBuf>,

    /// Log each message line.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(args.verbose)
        .with_writer(io::stderr)
        .init();

    let mut machine = load_machine(&args.config)
        .with_context(|| format!("reading machine from {}", args.config.display()))?;
    info!(
        config = %args.config.display(),
        slots = machine.num_rotors(),
        pawls = machine.num_pawls(),
        rotors = machine.rotors().len(),
        "machine loaded"
    );

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("could not open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not open {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    process(&mut machine, input, output)?;
    Ok(())
}
