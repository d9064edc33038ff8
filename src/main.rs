//!
//! `cssquash`: compress a stylesheet from stdin to stdout.
//!
//! Takes no arguments. Set `RUST_LOG` for diagnostics on stderr.
//!

use std::io;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Stdout carries the compressed text, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    // A locked stdin is already buffered, so read straight from it.
    cssquash::compress_buffered(stdin.lock(), stdout.lock())
        .context("Could not compress standard input to standard output")?;

    Ok(())
}
