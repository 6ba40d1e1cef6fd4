use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use secret_keygen::{emit, KeySeed, OUTPUT_PATH};

/// Generates a random 128-bit key and writes it into src/trusted/secret.c.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Arbitrary seed for a reproducible key
    #[arg(allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    seed: Option<OsString>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let seed = args.seed.map(KeySeed::from);

    emit(seed.as_ref()).with_context(|| format!("Failed to write {}", OUTPUT_PATH))?;

    Ok(())
}
