mod args;

use std::io::{self, Write};

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use weekday_resolver::shell;

fn main() -> Result<()> {
    let args = Args::parse();

    // Reads RUST_LOG; --verbose overrides it
    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let mut out = io::stdout().lock();
    match args.code {
        Some(raw) => shell::respond(&raw, &mut out).context("failed to write to stdout")?,
        None => shell::prompt_and_respond(&mut io::stdin().lock(), &mut out)
            .context("failed to read a day code")?,
    }
    out.flush().context("failed to flush stdout")?;

    // Invalid codes still exit successfully
    Ok(())
}
