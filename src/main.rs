#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]

use anyhow::Result;
use clap::Parser;
use fitness_tracker::{cli, package, report, utils};
use std::io::{self, Write};

#[macro_use]
extern crate fitness_tracker;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let format = cli.format();
    let packages = if cli.packages.is_empty() {
        dlog!("mode=demo");
        package::demo_packages()
    } else {
        dlog!("mode=args packages={}", cli.packages.len());
        cli.packages
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::report(&packages, format, &mut out)?;
    out.flush()?;

    Ok(())
}
