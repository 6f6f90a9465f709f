#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use fitcalc::{cli, message, package, utils};
use std::io::{self, Write};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let entries: Vec<package::Entry> = match &cli.input {
        Some(path) => package::parse_packages(&utils::read_input(path)?)?,
        None => {
            dlog!("mode=demo");
            package::demo_packages().into_iter().map(Ok).collect()
        }
    };
    dlog!(
        "packages={} format={:?} strict={}",
        entries.len(),
        cli.format,
        cli.strict
    );

    let summaries = if cli.strict {
        package::process_strict(&entries)?
    } else {
        let report = package::process(&entries);
        if report.skipped > 0 {
            tracing::info!(
                processed = report.summaries.len(),
                skipped = report.skipped,
                "batch done"
            );
        }
        report.summaries
    };

    let mut out = io::stdout().lock();
    for info in &summaries {
        writeln!(out, "{}", message::render(info, cli.format)?)?;
    }

    Ok(())
}
