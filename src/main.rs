mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Args;
use ict_reader::InstrumentReader;
use std::process;

fn main() {
    let args = Args::parse();
    cli::setup_logging(&args);

    if let Err(error) = run(&args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let reader = InstrumentReader::new(args.config()).with_subset(args.subset.iter().cloned());

    let files = reader
        .discover(&args.code)
        .with_context(|| format!("Failed to find files for instrument '{}'", args.code))?;

    let frame = reader
        .read_paths(&files)
        .with_context(|| format!("Failed to read instrument '{}'", args.code))?;

    cli::print_summary(&files, &frame, args.rows)
}
