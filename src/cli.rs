//! Command-line interface components.

use anyhow::Result;
use clap::Parser;
use colored::*;
use ict_reader::IctConfig;
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "ict-inspect")]
#[command(about = "Merge the ICARTT files of one instrument and summarize the result")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Instrument code contained in the file names (e.g. AMS)
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Directory containing the ICARTT files
    #[arg(short, long, default_value = ict_reader::constants::DEFAULT_INPUT_DIRECTORY)]
    pub directory: PathBuf,

    /// Drop rows where all of these columns are missing (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub subset: Vec<String>,

    /// Number of rows to preview
    #[arg(short = 'n', long, default_value_t = 10)]
    pub rows: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> IctConfig {
        IctConfig::default().with_input_directory(&self.directory)
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ict_reader={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Print the matched files and a preview of the merged table
pub fn print_summary(files: &[PathBuf], frame: &DataFrame, rows: usize) -> Result<()> {
    println!("{}", "Instrument files".bright_green().bold());
    for file in files {
        println!("  {}", display_name(file).bright_white());
    }

    println!("\n{}", "Merged table".bright_green().bold());
    println!(
        "  {} {}",
        "Rows:".bright_cyan(),
        frame.height().to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Columns:".bright_cyan(),
        frame.width().to_string().bright_white().bold()
    );

    for (name, dtype) in frame.schema().iter() {
        println!("    {} {}", name.as_str().bright_white(), format!("({})", dtype).bright_black());
    }

    if rows > 0 {
        println!("\n{}", "Preview".bright_green().bold());
        println!("{}", frame.head(Some(rows)));
    }

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
