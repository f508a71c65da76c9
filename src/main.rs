//! # TI-Basic
//!
//! The calculator programming language, on your terminal.
//!

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod term;

/// An interpreter for the TI-Basic calculator programming language.
#[derive(Parser, Debug)]
#[command(name = "tibasic", version, about)]
pub struct Cli {
    /// Program file to run. Its name is the file name without extension.
    pub file: Option<PathBuf>,
    /// Enter the home screen after running FILE.
    #[arg(short, long)]
    pub interactive: bool,
    /// Log every executed command to stderr.
    #[arg(short, long)]
    pub debug: bool,
    /// Where prgm calls look for NAME.tib.
    #[arg(short, long, value_name = "DIR")]
    pub program_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    std::process::exit(term::main(cli));
}
