//! Outline Extract CLI
//!
//! Usage:
//!   outline-extract [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>   Configuration file (TOML format)
//!   -i, --input <FILE>    SVG drawing to read
//!       --header <FILE>   Generated header to write
//!       --source <FILE>   Generated source to write
//!       --check           Verify the generated files are up to date
//!   -v, --verbose         More log output (repeatable)
//!   -h, --help            Print help

use std::path::PathBuf;

use clap::Parser;

use outline_extract::{load_config, run, ExtractConfig, RunMode};

#[derive(Parser)]
#[command(name = "outline-extract")]
#[command(about = "Bake labeled SVG path outlines into fixed-point C++ tables")]
struct Cli {
    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SVG drawing to read [default: outlines.svg]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Generated header to write [default: ../src/Outlines.h]
    #[arg(long)]
    header: Option<PathBuf>,

    /// Generated source to write [default: ../src/Outlines.cpp]
    #[arg(long)]
    source: Option<PathBuf>,

    /// Verify the generated files are up to date instead of writing them
    #[arg(long)]
    check: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}", e.format());
                std::process::exit(1);
            }
        },
        None => ExtractConfig::default(),
    };

    // Command line paths take precedence over the file
    if let Some(input) = cli.input {
        config = config.with_input(input);
    }
    if let Some(header) = cli.header {
        config = config.with_header(header);
    }
    if let Some(source) = cli.source {
        config = config.with_source(source);
    }

    let mode = if cli.check {
        RunMode::Check
    } else {
        RunMode::Write
    };

    match run(&config, mode) {
        Ok(summary) => {
            log::info!(
                "{} outlines, {} nodes",
                summary.outlines,
                summary.nodes
            );
        }
        Err(e) => {
            eprintln!("{}", e.format());
            std::process::exit(1);
        }
    }
}
