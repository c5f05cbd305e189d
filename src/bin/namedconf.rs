//! Command-line interface for namedconf
//!
//! Parses named.conf files and prints them in one of the registered output
//! formats.
//!
//! Usage:
//!   namedconf execute `<path>` [--format `<format>`]         - Parse and render a file
//!   namedconf search `<path>` `<kind>` [--format `<format>`] - Render top-level statements of one kind
//!   namedconf list-formats                                - List available output formats
use clap::{Parser, Subcommand};
use namedconf::namedconf::formats::FormatRegistry;
use namedconf::namedconf::processor::{process_file, search_file, ProcessingError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "namedconf")]
#[command(version, about = "A tool for inspecting and converting named.conf files")]
struct Args {
    /// Log debug events to stderr (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a file and render it
    Execute {
        /// Path to the named.conf file
        path: PathBuf,
        /// Output format (conf, json, yaml, treeviz)
        #[arg(short, long, default_value = "conf")]
        format: String,
    },
    /// Render the top-level statements of one kind
    Search {
        path: PathBuf,
        /// Statement tag, e.g. `zone` or `check-names`
        kind: String,
        #[arg(short, long, default_value = "conf")]
        format: String,
    },
    /// List available output formats
    ListFormats,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(command: Command) -> Result<(), ProcessingError> {
    match command {
        Command::Execute { path, format } => {
            println!("{}", process_file(&path, &format)?);
        }
        Command::Search { path, kind, format } => {
            println!("{}", search_file(&path, &kind, &format)?);
        }
        Command::ListFormats => {
            println!("Available output formats:\n");
            for (name, description) in FormatRegistry::default().describe() {
                println!("  {}", name);
                println!("    {}", description);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
