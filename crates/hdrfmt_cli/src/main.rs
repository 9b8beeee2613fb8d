//! hdrfmt CLI
//!
//! Reads events as JSON lines (`{"headers": {...}, "body": "..."}`) from
//! stdin and writes them to stdout with their headers formatted in front.
//!
//! # Commands
//!
//! - `write` - Serialize events: prefix, body, optional newline
//! - `render` - Print only the formatted header prefix of each event
//! - `show-config` - Display the resolved format configuration
//!
//! Options are passed as `-o key=value`, e.g.
//! `hdrfmt -o headers='host file' -o headers_gf_s=', ' write`.

mod commands;

use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;

/// Header serializer for event streams.
#[derive(Parser)]
#[command(name = "hdrfmt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Format option as key=value (repeatable)
    #[arg(global = true, short = 'o', long = "option", value_name = "KEY=VALUE")]
    options: Vec<String>,

    /// Only use options under this prefix, e.g. `serializer.`
    #[arg(global = true, long)]
    prefix: Option<String>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serialize events from stdin to stdout
    Write,

    /// Print the formatted header prefix of each event
    Render,

    /// Display the resolved format configuration
    ShowConfig {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the serialized stream.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let options = commands::build_options(&cli.options, cli.prefix.as_deref())?;

    match cli.command {
        Commands::Write => {
            commands::write::run(&options, io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Render => {
            commands::render::run(&options, io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::ShowConfig { format } => {
            commands::show_config::run(&options, &format, io::stdout().lock())?;
        }
        Commands::Version => {
            println!("hdrfmt CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("hdrfmt core v{}", hdrfmt_core::VERSION);
        }
    }

    Ok(())
}
