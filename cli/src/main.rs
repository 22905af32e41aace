//! CLI for stacksift
//!
//! Supports two commands:
//! - filter: replay recorded samples through a stack filter
//! - explain: show how a filter pattern is interpreted

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "stacksift")]
#[command(about = "stacksift - stack filtering for sampling profiles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay recorded samples, keeping stacks that match a pattern
    Filter(commands::filter::FilterArgs),

    /// Show the matching mode and terms a pattern compiles to
    Explain(commands::explain::ExplainArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Filter(args) => {
            init_tracing(args.verbose);
            commands::filter::run(args)
        }
        Commands::Explain(args) => {
            init_tracing(false);
            commands::explain::run(args)
        }
    }
}

/// Logs go to stderr so reports written to stdout stay clean
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
