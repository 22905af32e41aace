//! Filter command implementation

use crate::output;
use anyhow::{Context, Result};
use clap::Args;
use stacksift_collector::{run_replay, CollectorConfig};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Recorded sample file
    pub input: PathBuf,

    /// Stack filter pattern (e.g. "database", "models.py", "api.py::UserView::get")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sample file encoding (json, bincode)
    #[arg(long)]
    pub input_format: Option<String>,

    /// Report format (folded, json)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave out stacks seen fewer times than this
    #[arg(long)]
    pub min_count: Option<u64>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: FilterArgs) -> Result<()> {
    let config = resolve_config(&args, CollectorConfig::load(args.config.as_deref())?)?;

    let summary = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            run_replay(&config, &args.input, BufWriter::new(file))?
        }
        None => run_replay(&config, &args.input, std::io::stdout().lock())?,
    };

    let filtering = config.filter.as_deref().is_some_and(|p| !p.is_empty());
    output::print_status(&output::replay_status(
        &summary,
        filtering,
        args.output.as_deref(),
    ));

    Ok(())
}

/// Overlay command-line flags on the file and environment configuration
fn resolve_config(args: &FilterArgs, mut config: CollectorConfig) -> Result<CollectorConfig> {
    if let Some(pattern) = &args.pattern {
        config.filter = Some(pattern.clone());
    }
    if let Some(format) = &args.input_format {
        config.input_format = format.parse()?;
    }
    if let Some(format) = &args.format {
        config.output_format = format.parse()?;
    }
    if let Some(min_count) = args.min_count {
        config.min_count = min_count;
    }

    debug!("Resolved config: {:?}", config);
    Ok(config)
}
