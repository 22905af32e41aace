//! Sample Collector Library
//!
//! Replays recorded stack samples through the stack filter, aggregates the
//! stacks that pass, and writes folded or JSON reports.

pub mod collector;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use collector::StackCollector;
pub use config::{CollectorConfig, InputFormat, OutputFormat};
pub use error::CollectorError;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Outcome of a replay run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Samples that passed the filter
    pub kept: u64,
    /// Samples rejected by the filter
    pub filtered: u64,
    /// Distinct stacks in the report
    pub unique_stacks: usize,
}

/// Replay the samples in `input` and write the report to `writer`
pub fn run_replay<W: Write>(config: &CollectorConfig, input: &Path, writer: W) -> Result<ReplaySummary> {
    config.validate()?;

    // Compiled once, reused for every sample
    let matcher = config.compile_filter();
    let samples = input::read_samples(input, config.input_format)
        .with_context(|| format!("Failed to load samples from {}", input.display()))?;

    let mut collector = StackCollector::new(matcher);
    for sample in samples {
        collector.add_sample(sample);
    }

    let profile = collector.build_profile();
    match config.output_format {
        OutputFormat::Folded => output::folded::write_folded(&profile, config.min_count, writer)?,
        OutputFormat::Json => output::json::write_json(&profile, writer)?,
    }

    let summary = ReplaySummary {
        kept: collector.sample_count() as u64,
        filtered: profile.filtered_samples,
        unique_stacks: profile.unique_stacks(),
    };
    info!(
        "Replay complete: {} kept, {} filtered",
        summary.kept, summary.filtered
    );

    Ok(summary)
}
