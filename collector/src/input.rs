//! Recorded sample files
//!
//! A sample file holds a list of [`StackSample`]s, either as a JSON array or
//! as a bincode-encoded `Vec` (fixint encoding).

use crate::config::InputFormat;
use crate::error::{CollectorError, Result};
use anyhow::Context;
use bincode::Options;
use stacksift_shared::types::events::StackSample;
use std::path::Path;
use tracing::{debug, info};

fn bincode_options() -> impl Options {
    bincode::config::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
}

/// Read every sample from `path`
pub fn read_samples(path: &Path, format: InputFormat) -> Result<Vec<StackSample>> {
    let bytes = std::fs::read(path).map_err(|source| CollectorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let samples: Vec<StackSample> = match format {
        InputFormat::Json => {
            serde_json::from_slice(&bytes).map_err(|source| CollectorError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        InputFormat::Bincode => {
            bincode_options()
                .deserialize(&bytes)
                .map_err(|source| CollectorError::Bincode {
                    path: path.to_path_buf(),
                    source,
                })?
        }
    };

    info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Encode samples in the given format
pub fn encode_samples(samples: &[StackSample], format: InputFormat) -> anyhow::Result<Vec<u8>> {
    let bytes = match format {
        InputFormat::Json => serde_json::to_vec(samples)?,
        InputFormat::Bincode => bincode_options().serialize(samples)?,
    };
    Ok(bytes)
}

/// Write samples to `path` in the given format
pub fn write_samples(
    path: &Path,
    samples: &[StackSample],
    format: InputFormat,
) -> anyhow::Result<()> {
    let bytes = encode_samples(samples, format)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write sample file: {}", path.display()))?;
    Ok(())
}
