//! JSON output
//!
//! Exports profile data in JSON format for further analysis

use anyhow::{Context, Result};
use stacksift_shared::types::profile::Profile;
use std::io::Write;
use tracing::info;

/// Write the profile as pretty-printed JSON
pub fn write_json<W: Write>(profile: &Profile, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, profile)
        .context("Failed to serialize profile to JSON")?;
    writeln!(writer)?;
    writer.flush()?;

    info!(
        "JSON output written: {} unique stacks",
        profile.unique_stacks()
    );

    Ok(())
}
