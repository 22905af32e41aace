//! Folded stack output
//!
//! Writes collapsed stacks (`outer;middle;inner count`), the input format of
//! inferno and flamegraph.pl.

use anyhow::Result;
use stacksift_shared::types::profile::Profile;
use std::io::Write;
use tracing::info;

/// Write the profile as folded stacks, one line per unique stack
pub fn write_folded<W: Write>(profile: &Profile, min_count: u64, mut writer: W) -> Result<()> {
    let lines = profile_to_folded(profile, min_count);
    for line in &lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    info!("Folded output written: {} stacks", lines.len());

    Ok(())
}

/// Convert profile to folded stack format, sorted for stable output.
///
/// Frames are stored innermost first, so they are reversed to put the root
/// of the stack at the left.
pub fn profile_to_folded(profile: &Profile, min_count: u64) -> Vec<String> {
    let mut lines: Vec<String> = profile
        .samples
        .iter()
        .filter(|(_, &count)| count >= min_count)
        .map(|(stack, count)| {
            let folded = stack
                .frames
                .iter()
                .rev()
                .map(|frame| frame.label())
                .collect::<Vec<_>>()
                .join(";");
            format!("{} {}", folded, count)
        })
        .collect();

    lines.sort();
    lines
}
