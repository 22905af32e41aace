//! Profile data structures
//!
//! These types represent sampled stacks and the aggregated profile built
//! from them, suitable for filtering, storage and visualization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single frame in a captured stack
///
/// Both attributes are optional: samplers that could not resolve a frame
/// leave them unset. A missing field and an explicit `null` deserialize to
/// the same `None`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Frame {
    /// Source file path (if available)
    #[serde(default)]
    pub filename: Option<String>,

    /// Function name, possibly qualified (e.g. `UserView.get`)
    #[serde(default)]
    pub funcname: Option<String>,

    /// Line number (if available)
    #[serde(default)]
    pub lineno: Option<u32>,
}

impl Frame {
    /// Create a frame from a file path and a function name
    pub fn new(filename: impl Into<String>, funcname: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            funcname: Some(funcname.into()),
            lineno: None,
        }
    }

    /// Set the line number
    pub fn with_lineno(mut self, lineno: u32) -> Self {
        self.lineno = Some(lineno);
        self
    }

    /// Human-readable label used in folded stack output
    pub fn label(&self) -> String {
        let func = self
            .funcname
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or("<unknown>");

        let label = match self.filename.as_deref().filter(|f| !f.is_empty()) {
            Some(file) => format!("{} ({})", func, file),
            None => func.to_string(),
        };

        // ';' separates frames in the folded format
        label.replace(';', ":")
    }
}

/// A complete captured stack
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Stack {
    /// Frames from innermost (top) to outermost (bottom)
    pub frames: Vec<Frame>,
}

impl Stack {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

/// One unique stack and how many times it was sampled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackCount {
    pub stack: Stack,
    pub count: u64,
}

/// Aggregated profile data for a replayed or captured session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Timestamp of the earliest kept sample
    pub start_time: u64,

    /// Timestamp of the latest kept sample
    pub end_time: u64,

    /// Sample counts per stack trace
    #[serde(with = "stack_counts")]
    pub samples: HashMap<Stack, u64>,

    /// Total number of samples kept
    pub total_samples: u64,

    /// Number of samples rejected by the stack filter
    pub filtered_samples: u64,
}

impl Profile {
    /// Create a new empty profile
    pub fn new(start_time: u64, end_time: u64) -> Self {
        Self {
            start_time,
            end_time,
            ..Default::default()
        }
    }

    /// Add a sample to the profile
    pub fn add_sample(&mut self, stack: Stack) {
        *self.samples.entry(stack).or_insert(0) += 1;
        self.total_samples += 1;
    }

    /// Get the duration of the profile in nanoseconds
    pub fn duration_ns(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }

    /// Number of distinct stacks in the profile
    pub fn unique_stacks(&self) -> usize {
        self.samples.len()
    }

    /// Stacks ordered by descending count, ties broken by stack contents
    pub fn sorted_stacks(&self) -> Vec<(&Stack, u64)> {
        sort_by_count(&self.samples)
    }
}

fn sort_by_count(samples: &HashMap<Stack, u64>) -> Vec<(&Stack, u64)> {
    let mut stacks: Vec<(&Stack, u64)> =
        samples.iter().map(|(stack, &count)| (stack, count)).collect();
    stacks.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    stacks
}

/// JSON maps need string keys, so stack counts go over the wire as a list.
mod stack_counts {
    use super::{Stack, StackCount};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct StackCountRef<'a> {
        stack: &'a Stack,
        count: u64,
    }

    pub fn serialize<S: Serializer>(
        samples: &HashMap<Stack, u64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let entries: Vec<StackCountRef<'_>> = super::sort_by_count(samples)
            .into_iter()
            .map(|(stack, count)| StackCountRef { stack, count })
            .collect();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<Stack, u64>, D::Error> {
        let entries = Vec::<StackCount>::deserialize(deserializer)?;
        let mut samples = HashMap::with_capacity(entries.len());
        for entry in entries {
            *samples.entry(entry.stack).or_insert(0) += entry.count;
        }
        Ok(samples)
    }
}
