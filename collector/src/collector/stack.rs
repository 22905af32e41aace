//! Stack sample collector
//!
//! Applies the stack filter to incoming samples and builds profile data from
//! the ones that pass.

use stacksift_filter::{stack_matches, FrameMatcher};
use stacksift_shared::types::events::StackSample;
use stacksift_shared::types::profile::{Profile, Stack};
use tracing::{debug, info};

/// Filtering stack collector
#[derive(Debug, Default)]
pub struct StackCollector {
    /// Compiled filter, `None` keeps every sample
    matcher: Option<FrameMatcher>,

    /// Samples that passed the filter
    samples: Vec<StackSample>,

    /// Number of samples rejected by the filter
    filtered: u64,
}

impl StackCollector {
    /// Create a collector that keeps samples accepted by `matcher`
    pub fn new(matcher: Option<FrameMatcher>) -> Self {
        if let Some(matcher) = &matcher {
            info!("Stack filter {:?}: {}", matcher.pattern(), matcher);
        }

        Self {
            matcher,
            samples: Vec::new(),
            filtered: 0,
        }
    }

    /// Offer a sample to the collector. Returns `true` if it was kept.
    pub fn add_sample(&mut self, sample: StackSample) -> bool {
        if !stack_matches(&sample.frames, self.matcher.as_ref()) {
            self.filtered += 1;
            return false;
        }

        debug!(
            "Kept sample: pid={} tid={} depth={}",
            sample.pid,
            sample.tid,
            sample.frames.len()
        );
        self.samples.push(sample);
        true
    }

    /// Build aggregated profile from collected samples
    pub fn build_profile(&self) -> Profile {
        info!("Building profile from {} samples", self.samples.len());

        let start_time = self.samples.iter().map(|s| s.timestamp).min().unwrap_or(0);
        let end_time = self.samples.iter().map(|s| s.timestamp).max().unwrap_or(0);

        let mut profile = Profile::new(start_time, end_time);
        profile.filtered_samples = self.filtered;

        for sample in &self.samples {
            // Only reachable without a filter: a real matcher never keeps one
            if sample.frames.is_empty() {
                continue;
            }

            profile.add_sample(Stack::new(sample.frames.clone()));
        }

        info!(
            "Profile built: {} total samples, {} unique stacks, {} filtered",
            profile.total_samples,
            profile.unique_stacks(),
            profile.filtered_samples
        );

        profile
    }

    /// Get the number of kept samples
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Get the number of samples rejected by the filter
    pub fn filtered_count(&self) -> u64 {
        self.filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacksift_filter::compile;
    use stacksift_shared::types::profile::Frame;

    fn sample(pid: i32, timestamp: u64, frames: &[(&str, &str)]) -> StackSample {
        StackSample::new(
            timestamp,
            pid,
            pid,
            frames.iter().map(|(file, func)| Frame::new(*file, *func)).collect(),
        )
    }

    #[test]
    fn test_collector_creation() {
        let collector = StackCollector::new(None);
        assert_eq!(collector.sample_count(), 0);
        assert_eq!(collector.filtered_count(), 0);
    }

    #[test]
    fn test_no_filter_keeps_everything() {
        let mut collector = StackCollector::new(None);
        assert!(collector.add_sample(sample(1, 10, &[("/app/views.py", "render")])));
        assert!(collector.add_sample(sample(1, 20, &[])));

        assert_eq!(collector.sample_count(), 2);
        let profile = collector.build_profile();
        // Empty stacks are kept but not aggregated
        assert_eq!(profile.total_samples, 1);
        assert_eq!(profile.filtered_samples, 0);
    }

    #[test]
    fn test_filter_drops_non_matching_stacks() {
        let mut collector = StackCollector::new(compile(Some("database")));

        assert!(collector.add_sample(sample(
            1,
            10,
            &[("/app/database/models.py", "query"), ("/app/views.py", "handle_request")],
        )));
        assert!(!collector.add_sample(sample(1, 20, &[("/app/views.py", "render")])));
        assert!(!collector.add_sample(sample(1, 30, &[])));

        assert_eq!(collector.sample_count(), 1);
        assert_eq!(collector.filtered_count(), 2);

        let profile = collector.build_profile();
        assert_eq!(profile.total_samples, 1);
        assert_eq!(profile.filtered_samples, 2);
        assert_eq!(profile.start_time, 10);
        assert_eq!(profile.end_time, 10);
    }

    #[test]
    fn test_build_profile_aggregates_identical_stacks() {
        let mut collector = StackCollector::new(compile(Some("api.py::UserView::get")));
        let frames = [("/app/api.py", "UserView.get"), ("/app/main.py", "main")];

        collector.add_sample(sample(1, 100, &frames));
        collector.add_sample(sample(2, 300, &frames));
        collector.add_sample(sample(1, 200, &[("/app/api.py", "UserView.post")]));

        let profile = collector.build_profile();
        assert_eq!(profile.total_samples, 2);
        assert_eq!(profile.unique_stacks(), 1);
        assert_eq!(profile.duration_ns(), 200);
    }
}
