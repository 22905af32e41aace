//! Event type definitions for sampled stacks
//!
//! These types represent the raw samples produced by a sampler and replayed
//! through the stack filter.

use crate::types::profile::Frame;
use serde::{Deserialize, Serialize};

/// Timestamp in nanoseconds
pub type Timestamp = u64;

/// Process ID
pub type Pid = i32;

/// Thread ID
pub type Tid = i32;

/// One captured stack sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSample {
    /// Timestamp when the sample was taken
    pub timestamp: Timestamp,

    /// Process ID
    pub pid: Pid,

    /// Thread ID
    pub tid: Tid,

    /// Thread name, empty if the sampler did not record one
    #[serde(default)]
    pub thread_name: String,

    /// Frames from innermost (top) to outermost (bottom)
    pub frames: Vec<Frame>,
}

impl StackSample {
    /// Create a sample for the given thread with the given frames
    pub fn new(timestamp: Timestamp, pid: Pid, tid: Tid, frames: Vec<Frame>) -> Self {
        Self {
            timestamp,
            pid,
            tid,
            thread_name: String::new(),
            frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_sample_json_defaults() {
        let json = r#"{
            "timestamp": 1234567890,
            "pid": 1000,
            "tid": 1001,
            "frames": [
                {"filename": "/app/api.py", "funcname": "get_users", "lineno": 12},
                {"funcname": "main"},
                {}
            ]
        }"#;

        let sample: StackSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.pid, 1000);
        assert_eq!(sample.thread_name, "");
        assert_eq!(sample.frames.len(), 3);
        assert_eq!(sample.frames[0].lineno, Some(12));
        assert_eq!(sample.frames[1].filename, None);
        assert_eq!(sample.frames[2], Frame::default());
    }

    #[test]
    fn test_stack_sample_bincode_serialization() {
        use bincode::Options;
        let config = bincode::config::DefaultOptions::new()
            .with_fixint_encoding()
            .allow_trailing_bytes();

        let mut sample = StackSample::new(
            0x1122334455667788,
            42,
            43,
            vec![
                Frame::new("/app/api.py", "UserView.get").with_lineno(7),
                Frame {
                    funcname: Some("main".to_string()),
                    ..Default::default()
                },
            ],
        );
        sample.thread_name = "MainThread".to_string();

        let bytes = config.serialize(&sample).unwrap();

        // Expected layout (fixint):
        // 0-7: timestamp (u64, le)
        // 8-11: pid (i32)
        assert_eq!(bytes[0..8], 0x1122334455667788u64.to_le_bytes());
        assert_eq!(bytes[8..12], [42, 0, 0, 0]);

        let deserialized: StackSample = config.deserialize(&bytes).unwrap();
        assert_eq!(deserialized, sample);
    }
}
