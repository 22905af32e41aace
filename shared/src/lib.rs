//! Shared types for stacksift
//!
//! This crate contains the frame, stack and profile data structures used by
//! the filter compiler, the sample collector and the CLI.

pub mod types;

// Re-export commonly used types
pub use types::{events::*, profile::*};
