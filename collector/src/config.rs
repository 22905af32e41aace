//! Configuration types for the sample collector
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `STACKSIFT_*` environment variables. The CLI applies its own flags last.

use crate::error::CollectorError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use stacksift_filter::{compile_with, FilterOptions, FrameMatcher, DEFAULT_SOURCE_EXTENSIONS};
use std::path::Path;

/// Environment variable holding the stack filter pattern
pub const ENV_FILTER: &str = "STACKSIFT_FILTER";

/// Environment variable holding comma-separated source-file extensions
pub const ENV_SOURCE_EXTENSIONS: &str = "STACKSIFT_SOURCE_EXTENSIONS";

/// Environment variable holding the minimum stack count to report
pub const ENV_MIN_COUNT: &str = "STACKSIFT_MIN_COUNT";

/// Encoding of a recorded sample file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Json,
    Bincode,
}

impl std::str::FromStr for InputFormat {
    type Err = CollectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "bincode" | "bin" => Ok(InputFormat::Bincode),
            _ => Err(CollectorError::UnsupportedFormat {
                kind: "input",
                value: s.to_string(),
            }),
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Collapsed stacks, one `outer;...;inner count` line per stack
    #[default]
    Folded,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CollectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "folded" | "collapsed" => Ok(OutputFormat::Folded),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CollectorError::UnsupportedFormat {
                kind: "output",
                value: s.to_string(),
            }),
        }
    }
}

/// Collector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Stack filter pattern (None or empty = keep every stack)
    pub filter: Option<String>,

    /// Extensions that make a pattern match file paths by suffix
    pub source_extensions: Vec<String>,

    /// Encoding of the sample file
    pub input_format: InputFormat,

    /// Report format
    pub output_format: OutputFormat,

    /// Stacks seen fewer times than this are left out of the report
    pub min_count: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            filter: None,
            source_extensions: DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            input_format: InputFormat::default(),
            output_format: OutputFormat::default(),
            min_count: 1,
        }
    }
}

impl CollectorConfig {
    /// Read a configuration file, filling unset keys with defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Defaults or the given file, overlaid with the process environment
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay values found through `lookup`, keyed by `STACKSIFT_*` names
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), CollectorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup(ENV_FILTER) {
            self.filter = Some(filter);
        }

        self.apply_extensions_env_with(&lookup);

        if let Some(min_count) = lookup(ENV_MIN_COUNT) {
            self.min_count = min_count.trim().parse().map_err(|_| {
                CollectorError::InvalidConfig(format!(
                    "{} must be a non-negative integer, got {:?}",
                    ENV_MIN_COUNT, min_count
                ))
            })?;
        }

        Ok(())
    }

    /// Overlay only the source-extension list found through `lookup`
    pub fn apply_extensions_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(extensions) = lookup(ENV_SOURCE_EXTENSIONS) {
            self.source_extensions = extensions
                .split(',')
                .map(str::trim)
                .filter(|ext| !ext.is_empty())
                .map(String::from)
                .collect();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for ext in &self.source_extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                anyhow::bail!(
                    "Source extension must start with '.' and name a suffix, got {:?}",
                    ext
                );
            }
        }

        Ok(())
    }

    /// Mode-detection options for the filter compiler
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::with_source_extensions(&self.source_extensions)
    }

    /// Compile the configured pattern; `None` means no filtering
    pub fn compile_filter(&self) -> Option<FrameMatcher> {
        compile_with(self.filter.as_deref(), &self.filter_options())
    }
}
