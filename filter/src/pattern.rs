//! Pattern compilation
//!
//! The matching mode is chosen from the structure of the pattern, checked in
//! order:
//!
//! 1. empty pattern: no filter
//! 2. contains `::`: qualified (`file::name` or `file::Class::method`)
//! 3. contains a path separator or ends with a source-file extension: path
//!    suffix
//! 4. otherwise: substring
//!
//! Every string is a valid pattern. Terms are lowercased here, once, so that
//! evaluation only has to fold the frame's own text.

use crate::matcher::{CompiledFilter, FrameMatcher};
use std::fmt;
use tracing::debug;

/// Separator between the components of a qualified pattern
pub const QUALIFIER_SEPARATOR: &str = "::";

/// Characters that mark a pattern as a file path
pub const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Source-file extensions that mark a pattern as a file path
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &[".py", ".pyw", ".pyi", ".pyx"];

/// Matching mode selected for a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Term is searched in the file name or the function name
    Substring,
    /// File name must end with the term
    PathSuffix,
    /// `file::name`: file suffix and function-name substring
    Qualified2,
    /// `file::Class::method`: file suffix and `class.method` substring
    Qualified3,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Substring => "substring",
            Mode::PathSuffix => "path-suffix",
            Mode::Qualified2 => "qualified (file::name)",
            Mode::Qualified3 => "qualified (file::class::method)",
        };
        f.write_str(name)
    }
}

/// Options that influence mode detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    source_extensions: Vec<String>,
}

impl FilterOptions {
    /// Use the given source-file extensions (e.g. `".py"`) instead of the
    /// defaults. Extensions are compared case-insensitively.
    pub fn with_source_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            source_extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn source_extensions(&self) -> &[String] {
        &self.source_extensions
    }

    fn looks_like_path(&self, lowered: &str) -> bool {
        lowered.contains(PATH_SEPARATORS)
            || self
                .source_extensions
                .iter()
                .any(|ext| lowered.ends_with(ext.as_str()))
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::with_source_extensions(DEFAULT_SOURCE_EXTENSIONS)
    }
}

/// Compile a pattern with the default options.
///
/// Returns `None` when `pattern` is absent or empty. Callers must treat
/// `None` as "include every stack".
pub fn compile(pattern: Option<&str>) -> Option<FrameMatcher> {
    compile_with(pattern, &FilterOptions::default())
}

/// Compile a pattern using the given options.
pub fn compile_with(pattern: Option<&str>, options: &FilterOptions) -> Option<FrameMatcher> {
    let pattern = pattern.filter(|p| !p.is_empty())?;
    let lowered = pattern.to_lowercase();

    let filter = if lowered.contains(QUALIFIER_SEPARATOR) {
        compile_qualified(&lowered)
    } else if options.looks_like_path(&lowered) {
        CompiledFilter::PathSuffix { suffix: lowered }
    } else {
        CompiledFilter::Substring { term: lowered }
    };

    let matcher = FrameMatcher::new(pattern.to_string(), filter);
    debug!("Compiled stack filter {:?}: {}", pattern, matcher);
    Some(matcher)
}

/// Split a qualified pattern on its first two separators.
///
/// Anything after the second separator, including further `::`, stays in
/// the method component verbatim.
fn compile_qualified(lowered: &str) -> CompiledFilter {
    let mut parts = lowered.splitn(3, QUALIFIER_SEPARATOR);
    let file_suffix = parts.next().unwrap_or_default().to_string();
    let second = parts.next().unwrap_or_default();

    match parts.next() {
        Some(method) => CompiledFilter::Qualified3 {
            file_suffix,
            qualname: format!("{}.{}", second, method),
        },
        None => CompiledFilter::Qualified2 {
            file_suffix,
            name: second.to_string(),
        },
    }
}
