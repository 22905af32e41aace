//! Compiled frame matcher
//!
//! A [`FrameMatcher`] is immutable once built. It reads nothing but its own
//! terms and the frame it is given, so one instance can be shared across
//! every sampling thread for the whole session.

use crate::frame::FrameInfo;
use crate::pattern::Mode;
use std::borrow::Cow;
use std::fmt;

/// Lowercased terms for each matching mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CompiledFilter {
    Substring { term: String },
    PathSuffix { suffix: String },
    Qualified2 { file_suffix: String, name: String },
    Qualified3 { file_suffix: String, qualname: String },
}

impl CompiledFilter {
    fn mode(&self) -> Mode {
        match self {
            CompiledFilter::Substring { .. } => Mode::Substring,
            CompiledFilter::PathSuffix { .. } => Mode::PathSuffix,
            CompiledFilter::Qualified2 { .. } => Mode::Qualified2,
            CompiledFilter::Qualified3 { .. } => Mode::Qualified3,
        }
    }
}

/// Predicate deciding whether a single frame satisfies a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameMatcher {
    pattern: String,
    filter: CompiledFilter,
}

impl FrameMatcher {
    pub(crate) fn new(pattern: String, filter: CompiledFilter) -> Self {
        Self { pattern, filter }
    }

    /// The pattern as originally supplied
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The matching mode selected at compile time
    pub fn mode(&self) -> Mode {
        self.filter.mode()
    }

    /// Returns `true` if the frame satisfies the pattern.
    ///
    /// Missing attributes are matched as empty strings, so a frame with
    /// neither attribute only matches patterns whose terms are empty.
    pub fn matches<F: FrameInfo + ?Sized>(&self, frame: &F) -> bool {
        match &self.filter {
            CompiledFilter::Substring { term } => {
                normalized(frame.filename()).contains(term.as_str())
                    || normalized(frame.funcname()).contains(term.as_str())
            }
            CompiledFilter::PathSuffix { suffix } => {
                normalized(frame.filename()).ends_with(suffix.as_str())
            }
            CompiledFilter::Qualified2 { file_suffix, name } => {
                normalized(frame.filename()).ends_with(file_suffix.as_str())
                    && normalized(frame.funcname()).contains(name.as_str())
            }
            CompiledFilter::Qualified3 {
                file_suffix,
                qualname,
            } => {
                normalized(frame.filename()).ends_with(file_suffix.as_str())
                    && normalized(frame.funcname()).contains(qualname.as_str())
            }
        }
    }
}

impl fmt::Display for FrameMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            CompiledFilter::Substring { term } => {
                write!(f, "filename or funcname contains {:?}", term)
            }
            CompiledFilter::PathSuffix { suffix } => {
                write!(f, "filename ends with {:?}", suffix)
            }
            CompiledFilter::Qualified2 { file_suffix, name } => write!(
                f,
                "filename ends with {:?} and funcname contains {:?}",
                file_suffix, name
            ),
            CompiledFilter::Qualified3 {
                file_suffix,
                qualname,
            } => write!(
                f,
                "filename ends with {:?} and funcname contains {:?}",
                file_suffix, qualname
            ),
        }
    }
}

/// Single read point for frame attributes: absent becomes empty, then the
/// text is lowercased. Lowercase ASCII is borrowed as-is.
fn normalized(value: Option<&str>) -> Cow<'_, str> {
    let text = value.unwrap_or_default();
    if text.is_ascii() {
        if text.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(text.to_ascii_lowercase())
        } else {
            Cow::Borrowed(text)
        }
    } else {
        Cow::Owned(text.to_lowercase())
    }
}
