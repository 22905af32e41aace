//! Stack-level filtering

use crate::frame::FrameInfo;
use crate::matcher::FrameMatcher;

/// Decide whether a captured stack is included.
///
/// With no filter every stack is included, even an empty one. Otherwise the
/// stack is included iff at least one frame matches; evaluation stops at the
/// first match.
pub fn stack_matches<I>(frames: I, matcher: Option<&FrameMatcher>) -> bool
where
    I: IntoIterator,
    I::Item: FrameInfo,
{
    match matcher {
        None => true,
        Some(matcher) => matcher.matches_stack(frames),
    }
}

impl FrameMatcher {
    /// Returns `true` if any frame of the stack matches
    pub fn matches_stack<I>(&self, frames: I) -> bool
    where
        I: IntoIterator,
        I::Item: FrameInfo,
    {
        frames.into_iter().any(|frame| self.matches(&frame))
    }

    /// Frames of the stack that match, in stack order
    pub fn matching_frames<I>(&self, frames: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: FrameInfo,
    {
        frames.into_iter().filter(|frame| self.matches(frame)).collect()
    }
}
