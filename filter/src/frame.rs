//! Frame access for filters
//!
//! Matchers only read two attributes of a frame. Samplers own their frame
//! representation and expose it through [`FrameInfo`].

use stacksift_shared::types::profile::Frame;

/// Read-only view of the frame attributes a filter inspects.
///
/// Returning `None` and returning `Some("")` are equivalent for matching.
pub trait FrameInfo {
    /// Source file path of the frame
    fn filename(&self) -> Option<&str>;

    /// Function name of the frame, possibly qualified (`Class.method`)
    fn funcname(&self) -> Option<&str>;
}

impl FrameInfo for Frame {
    fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    fn funcname(&self) -> Option<&str> {
        self.funcname.as_deref()
    }
}

impl<T: FrameInfo + ?Sized> FrameInfo for &T {
    fn filename(&self) -> Option<&str> {
        (**self).filename()
    }

    fn funcname(&self) -> Option<&str> {
        (**self).funcname()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_exposes_optional_fields() {
        let frame = Frame::new("/app/api.py", "get_users");
        assert_eq!(FrameInfo::filename(&frame), Some("/app/api.py"));
        assert_eq!(FrameInfo::funcname(&frame), Some("get_users"));

        let empty = Frame::default();
        assert_eq!(FrameInfo::filename(&empty), None);
        assert_eq!(FrameInfo::funcname(&empty), None);
    }

    #[test]
    fn test_reference_forwards() {
        let frame = Frame::new("/app/api.py", "get_users");
        let by_ref: &Frame = &frame;
        assert_eq!(FrameInfo::funcname(&by_ref), Some("get_users"));
    }
}
