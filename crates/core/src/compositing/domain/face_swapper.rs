use crate::error::CompositeError;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

/// Domain interface for face-region swap compositing.
///
/// Implementations return a freshly allocated output frame; the input is
/// never mutated, and ownership of the result transfers fully to the
/// caller.
pub trait FaceSwapper: Send {
    fn swap(&self, frame: &Frame, boxes: &[Rect]) -> Result<Frame, CompositeError>;
}
