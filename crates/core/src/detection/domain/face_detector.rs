use crate::detection::domain::detections::Detections;
use crate::shared::frame::Frame;

/// Domain interface for face detection.
///
/// Implementations may be stateful (e.g., caching results across
/// frames), hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Detections, Box<dyn std::error::Error>>;
}
