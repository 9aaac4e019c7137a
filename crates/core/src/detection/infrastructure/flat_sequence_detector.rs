use crate::detection::domain::detections::Detections;
use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;

/// Raw detector entry point: `(pixels, width, height, bytes_per_pixel)`
/// returning the flat integer sequence `[N, l, t, r, b, ...]`.
pub type DetectFn = Box<dyn FnMut(&[u8], u32, u32, u32) -> Vec<i32> + Send>;

/// Adapter around an external face-detection engine exposing the flat
/// integer sequence convention.
///
/// The engine itself is a black box; this adapter only forwards the
/// frame bytes and parses the result, so a malformed sequence surfaces
/// as `InvalidDetectionFormat` instead of corrupting downstream state.
pub struct FlatSequenceDetector {
    detect_fn: DetectFn,
}

impl FlatSequenceDetector {
    pub fn new(detect_fn: DetectFn) -> Self {
        Self { detect_fn }
    }
}

impl FaceDetector for FlatSequenceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Detections, Box<dyn std::error::Error>> {
        let sequence = (self.detect_fn)(
            frame.data(),
            frame.width(),
            frame.height(),
            frame.channels() as u32,
        );
        Ok(Detections::parse(&sequence)?)
    }
}
