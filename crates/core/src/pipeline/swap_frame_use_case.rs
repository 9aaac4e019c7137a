use crate::compositing::domain::face_swapper::FaceSwapper;
use crate::detection::domain::face_detector::FaceDetector;
use crate::error::CompositeError;
use crate::shared::frame::Frame;

/// Per-frame face-swap pipeline: detect → validate → composite.
///
/// An `InvalidRegion` from the compositor means the detector reported a
/// box this frame cannot honor; the frame is passed through unmodified
/// and the next frame gets a fresh chance. Detector failures and
/// malformed detection sequences still propagate.
pub struct SwapFrameUseCase {
    detector: Box<dyn FaceDetector>,
    swapper: Box<dyn FaceSwapper>,
}

impl SwapFrameUseCase {
    pub fn new(detector: Box<dyn FaceDetector>, swapper: Box<dyn FaceSwapper>) -> Self {
        Self { detector, swapper }
    }

    pub fn execute(&mut self, frame: &Frame) -> Result<Frame, Box<dyn std::error::Error>> {
        let detections = self.detector.detect(frame)?;

        match self.swapper.swap(frame, detections.boxes()) {
            Ok(output) => Ok(output),
            Err(e @ CompositeError::InvalidRegion { .. }) => {
                log::warn!("skipping swap for this frame: {e}");
                Ok(frame.clone())
            }
            Err(e) => Err(e.into()),
        }
    }
}
