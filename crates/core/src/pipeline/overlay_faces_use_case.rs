use crate::detection::domain::face_detector::FaceDetector;
use crate::overlay::overlay_mapper::{map_to_view, OverlayUpdate};
use crate::shared::frame::Frame;

/// Per-frame overlay pipeline: detect, clamp untrusted boxes to the
/// analysis frame, and map them into the destination view's coordinate
/// space for drawing.
pub struct OverlayFacesUseCase {
    detector: Box<dyn FaceDetector>,
    view_width: u32,
    view_height: u32,
}

impl OverlayFacesUseCase {
    pub fn new(detector: Box<dyn FaceDetector>, view_width: u32, view_height: u32) -> Self {
        Self {
            detector,
            view_width,
            view_height,
        }
    }

    pub fn execute(&mut self, frame: &Frame) -> Result<OverlayUpdate, Box<dyn std::error::Error>> {
        let detections = self
            .detector
            .detect(frame)?
            .clamp_to(frame.width(), frame.height());
        let update = map_to_view(
            &detections,
            (frame.width(), frame.height()),
            (self.view_width, self.view_height),
        )?;
        if let OverlayUpdate::Draw(ref rects) = update {
            log::debug!("overlay: {} face boxes mapped to view space", rects.len());
        }
        Ok(update)
    }
}
