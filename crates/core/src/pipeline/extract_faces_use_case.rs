use std::path::{Path, PathBuf};

use crate::compositing::infrastructure::resample::crop_frame;
use crate::detection::domain::face_detector::FaceDetector;
use crate::io::domain::image_writer::ImageWriter;
use crate::shared::frame::Frame;

/// Saves each detected face as its own image: detect → clamp → crop →
/// write numbered files into a directory.
///
/// Boxes that are still empty after clamping are skipped with a warning;
/// one unusable box should not cost the rest of the frame's crops.
pub struct ExtractFacesUseCase {
    detector: Box<dyn FaceDetector>,
    writer: Box<dyn ImageWriter>,
}

impl ExtractFacesUseCase {
    pub fn new(detector: Box<dyn FaceDetector>, writer: Box<dyn ImageWriter>) -> Self {
        Self { detector, writer }
    }

    pub fn execute(
        &mut self,
        frame: &Frame,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
        let detections = self
            .detector
            .detect(frame)?
            .clamp_to(frame.width(), frame.height());

        let mut written = Vec::with_capacity(detections.len());
        for (index, rect) in detections.boxes().iter().enumerate() {
            let crop = match crop_frame(frame, *rect) {
                Ok(crop) => crop,
                Err(e) => {
                    log::warn!("skipping face {index}: {e}");
                    continue;
                }
            };
            let path = output_dir.join(format!("face-{index:03}.png"));
            self.writer.write(&path, &crop)?;
            written.push(path);
        }
        Ok(written)
    }
}
