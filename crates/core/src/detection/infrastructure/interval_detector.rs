use crate::detection::domain::detections::Detections;
use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;

/// Decorator that runs detection every N frames, reusing the last result
/// in between.
///
/// Detection is the expensive step of the per-frame path; the capture
/// side analyzes at full rate but only needs fresh boxes every few
/// frames.
pub struct IntervalDetector {
    inner: Box<dyn FaceDetector>,
    interval: usize,
    frame_count: usize,
    last: Detections,
}

impl IntervalDetector {
    pub fn new(inner: Box<dyn FaceDetector>, interval: usize) -> Result<Self, &'static str> {
        if interval < 1 {
            return Err("interval must be >= 1");
        }
        Ok(Self {
            inner,
            interval,
            frame_count: 0,
            last: Detections::default(),
        })
    }
}

impl FaceDetector for IntervalDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Detections, Box<dyn std::error::Error>> {
        if self.frame_count % self.interval == 0 {
            self.last = self.inner.detect(frame)?;
        }
        self.frame_count += 1;
        Ok(self.last.clone())
    }
}
