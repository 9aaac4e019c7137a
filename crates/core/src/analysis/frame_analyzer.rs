use crate::analysis::frame_rate::FpsEstimator;
use crate::analysis::luminosity::mean_luma;

/// Per-frame analysis results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalysisReport {
    /// Mean Y-plane luminance, `None` for an empty plane.
    pub luma: Option<f64>,
    /// Moving-average FPS, `None` until the window has enough samples.
    pub fps: Option<f64>,
}

/// Stateful per-frame analyzer: feeds each frame's Y plane and capture
/// timestamp, gets back luminance and the current frame rate.
///
/// The only retained state is the timestamp window; pixel data is never
/// held across calls.
#[derive(Debug, Default)]
pub struct FrameAnalyzer {
    fps: FpsEstimator,
}

impl FrameAnalyzer {
    pub fn new() -> Self {
        Self {
            fps: FpsEstimator::new(),
        }
    }

    pub fn analyze(&mut self, y_plane: &[u8], timestamp_ms: u64) -> AnalysisReport {
        self.fps.push(timestamp_ms);
        AnalysisReport {
            luma: mean_luma(y_plane),
            fps: self.fps.fps(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_frame_has_luma_but_no_fps() {
        let mut analyzer = FrameAnalyzer::new();
        let report = analyzer.analyze(&[128, 128], 0);
        assert_eq!(report.luma, Some(128.0));
        assert_eq!(report.fps, None);
    }

    #[test]
    fn test_fps_appears_from_second_frame() {
        let mut analyzer = FrameAnalyzer::new();
        analyzer.analyze(&[0], 0);
        let report = analyzer.analyze(&[0], 100);
        assert_relative_eq!(report.fps.unwrap(), 10.0);
    }

    #[test]
    fn test_luma_tracks_current_frame_only() {
        let mut analyzer = FrameAnalyzer::new();
        analyzer.analyze(&[255, 255], 0);
        let report = analyzer.analyze(&[0, 0], 33);
        assert_eq!(report.luma, Some(0.0));
    }
}
