use std::path::Path;

use crate::shared::frame::Frame;

/// Domain interface for loading a single image into a frame.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>>;
}
