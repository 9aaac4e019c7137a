use std::path::Path;

use crate::io::domain::image_writer::ImageWriter;
use crate::shared::frame::Frame;

/// Writes a single frame to an image file using the `image` crate.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        match frame.channels() {
            4 => {
                let img = image::RgbaImage::from_raw(
                    frame.width(),
                    frame.height(),
                    frame.data().to_vec(),
                )
                .ok_or("Failed to create image from frame data")?;
                img.save(path)?;
            }
            3 => {
                let img = image::RgbImage::from_raw(
                    frame.width(),
                    frame.height(),
                    frame.data().to_vec(),
                )
                .ok_or("Failed to create image from frame data")?;
                img.save(path)?;
            }
            other => return Err(format!("Unsupported channel count: {other}").into()),
        }
        Ok(())
    }
}
