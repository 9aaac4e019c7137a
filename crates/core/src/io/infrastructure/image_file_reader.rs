use std::path::Path;

use crate::io::domain::image_reader::ImageReader;
use crate::shared::constants::RGBA_CHANNELS;
use crate::shared::frame::Frame;

/// Reads an image file into an RGBA frame using the `image` crate.
///
/// Whatever the file's native format, the decoded result is normalized
/// to RGBA so the rest of the pipeline sees one pixel layout.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = (img.width(), img.height());
        Ok(Frame::new(img.into_raw(), width, height, RGBA_CHANNELS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rgba_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        let img = image::RgbaImage::from_pixel(6, 4, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.width(), 6);
        assert_eq!(frame.height(), 4);
        assert_eq!(frame.channels(), 4);
        assert_eq!(&frame.data()[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_rgb_file_is_normalized_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        let img = image::RgbImage::from_pixel(3, 3, image::Rgb([50, 100, 150]));
        img.save(&path).unwrap();

        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.channels(), 4);
        assert_eq!(&frame.data()[..4], &[50, 100, 150, 255]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ImageFileReader::new().read(Path::new("/nonexistent/in.png"));
        assert!(result.is_err());
    }
}
