use crate::error::CompositeError;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

/// Copies the rectangular patch at `rect` out of `data` into a new
/// buffer. `rect` must already be validated against the frame bounds.
pub fn extract_patch(data: &[u8], frame_width: usize, channels: usize, rect: Rect) -> Vec<u8> {
    let (x, y) = (rect.left as usize, rect.top as usize);
    let (w, h) = (rect.width() as usize, rect.height() as usize);
    let mut patch = vec![0u8; w * h * channels];
    for row in 0..h {
        let src_offset = ((y + row) * frame_width + x) * channels;
        let dst_offset = row * w * channels;
        patch[dst_offset..dst_offset + w * channels]
            .copy_from_slice(&data[src_offset..src_offset + w * channels]);
    }
    patch
}

/// Writes a patch buffer over the rectangle at `rect` in `data`,
/// replacing the pixels there. `patch` must be `rect`-sized.
pub fn draw_patch(data: &mut [u8], patch: &[u8], frame_width: usize, channels: usize, rect: Rect) {
    let (x, y) = (rect.left as usize, rect.top as usize);
    let (w, h) = (rect.width() as usize, rect.height() as usize);
    debug_assert_eq!(patch.len(), w * h * channels);
    for row in 0..h {
        let dst_offset = ((y + row) * frame_width + x) * channels;
        let src_offset = row * w * channels;
        data[dst_offset..dst_offset + w * channels]
            .copy_from_slice(&patch[src_offset..src_offset + w * channels]);
    }
}

/// Resamples a patch to an arbitrary target size using bilinear
/// interpolation, in either direction.
pub fn bilinear_resample(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    target_w: usize,
    target_h: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; target_w * target_h * channels];

    for y in 0..target_h {
        for x in 0..target_w {
            let src_x = x as f32 * (width as f32 - 1.0) / (target_w as f32 - 1.0).max(1.0);
            let src_y = y as f32 * (height as f32 - 1.0) / (target_h as f32 - 1.0).max(1.0);

            let x0 = (src_x.floor() as usize).min(width - 1);
            let x1 = (x0 + 1).min(width - 1);
            let y0 = (src_y.floor() as usize).min(height - 1);
            let y1 = (y0 + 1).min(height - 1);

            let fx = src_x - x0 as f32;
            let fy = src_y - y0 as f32;

            for c in 0..channels {
                let v00 = data[(y0 * width + x0) * channels + c] as f32;
                let v10 = data[(y0 * width + x1) * channels + c] as f32;
                let v01 = data[(y1 * width + x0) * channels + c] as f32;
                let v11 = data[(y1 * width + x1) * channels + c] as f32;

                let val = v00 * (1.0 - fx) * (1.0 - fy)
                    + v10 * fx * (1.0 - fy)
                    + v01 * (1.0 - fx) * fy
                    + v11 * fx * fy;
                out[(y * target_w + x) * channels + c] = val.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    out
}

/// Crops `rect` out of a frame into a standalone frame, validating the
/// box first.
pub fn crop_frame(frame: &Frame, rect: Rect) -> Result<Frame, CompositeError> {
    rect.validate_within(frame.width(), frame.height())?;
    let channels = frame.channels() as usize;
    let patch = extract_patch(frame.data(), frame.width() as usize, channels, rect);
    Ok(Frame::new(
        patch,
        rect.width() as u32,
        rect.height() as u32,
        frame.channels(),
    ))
}
