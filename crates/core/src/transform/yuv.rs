use crate::error::CompositeError;
use crate::shared::constants::RGBA_CHANNELS;
use crate::shared::frame::Frame;

/// Converts an NV21 frame (full Y plane followed by an interleaved V/U
/// plane at half resolution) to an RGBA frame, full-range BT.601.
///
/// `width` and `height` must be even; plane sizes are checked up front
/// so a short buffer is an error instead of an out-of-bounds read.
pub fn nv21_to_rgba(
    y_plane: &[u8],
    vu_plane: &[u8],
    width: u32,
    height: u32,
) -> Result<Frame, CompositeError> {
    let (w, h) = (width as usize, height as usize);
    if width % 2 != 0 || height % 2 != 0 || y_plane.len() != w * h {
        return Err(CompositeError::PlaneSizeMismatch {
            actual: y_plane.len(),
            expected: w * h,
            width,
            height,
        });
    }
    if vu_plane.len() != w * h / 2 {
        return Err(CompositeError::PlaneSizeMismatch {
            actual: vu_plane.len(),
            expected: w * h / 2,
            width,
            height,
        });
    }

    let mut data = vec![0u8; w * h * RGBA_CHANNELS as usize];
    for row in 0..h {
        for col in 0..w {
            let y = y_plane[row * w + col] as f32;
            let vu_offset = (row / 2) * w + (col / 2) * 2;
            let v = vu_plane[vu_offset] as f32 - 128.0;
            let u = vu_plane[vu_offset + 1] as f32 - 128.0;

            let r = y + 1.402 * v;
            let g = y - 0.344_136 * u - 0.714_136 * v;
            let b = y + 1.772 * u;

            let out = (row * w + col) * RGBA_CHANNELS as usize;
            data[out] = r.round().clamp(0.0, 255.0) as u8;
            data[out + 1] = g.round().clamp(0.0, 255.0) as u8;
            data[out + 2] = b.round().clamp(0.0, 255.0) as u8;
            data[out + 3] = 255;
        }
    }

    Ok(Frame::new(data, width, height, RGBA_CHANNELS))
}
