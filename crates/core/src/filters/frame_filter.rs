use crate::shared::frame::Frame;

pub const DEFAULT_BRIGHTNESS: f32 = 0.8;
pub const DEFAULT_CONTRAST: f32 = 2.0;
pub const DEFAULT_GAMMA: f32 = 2.0;
pub const DEFAULT_PIXELATION: f32 = 20.0;

/// Luma weights for the grayscale filter (Rec. 709).
const GRAY_WEIGHTS: [f32; 3] = [0.2125, 0.7154, 0.0721];

/// A preview filter with its parameters.
///
/// Filters form a closed set of tagged variants dispatched in one place,
/// rather than a type per filter. All of them operate on the RGB
/// channels only; alpha passes through untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterKind {
    Grayscale,
    /// Additive brightness, -1.0 to 1.0 of full scale.
    Brightness(f32),
    /// Contrast multiplier around mid-gray; 1.0 is identity.
    Contrast(f32),
    /// Gamma exponent applied to normalized values; 1.0 is identity.
    Gamma(f32),
    /// Square block size in pixels.
    Pixelation(f32),
}

impl FilterKind {
    /// Applies the filter to a frame in place.
    pub fn apply(&self, frame: &mut Frame) {
        match *self {
            FilterKind::Grayscale => apply_grayscale(frame),
            FilterKind::Brightness(amount) => {
                apply_pointwise(frame, |v| v + amount * 255.0);
            }
            FilterKind::Contrast(amount) => {
                apply_pointwise(frame, |v| (v - 127.5) * amount + 127.5);
            }
            FilterKind::Gamma(gamma) => {
                apply_pointwise(frame, |v| 255.0 * (v / 255.0).powf(gamma));
            }
            FilterKind::Pixelation(block) => apply_pixelation(frame, block.max(1.0) as usize),
        }
    }
}

/// Color channels affected by pointwise filters (alpha excluded).
fn color_channels(frame: &Frame) -> usize {
    (frame.channels() as usize).min(3)
}

fn apply_pointwise(frame: &mut Frame, f: impl Fn(f32) -> f32) {
    let channels = frame.channels() as usize;
    let color = color_channels(frame);
    for pixel in frame.data_mut().chunks_exact_mut(channels) {
        for v in &mut pixel[..color] {
            *v = f(*v as f32).round().clamp(0.0, 255.0) as u8;
        }
    }
}

fn apply_grayscale(frame: &mut Frame) {
    let channels = frame.channels() as usize;
    if channels < 3 {
        return;
    }
    for pixel in frame.data_mut().chunks_exact_mut(channels) {
        let luma = pixel[0] as f32 * GRAY_WEIGHTS[0]
            + pixel[1] as f32 * GRAY_WEIGHTS[1]
            + pixel[2] as f32 * GRAY_WEIGHTS[2];
        let luma = luma.round().clamp(0.0, 255.0) as u8;
        pixel[0] = luma;
        pixel[1] = luma;
        pixel[2] = luma;
    }
}

/// Replaces each `block`-sized square with its average color.
fn apply_pixelation(frame: &mut Frame, block: usize) {
    if block <= 1 {
        return;
    }
    let (w, h) = (frame.width() as usize, frame.height() as usize);
    let channels = frame.channels() as usize;
    let color = color_channels(frame);
    let data = frame.data_mut();

    for by in (0..h).step_by(block) {
        for bx in (0..w).step_by(block) {
            let bw = block.min(w - bx);
            let bh = block.min(h - by);

            let mut sums = [0u32; 3];
            for y in by..by + bh {
                for x in bx..bx + bw {
                    let off = (y * w + x) * channels;
                    for (c, sum) in sums.iter_mut().enumerate().take(color) {
                        *sum += data[off + c] as u32;
                    }
                }
            }
            let count = (bw * bh) as u32;
            let mut avg = [0u8; 3];
            for c in 0..color {
                avg[c] = (sums[c] / count) as u8;
            }

            for y in by..by + bh {
                for x in bx..bx + bw {
                    let off = (y * w + x) * channels;
                    data[off..off + color].copy_from_slice(&avg[..color]);
                }
            }
        }
    }
}
