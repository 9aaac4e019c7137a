use crate::shared::frame::Frame;

/// Which camera produced the frame. The sensor is mounted rotated, and
/// front sensors additionally deliver a mirrored image, so each facing
/// needs its own correction before detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraFacing {
    Front,
    Back,
}

/// Rotates a frame 90 degrees clockwise. Output dimensions are swapped.
pub fn rotate90(frame: &Frame) -> Frame {
    let (w, h) = (frame.width(), frame.height());
    let channels = frame.channels() as usize;
    let mut out = vec![0u8; frame.data().len()];
    // dst(x', y') = src(x, y) with x' = h - 1 - y, y' = x
    for y in 0..h {
        for x in 0..w {
            let src = frame.pixel_offset(x, y);
            let dst = ((x as usize) * (h as usize) + (h - 1 - y) as usize) * channels;
            out[dst..dst + channels].copy_from_slice(&frame.data()[src..src + channels]);
        }
    }
    Frame::new(out, h, w, frame.channels())
}

/// Rotates a frame 270 degrees clockwise (90 counter-clockwise).
pub fn rotate270(frame: &Frame) -> Frame {
    let (w, h) = (frame.width(), frame.height());
    let channels = frame.channels() as usize;
    let mut out = vec![0u8; frame.data().len()];
    // dst(x', y') = src(x, y) with x' = y, y' = w - 1 - x
    for y in 0..h {
        for x in 0..w {
            let src = frame.pixel_offset(x, y);
            let dst = ((w - 1 - x) as usize * (h as usize) + y as usize) * channels;
            out[dst..dst + channels].copy_from_slice(&frame.data()[src..src + channels]);
        }
    }
    Frame::new(out, h, w, frame.channels())
}

/// Flips a frame left-to-right.
pub fn mirror_horizontal(frame: &Frame) -> Frame {
    let (w, h) = (frame.width(), frame.height());
    let channels = frame.channels() as usize;
    let mut out = vec![0u8; frame.data().len()];
    for y in 0..h {
        for x in 0..w {
            let src = frame.pixel_offset(x, y);
            let dst = frame.pixel_offset(w - 1 - x, y);
            out[dst..dst + channels].copy_from_slice(&frame.data()[src..src + channels]);
        }
    }
    Frame::new(out, w, h, frame.channels())
}

/// Brings a sensor frame upright for detection: back camera rotates 90
/// clockwise, front camera rotates 270 and un-mirrors.
pub fn orient_for_detection(frame: &Frame, facing: CameraFacing) -> Frame {
    match facing {
        CameraFacing::Back => rotate90(frame),
        CameraFacing::Front => mirror_horizontal(&rotate270(frame)),
    }
}
