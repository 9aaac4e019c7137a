use std::fmt;

use crate::error::CompositeError;

/// Axis-aligned rectangle in pixel coordinates, half-open on the right
/// and bottom edges (`right` and `bottom` are exclusive).
///
/// Detection boxes arrive in analysis space; the same type is reused for
/// rectangles mapped into view space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Checks the invariant `0 <= left < right <= width` (and the same
    /// vertically). Degenerate or out-of-bounds boxes must never reach
    /// the pixel-copy paths.
    pub fn validate_within(&self, width: u32, height: u32) -> Result<(), CompositeError> {
        let ok = self.left >= 0
            && self.top >= 0
            && self.left < self.right
            && self.top < self.bottom
            && self.right <= width as i32
            && self.bottom <= height as i32;
        if ok {
            Ok(())
        } else {
            Err(CompositeError::InvalidRegion {
                region: *self,
                width,
                height,
            })
        }
    }

    /// Clamps the rectangle to `[0, width] x [0, height]`. The result may
    /// be empty when the box lies entirely outside the frame.
    pub fn clamp_to(&self, width: u32, height: u32) -> Rect {
        Rect {
            left: self.left.clamp(0, width as i32),
            top: self.top.clamp(0, height as i32),
            right: self.right.clamp(0, width as i32),
            bottom: self.bottom.clamp(0, height as i32),
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{} {},{}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}
