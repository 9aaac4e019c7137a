use thiserror::Error;

use crate::shared::rect::Rect;

/// Errors produced by detection parsing and region compositing.
///
/// All variants are recoverable by the caller: skip the frame and retry
/// on the next one. None are fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositeError {
    /// The flat detection sequence does not have length `1 + 4 * count`.
    #[error("detection sequence of length {len} does not match declared face count {count}")]
    InvalidDetectionFormat { len: usize, count: i64 },

    /// A box is degenerate (non-positive width/height) or extends outside
    /// the frame it refers to.
    #[error("region {region} is degenerate or outside the {width}x{height} frame")]
    InvalidRegion {
        region: Rect,
        width: u32,
        height: u32,
    },

    /// Coordinate mapping was asked to scale out of a zero-area space.
    #[error("source space {width}x{height} has zero area")]
    EmptySourceSpace { width: u32, height: u32 },

    /// A raw plane buffer does not match the dimensions it was declared with.
    #[error("plane of {actual} bytes does not match expected {expected} for {width}x{height}")]
    PlaneSizeMismatch {
        actual: usize,
        expected: usize,
        width: u32,
        height: u32,
    },
}
