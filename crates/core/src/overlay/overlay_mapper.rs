use crate::detection::domain::detections::Detections;
use crate::error::CompositeError;
use crate::shared::rect::Rect;

/// What the drawing layer should do with the face overlay this frame.
///
/// `Clear` is an explicit signal, distinct from an empty draw list, so
/// the caller can tell "no detections this frame" apart from "overlay
/// unchanged".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayUpdate {
    Clear,
    Draw(Vec<Rect>),
}

/// Scales detection boxes from analysis space (`src_w` x `src_h`) into
/// view space (`dst_w` x `dst_h`).
///
/// Each axis scales independently; non-uniform scaling is deliberate
/// since the analysis buffer and the view rarely share an aspect ratio.
/// Fewer than two detections yield `Clear`.
pub fn map_to_view(
    detections: &Detections,
    (src_w, src_h): (u32, u32),
    (dst_w, dst_h): (u32, u32),
) -> Result<OverlayUpdate, CompositeError> {
    if src_w == 0 || src_h == 0 {
        return Err(CompositeError::EmptySourceSpace {
            width: src_w,
            height: src_h,
        });
    }

    if detections.len() <= 1 {
        return Ok(OverlayUpdate::Clear);
    }

    let rects = detections
        .boxes()
        .iter()
        .map(|b| {
            Rect::new(
                scale(b.left, dst_w, src_w),
                scale(b.top, dst_h, src_h),
                scale(b.right, dst_w, src_w),
                scale(b.bottom, dst_h, src_h),
            )
        })
        .collect();
    Ok(OverlayUpdate::Draw(rects))
}

fn scale(coord: i32, dst: u32, src: u32) -> i32 {
    (coord as i64 * dst as i64 / src as i64) as i32
}
