use crate::compositing::domain::face_swapper::FaceSwapper;
use crate::error::CompositeError;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

use super::resample::{bilinear_resample, draw_patch, extract_patch};

/// CPU face-swap compositor.
///
/// Pairs box `i` with box `i + N/2` and draws each face's patch,
/// bilinearly resampled, into its partner's footprint on top of a full
/// copy of the input. With fewer than two boxes the output is a plain
/// copy; with an odd count the last box sits out.
pub struct CpuSwapCompositor;

impl CpuSwapCompositor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CpuSwapCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceSwapper for CpuSwapCompositor {
    fn swap(&self, frame: &Frame, boxes: &[Rect]) -> Result<Frame, CompositeError> {
        let mut output = frame.clone();
        if boxes.len() <= 1 {
            return Ok(output);
        }

        let half = boxes.len() / 2;
        // Validate every participating box before touching any pixels so
        // a bad box can never leave a partially composited output.
        for b in &boxes[..half * 2] {
            b.validate_within(frame.width(), frame.height())?;
        }

        let fw = frame.width() as usize;
        let channels = frame.channels() as usize;

        for i in 0..half {
            let a = boxes[i];
            let b = boxes[i + half];

            let patch_a = extract_patch(frame.data(), fw, channels, a);
            let patch_b = extract_patch(frame.data(), fw, channels, b);

            let a_in_b = bilinear_resample(
                &patch_a,
                a.width() as usize,
                a.height() as usize,
                channels,
                b.width() as usize,
                b.height() as usize,
            );
            let b_in_a = bilinear_resample(
                &patch_b,
                b.width() as usize,
                b.height() as usize,
                channels,
                a.width() as usize,
                a.height() as usize,
            );

            draw_patch(output.data_mut(), &a_in_b, fw, channels, b);
            draw_patch(output.data_mut(), &b_in_a, fw, channels, a);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame painted with a flat background plus solid-colored blocks.
    fn frame_with_blocks(w: u32, h: u32, blocks: &[(Rect, [u8; 4])]) -> Frame {
        let mut frame = Frame::new(vec![10u8; (w * h * 4) as usize], w, h, 4);
        for &(rect, color) in blocks {
            for y in rect.top..rect.bottom {
                for x in rect.left..rect.right {
                    let off = frame.pixel_offset(x as u32, y as u32);
                    frame.data_mut()[off..off + 4].copy_from_slice(&color);
                }
            }
        }
        frame
    }

    fn pixel(frame: &Frame, x: u32, y: u32) -> [u8; 4] {
        let off = frame.pixel_offset(x, y);
        frame.data()[off..off + 4].try_into().unwrap()
    }

    const RED: [u8; 4] = [200, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 200, 255];
    const GREEN: [u8; 4] = [0, 200, 0, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn test_no_faces_copies_input_exactly() {
        let frame = frame_with_blocks(20, 20, &[(Rect::new(2, 2, 6, 6), RED)]);
        let out = CpuSwapCompositor::new().swap(&frame, &[]).unwrap();
        assert_eq!(out.data(), frame.data());
    }

    #[test]
    fn test_single_face_copies_input_exactly() {
        let frame = frame_with_blocks(20, 20, &[(Rect::new(2, 2, 6, 6), RED)]);
        let out = CpuSwapCompositor::new()
            .swap(&frame, &[Rect::new(2, 2, 6, 6)])
            .unwrap();
        assert_eq!(out.data(), frame.data());
    }

    #[test]
    fn test_output_does_not_alias_input() {
        let frame = frame_with_blocks(10, 10, &[]);
        let mut out = CpuSwapCompositor::new().swap(&frame, &[]).unwrap();
        out.data_mut()[0] = 99;
        assert_eq!(frame.data()[0], 10);
    }

    #[test]
    fn test_two_faces_swap_colors() {
        let a = Rect::new(2, 2, 6, 6);
        let b = Rect::new(12, 12, 16, 16);
        let frame = frame_with_blocks(20, 20, &[(a, RED), (b, BLUE)]);

        let out = CpuSwapCompositor::new().swap(&frame, &[a, b]).unwrap();

        // a's footprint now shows b's color and vice versa
        assert_eq!(pixel(&out, 3, 3), BLUE);
        assert_eq!(pixel(&out, 13, 13), RED);
    }

    #[test]
    fn test_swap_resamples_between_different_sizes() {
        let a = Rect::new(1, 1, 5, 5); // 4x4
        let b = Rect::new(10, 10, 18, 18); // 8x8
        let frame = frame_with_blocks(20, 20, &[(a, RED), (b, BLUE)]);

        let out = CpuSwapCompositor::new().swap(&frame, &[a, b]).unwrap();

        // Solid patches stay solid after resampling, at each other's size.
        for y in 1..5 {
            for x in 1..5 {
                assert_eq!(pixel(&out, x, y), BLUE);
            }
        }
        for y in 10..18 {
            for x in 10..18 {
                assert_eq!(pixel(&out, x, y), RED);
            }
        }
    }

    #[test]
    fn test_four_faces_swap_both_pairs() {
        let boxes = [
            Rect::new(0, 0, 4, 4),
            Rect::new(6, 0, 10, 4),
            Rect::new(0, 6, 4, 10),
            Rect::new(6, 6, 10, 10),
        ];
        let frame = frame_with_blocks(
            20,
            20,
            &[
                (boxes[0], RED),
                (boxes[1], BLUE),
                (boxes[2], GREEN),
                (boxes[3], WHITE),
            ],
        );

        let out = CpuSwapCompositor::new().swap(&frame, &boxes).unwrap();

        // Pairs are (0, 2) and (1, 3).
        assert_eq!(pixel(&out, 1, 1), GREEN);
        assert_eq!(pixel(&out, 1, 7), RED);
        assert_eq!(pixel(&out, 7, 1), WHITE);
        assert_eq!(pixel(&out, 7, 7), BLUE);
    }

    #[test]
    fn test_background_pixels_unchanged() {
        let a = Rect::new(2, 2, 6, 6);
        let b = Rect::new(12, 12, 16, 16);
        let frame = frame_with_blocks(20, 20, &[(a, RED), (b, BLUE)]);
        let out = CpuSwapCompositor::new().swap(&frame, &[a, b]).unwrap();

        for y in 0..20u32 {
            for x in 0..20u32 {
                let in_a = (2..6).contains(&x) && (2..6).contains(&y);
                let in_b = (12..16).contains(&x) && (12..16).contains(&y);
                if !in_a && !in_b {
                    assert_eq!(
                        pixel(&out, x, y),
                        pixel(&frame, x, y),
                        "background pixel ({x},{y}) changed"
                    );
                }
            }
        }
    }

    #[test]
    fn test_odd_count_ignores_last_box() {
        let a = Rect::new(2, 2, 6, 6);
        let b = Rect::new(12, 12, 16, 16);
        let c = Rect::new(12, 2, 16, 6);
        let frame = frame_with_blocks(20, 20, &[(a, RED), (b, BLUE), (c, GREEN)]);

        let out = CpuSwapCompositor::new().swap(&frame, &[a, b, c]).unwrap();

        // Pair (a, b) swaps; c is left as-is.
        assert_eq!(pixel(&out, 3, 3), BLUE);
        assert_eq!(pixel(&out, 13, 13), RED);
        assert_eq!(pixel(&out, 13, 3), GREEN);
    }

    #[test]
    fn test_out_of_bounds_box_fails_without_partial_output() {
        let a = Rect::new(2, 2, 6, 6);
        let bad = Rect::new(15, 15, 25, 25); // right/bottom past the edge
        let frame = frame_with_blocks(20, 20, &[(a, RED)]);

        let err = CpuSwapCompositor::new().swap(&frame, &[a, bad]).unwrap_err();
        assert!(matches!(err, CompositeError::InvalidRegion { .. }));
    }

    #[test]
    fn test_zero_width_box_is_invalid() {
        let a = Rect::new(2, 2, 2, 6);
        let b = Rect::new(12, 12, 16, 16);
        let frame = frame_with_blocks(20, 20, &[]);

        let err = CpuSwapCompositor::new().swap(&frame, &[a, b]).unwrap_err();
        assert!(matches!(err, CompositeError::InvalidRegion { .. }));
    }

    #[test]
    fn test_odd_count_does_not_validate_ignored_box() {
        let a = Rect::new(2, 2, 6, 6);
        let b = Rect::new(12, 12, 16, 16);
        let ignored = Rect::new(50, 50, 60, 60); // outside, but never used
        let frame = frame_with_blocks(20, 20, &[(a, RED), (b, BLUE)]);

        let out = CpuSwapCompositor::new()
            .swap(&frame, &[a, b, ignored])
            .unwrap();
        assert_eq!(pixel(&out, 3, 3), BLUE);
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let frame = frame_with_blocks(32, 24, &[]);
        let out = CpuSwapCompositor::new().swap(&frame, &[]).unwrap();
        assert_eq!(out.width(), 32);
        assert_eq!(out.height(), 24);
        assert_eq!(out.channels(), 4);
    }
}
