use crate::error::CompositeError;
use crate::shared::rect::Rect;

/// Number of coordinates per face box in the flat detection sequence.
const COORDS_PER_BOX: usize = 4;

/// An ordered list of face boxes for one analyzed frame.
///
/// The external detector reports faces as a flat integer sequence:
/// element 0 is the face count N, followed by N groups of
/// `(left, top, right, bottom)` in analysis-space pixel coordinates.
/// A frame's detections are consumed immediately and never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Detections {
    boxes: Vec<Rect>,
}

impl Detections {
    pub fn new(boxes: Vec<Rect>) -> Self {
        Self { boxes }
    }

    /// Parses the detector's flat sequence, rejecting any sequence whose
    /// length is not exactly `1 + 4 * count`. No partial result is
    /// produced from a malformed sequence.
    pub fn parse(sequence: &[i32]) -> Result<Self, CompositeError> {
        let Some(&declared) = sequence.first() else {
            return Err(CompositeError::InvalidDetectionFormat { len: 0, count: 0 });
        };
        if declared < 0 {
            return Err(CompositeError::InvalidDetectionFormat {
                len: sequence.len(),
                count: declared as i64,
            });
        }
        let count = declared as usize;
        if sequence.len() != 1 + COORDS_PER_BOX * count {
            return Err(CompositeError::InvalidDetectionFormat {
                len: sequence.len(),
                count: declared as i64,
            });
        }

        let boxes = sequence[1..]
            .chunks_exact(COORDS_PER_BOX)
            .map(|c| Rect::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self { boxes })
    }

    pub fn boxes(&self) -> &[Rect] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Clamps every box to the given frame bounds, dropping boxes that
    /// end up empty. Detector output is untrusted; callers that cannot
    /// tolerate out-of-bounds coordinates go through this first.
    pub fn clamp_to(&self, width: u32, height: u32) -> Detections {
        Detections {
            boxes: self
                .boxes
                .iter()
                .map(|b| b.clamp_to(width, height))
                .filter(|b| !b.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_empty_detection() {
        let d = Detections::parse(&[0]).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn test_parse_two_faces() {
        let d = Detections::parse(&[2, 10, 20, 30, 40, 50, 60, 70, 80]).unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.boxes()[0], Rect::new(10, 20, 30, 40));
        assert_eq!(d.boxes()[1], Rect::new(50, 60, 70, 80));
    }

    #[test]
    fn test_parse_preserves_order() {
        let d = Detections::parse(&[3, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5]).unwrap();
        assert_eq!(d.boxes()[0].left, 0);
        assert_eq!(d.boxes()[1].left, 2);
        assert_eq!(d.boxes()[2].left, 4);
    }

    #[rstest]
    #[case::empty_sequence(&[] as &[i32])]
    #[case::truncated(&[2, 10, 20, 30, 40])]
    #[case::trailing_garbage(&[1, 10, 20, 30, 40, 99])]
    #[case::negative_count(&[-1])]
    fn test_parse_rejects_malformed(#[case] sequence: &[i32]) {
        let err = Detections::parse(sequence).unwrap_err();
        assert!(matches!(
            err,
            CompositeError::InvalidDetectionFormat { .. }
        ));
    }

    #[test]
    fn test_clamp_to_drops_fully_outside_boxes() {
        let d = Detections::new(vec![
            Rect::new(10, 10, 20, 20),
            Rect::new(200, 200, 300, 300),
        ]);
        let clamped = d.clamp_to(100, 100);
        assert_eq!(clamped.len(), 1);
        assert_eq!(clamped.boxes()[0], Rect::new(10, 10, 20, 20));
    }

    #[test]
    fn test_clamp_to_trims_partially_outside_boxes() {
        let d = Detections::new(vec![Rect::new(-5, -5, 50, 50)]);
        let clamped = d.clamp_to(100, 100);
        assert_eq!(clamped.boxes()[0], Rect::new(0, 0, 50, 50));
    }
}
