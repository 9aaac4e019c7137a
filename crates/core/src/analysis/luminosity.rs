/// Mean luminance of a single-channel (Y-plane) byte buffer.
///
/// Bytes are interpreted as unsigned 0-255; the result is their
/// unweighted arithmetic mean. An empty buffer has no mean.
pub fn mean_luma(y_plane: &[u8]) -> Option<f64> {
    if y_plane.is_empty() {
        return None;
    }
    let sum: u64 = y_plane.iter().map(|&v| v as u64).sum();
    Some(sum as f64 / y_plane.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::one_pixel(1)]
    #[case::small(17)]
    #[case::full_frame(640 * 480)]
    fn test_all_white_is_exactly_255(#[case] len: usize) {
        let buf = vec![255u8; len];
        assert_eq!(mean_luma(&buf), Some(255.0));
    }

    #[rstest]
    #[case::one_pixel(1)]
    #[case::full_frame(640 * 480)]
    fn test_all_black_is_exactly_zero(#[case] len: usize) {
        let buf = vec![0u8; len];
        assert_eq!(mean_luma(&buf), Some(0.0));
    }

    #[test]
    fn test_mixed_values() {
        let buf = [0u8, 100, 200];
        assert_relative_eq!(mean_luma(&buf).unwrap(), 100.0);
    }

    #[test]
    fn test_empty_buffer_has_no_mean() {
        assert_eq!(mean_luma(&[]), None);
    }

    #[test]
    fn test_no_overflow_on_large_bright_buffer() {
        // Large enough that a u32 accumulator would wrap.
        let buf = vec![255u8; 20_000_000];
        assert_eq!(mean_luma(&buf), Some(255.0));
    }
}
