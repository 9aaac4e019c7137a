pub mod flat_sequence_detector;
pub mod interval_detector;
