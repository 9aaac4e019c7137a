pub mod frame_analyzer;
pub mod frame_rate;
pub mod luminosity;
