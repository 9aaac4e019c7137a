/// Number of channels in an RGBA pixel buffer.
pub const RGBA_CHANNELS: u8 = 4;

/// Sliding-window size for the moving-average frame-rate estimate.
pub const FRAME_RATE_WINDOW: usize = 8;

/// Run detection every Nth analyzed frame, reusing results in between.
pub const ANALYSIS_INTERVAL: usize = 3;
