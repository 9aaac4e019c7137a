//! Face-region remapping and swap compositing.
//!
//! Pure, synchronous pixel-buffer operations extracted from a camera
//! pipeline: mapping detection boxes between coordinate spaces, swapping
//! paired face regions within a frame, and small per-frame analyses
//! (luminance, frame rate). Capture, rendering, and the face detector
//! itself live outside this crate and talk to it through the traits in
//! `detection` and `io`.

pub mod analysis;
pub mod compositing;
pub mod detection;
pub mod error;
pub mod filters;
pub mod io;
pub mod overlay;
pub mod pipeline;
pub mod shared;
pub mod transform;
