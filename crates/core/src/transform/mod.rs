pub mod orientation;
pub mod yuv;
