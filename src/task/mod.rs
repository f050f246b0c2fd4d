pub mod distance_convert;
pub mod echo_capture;
pub mod render;
pub mod trigger;
