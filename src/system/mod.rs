//! Core system components for the rangefinder
pub mod pipeline;
pub mod resources;
