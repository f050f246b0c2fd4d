//! Host-side tests for the measurement pipeline.
//!
//! The firmware's queues and pacing signal are plain embassy-sync primitives
//! with no hardware dependencies, so their blocking, dropping and timeout
//! behavior is verified here on the host. See `tests/pipeline.rs`.

#![no_std]
