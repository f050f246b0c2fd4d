//! Measurement arithmetic for the ultrasonic rangefinder
//!
//! Pure conversion and layout math shared between the firmware tasks and the
//! host test suite. Everything here is deterministic integer/float arithmetic
//! with no hardware dependencies.
//!
//! # Distance Conversion
//! The HC-SR04 echo pin stays high for the round-trip time of the ultrasonic
//! burst. Distance is half the round trip at the speed of sound in air:
//! ```text
//! distance_cm = pulse_us * 0.017015
//! ```
//! where 0.017015 cm/µs is half of ~340.3 m/s. The result is truncated to
//! whole centimeters, matching the sensor's realistic resolution.

#![no_std]

/// Echo pulse width in microseconds, rising edge to falling edge.
pub type EchoSample = u32;

/// Measured distance in whole centimeters.
pub type DistanceSample = u32;

/// Half the speed of sound in air, in cm/µs (at ~20°C)
pub const CM_PER_US: f32 = 0.017015;

/// OLED panel width in pixels (SSD1306 128x32)
pub const DISPLAY_WIDTH: u32 = 128;

/// Pixels of bar per centimeter of distance
pub const BAR_SCALE: f32 = 1.3;

/// Converts a raw echo pulse width to a distance in whole centimeters.
///
/// Truncates toward zero. No plausibility checking: implausible pulse widths
/// (missed trigger, stale edge) convert like any other and are forwarded
/// uncorrected.
pub fn distance_cm(pulse_us: EchoSample) -> DistanceSample {
    (pulse_us as f32 * CM_PER_US) as DistanceSample
}

/// Length in pixels of the horizontal distance bar.
///
/// `floor(distance * 1.3)`, capped at the panel width so a far reading draws
/// a full-width bar instead of overflowing the frame buffer.
pub fn bar_length_px(distance: DistanceSample) -> u32 {
    let px = (distance as f32 * BAR_SCALE) as u32;
    px.min(DISPLAY_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_reference_pulse_widths() {
        // 5882 µs round trip is one meter to the target and back
        assert_eq!(distance_cm(5882), 100);
        assert_eq!(distance_cm(1000), 17);
    }

    #[test]
    fn conversion_truncates() {
        // 100 µs -> 1.7015 cm, truncated
        assert_eq!(distance_cm(100), 1);
        assert_eq!(distance_cm(0), 0);
    }

    #[test]
    fn bar_scales_below_the_cap() {
        assert_eq!(bar_length_px(17), 22);
        assert_eq!(bar_length_px(98), 127);
        assert_eq!(bar_length_px(0), 0);
    }

    #[test]
    fn bar_reaches_the_cap_at_99cm() {
        // 99 * 1.3 = 128.7, floored to exactly the panel width
        assert_eq!(bar_length_px(99), 128);
    }

    #[test]
    fn bar_clamps_beyond_the_panel() {
        assert_eq!(bar_length_px(100), DISPLAY_WIDTH);
        assert_eq!(bar_length_px(129), DISPLAY_WIDTH);
        assert_eq!(bar_length_px(u32::MAX), DISPLAY_WIDTH);
    }
}
