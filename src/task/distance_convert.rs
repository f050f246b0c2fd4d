//! Pulse-width to distance conversion
//!
//! Drains the echo queue and turns raw pulse widths into centimeter
//! distances for the render task.
//!
//! The receive blocks without a timeout; the send applies backpressure. If
//! the distance queue ever fills up this task stalls instead of dropping -
//! unlike the capture context, it can afford to wait. No plausibility
//! filtering happens here: a corrupted pulse width converts like any other.

use crate::system::pipeline::{DistanceSender, EchoReceiver};
use defmt::debug;
use ranging_core::distance_cm;

/// Conversion task, runs forever
#[embassy_executor::task]
pub async fn distance_convert(samples: EchoReceiver, distances: DistanceSender) {
    loop {
        let pulse_us = samples.receive().await;
        debug!("echo pulse width: {} us", pulse_us);
        distances.send(distance_cm(pulse_us)).await;
    }
}
