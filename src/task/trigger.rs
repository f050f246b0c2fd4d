//! Trigger pulse generation
//!
//! Pulses the ultrasonic emitter once per measurement cycle and paces the
//! render task through the trigger signal.
//!
//! # Cycle
//! 1. Drive the trigger pin high for 5 ms (yielding delay, not a busy-wait)
//! 2. Drive it low and sleep out the 1 s inter-cycle period
//! 3. Release the render pacing permit
//!
//! The sensor itself only needs a ~10 µs pulse; the generous width costs
//! nothing at a 1 Hz cadence and needs no busy-waiting.

use crate::system::pipeline::TriggerPacer;
use crate::system::resources::TriggerResources;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer};

/// Width of the emitter trigger pulse
const PULSE_WIDTH: Duration = Duration::from_millis(5);

/// Time between measurement cycles
const CYCLE_PERIOD: Duration = Duration::from_secs(1);

/// Emitter pulse task, runs forever
#[embassy_executor::task]
pub async fn trigger(r: TriggerResources, pacer: TriggerPacer) {
    let mut pin = Output::new(r.pin, Level::Low);

    loop {
        pin.set_high();
        Timer::after(PULSE_WIDTH).await;
        pin.set_low();
        Timer::after(CYCLE_PERIOD).await;
        pacer.release();
    }
}
