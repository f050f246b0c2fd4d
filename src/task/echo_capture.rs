//! Echo pulse timing
//!
//! Timestamps both edges of the echo pin and enqueues the pulse width in
//! microseconds. This task is spawned on the interrupt executor, so it runs
//! at hardware interrupt priority and preempts every thread-mode task; its
//! body must stay short and must never block.
//!
//! # Handoff
//! The only exit for a sample is the non-blocking `try_send` into the echo
//! queue. If the queue is full the sample is dropped on the floor - accepted
//! data loss, a capture context has no business waiting on a consumer.
//!
//! # Known gap
//! A missed rising edge leaves `start` stale, so the next falling edge
//! computes a bogus width that is indistinguishable from a real one
//! downstream. Accepted; samples carry no validity tag.

use crate::system::pipeline::EchoSender;
use crate::system::resources::EchoResources;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::Instant;

/// Edge-timing task, runs forever at interrupt priority
#[embassy_executor::task]
pub async fn echo_capture(r: EchoResources, samples: EchoSender) {
    let mut pin = Input::new(r.pin, Pull::None);
    let mut start = Instant::MIN;

    loop {
        pin.wait_for_any_edge().await;
        if pin.is_high() {
            start = Instant::now();
        } else {
            let width = (Instant::now() - start).as_micros() as u32;
            // Silent drop when full; no waiting in capture context.
            let _ = samples.try_send(width);
        }
    }
}
