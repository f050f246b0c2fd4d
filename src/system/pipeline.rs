//! Measurement pipeline primitives
//!
//! Defines the two bounded queues and the pacing signal that carry every
//! cross-context message in the firmware:
//!
//! ```text
//! echo capture --ECHO_QUEUE--> distance task --DISTANCE_QUEUE--> render task
//! trigger task -----------------TRIGGER_SIGNAL-----------------^
//! ```
//!
//! The statics below are construction sites only. Tasks get owned handles
//! from the accessor functions at spawn time; nothing else reaches into the
//! queues, so these three primitives are the sole synchronization discipline
//! between interrupt context and task context.
//!
//! Queue depths of 32 deliberately allow measurement cycles to accumulate if
//! rendering falls behind; the value shown after a given trigger may be stale
//! relative to that specific pulse.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;
use ranging_core::{DistanceSample, EchoSample};

/// Depth of both queues, headroom for a renderer that falls behind
pub const QUEUE_DEPTH: usize = 32;

/// Raw echo pulse widths, capture context to distance task
static ECHO_QUEUE: Channel<CriticalSectionRawMutex, EchoSample, QUEUE_DEPTH> = Channel::new();

/// Computed distances, distance task to render task
static DISTANCE_QUEUE: Channel<CriticalSectionRawMutex, DistanceSample, QUEUE_DEPTH> =
    Channel::new();

/// Render pacing signal with binary-semaphore semantics: releasing while a
/// permit is outstanding is a no-op, a wait consumes the permit.
static TRIGGER_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

pub type EchoSender = Sender<'static, CriticalSectionRawMutex, EchoSample, QUEUE_DEPTH>;
pub type EchoReceiver = Receiver<'static, CriticalSectionRawMutex, EchoSample, QUEUE_DEPTH>;
pub type DistanceSender = Sender<'static, CriticalSectionRawMutex, DistanceSample, QUEUE_DEPTH>;
pub type DistanceReceiver = Receiver<'static, CriticalSectionRawMutex, DistanceSample, QUEUE_DEPTH>;

/// Producer handle for the echo queue (capture context side)
pub fn echo_sender() -> EchoSender {
    ECHO_QUEUE.sender()
}

/// Consumer handle for the echo queue (distance task side)
pub fn echo_receiver() -> EchoReceiver {
    ECHO_QUEUE.receiver()
}

/// Producer handle for the distance queue
pub fn distance_sender() -> DistanceSender {
    DISTANCE_QUEUE.sender()
}

/// Consumer handle for the distance queue
pub fn distance_receiver() -> DistanceReceiver {
    DISTANCE_QUEUE.receiver()
}

/// Handle for the render pacing signal.
///
/// Copyable so the trigger task (release side) and render task (acquire side)
/// each own one.
#[derive(Clone, Copy)]
pub struct TriggerPacer(&'static Signal<CriticalSectionRawMutex, ()>);

impl TriggerPacer {
    /// Releases the permit. A no-op if the previous permit is uncollected.
    pub fn release(&self) {
        self.0.signal(());
    }

    /// Waits for and consumes the next permit.
    pub async fn acquire(&self) {
        self.0.wait().await;
    }
}

/// Handle to the trigger pacing signal
pub fn trigger_pacer() -> TriggerPacer {
    TriggerPacer(&TRIGGER_SIGNAL)
}
