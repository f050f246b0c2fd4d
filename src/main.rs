//! Rangefinder firmware entry point
//!
//! Builds the measurement pipeline and spawns its tasks: the echo-capture
//! task on an interrupt-priority executor, the trigger/convert/render tasks
//! as thread-mode peers. Queue and signal handles are handed to each task at
//! spawn time; see [`system::pipeline`].

#![no_std]
#![no_main]

use crate::task::{
    distance_convert::distance_convert, echo_capture::echo_capture, render::render,
    trigger::trigger,
};
use defmt::info;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use system::pipeline;
use system::resources::{AssignedResources, DisplayResources, EchoResources, TriggerResources};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Executor for the echo-capture task. Runs in the SWI_IRQ_1 handler, so the
/// capture task preempts all thread-mode tasks.
static CAPTURE_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    CAPTURE_EXECUTOR.on_interrupt()
}

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the pins and peripherals into one group per task.
    let r = split_resources!(p);

    info!("starting measurement pipeline");

    // The capture task goes first so no echo edge is missed once the
    // trigger task starts pulsing the emitter.
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let capture_spawner = CAPTURE_EXECUTOR.start(interrupt::SWI_IRQ_1);
    capture_spawner
        .spawn(echo_capture(r.echo, pipeline::echo_sender()))
        .unwrap();

    spawner
        .spawn(trigger(r.trigger, pipeline::trigger_pacer()))
        .unwrap();
    spawner
        .spawn(distance_convert(
            pipeline::echo_receiver(),
            pipeline::distance_sender(),
        ))
        .unwrap();
    spawner
        .spawn(render(
            r.display,
            pipeline::trigger_pacer(),
            pipeline::distance_receiver(),
        ))
        .unwrap();
}
