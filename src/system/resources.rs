//! Hardware Resource Management
//!
//! Manages and allocates hardware resources (pins, peripherals) to the
//! rangefinder tasks. Each task owns the pins it drives:
//!
//! # Resource Groups
//! - Trigger: emitter pulse output pin
//! - Echo: edge-timed input pin, watched at interrupt priority
//! - Display: SSD1306 OLED on I2C0
//!
//! There are no shared peripherals; all cross-task communication goes through
//! the queues and signal in [`crate::system::pipeline`].

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::InterruptHandler as I2cInterruptHandler;
use embassy_rp::peripherals::{self, I2C0};

assign_resources! {
    /// Ultrasonic emitter trigger pin
    trigger: TriggerResources {
        pin: PIN_4,
    },
    /// Ultrasonic echo pin, timed on both edges
    echo: EchoResources {
        pin: PIN_5,
    },
    /// SSD1306 128x32 OLED on I2C0
    display: DisplayResources {
        i2c: I2C0,
        sda: PIN_12,
        scl: PIN_13,
    },
}

bind_interrupts!(pub struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});
