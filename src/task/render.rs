//! Distance rendering
//!
//! Draws the latest measurement on the SSD1306 OLED, paced by the trigger
//! signal so the panel refreshes once per measurement cycle.
//!
//! # Per-cycle protocol
//! 1. Wait (unbounded) for the trigger permit
//! 2. Wait up to 1 s for a distance sample
//!    - sample: draw label, value and a proportional bar, then flush
//!    - timeout: draw the "ERRO" indicator, then flush
//!
//! The timeout branch keeps the UI honest when the measurement pipeline
//! stalls (no echo detected, sensor unplugged): the panel shows an explicit
//! error instead of freezing on the last good value. The pipeline retries
//! by itself on the next cycle.

use crate::system::pipeline::{DistanceReceiver, TriggerPacer};
use crate::system::resources::{DisplayResources, Irqs};
use core::fmt::Write;
use defmt::info;
use embassy_rp::i2c::{Config, I2c};
use embassy_time::{with_timeout, Duration};
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, ascii::FONT_9X18_BOLD, MonoTextStyleBuilder},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::{Baseline, Text},
};
use heapless::String;
use ranging_core::bar_length_px;
use ssd1306::{prelude::*, I2CDisplayInterface, Ssd1306Async};

/// How long to wait for a sample after the trigger fires
const RECEIVE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Vertical position of the distance bar (128x32 panel)
const BAR_Y: i32 = 20;

/// Render task, runs forever
#[embassy_executor::task]
pub async fn render(r: DisplayResources, pacer: TriggerPacer, distances: DistanceReceiver) {
    info!("initializing display driver");
    let mut config = Config::default();
    config.frequency = 400_000;
    let i2c = I2c::new_async(r.i2c, r.scl, r.sda, Irqs, config);

    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306Async::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    // Display bring-up failure is an initialization-time abort.
    display.init().await.unwrap();
    info!("display ready");

    let label_style = MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build();
    let value_style = MonoTextStyleBuilder::new()
        .font(&FONT_9X18_BOLD)
        .text_color(BinaryColor::On)
        .build();
    let bar_style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

    loop {
        pacer.acquire().await;

        display.clear(BinaryColor::Off).unwrap();

        match with_timeout(RECEIVE_TIMEOUT, distances.receive()).await {
            Ok(distance) => {
                let mut value: String<16> = String::new();
                // A u32 in cm always fits in 16 bytes
                write!(value, "{} cm", distance).unwrap();

                Text::with_baseline("DISTANCE", Point::zero(), label_style, Baseline::Top)
                    .draw(&mut display)
                    .unwrap();
                Text::with_baseline(
                    value.as_str(),
                    Point::new(64, 0),
                    value_style,
                    Baseline::Top,
                )
                .draw(&mut display)
                .unwrap();
                Line::new(
                    Point::new(0, BAR_Y),
                    Point::new(bar_length_px(distance) as i32, BAR_Y),
                )
                .into_styled(bar_style)
                .draw(&mut display)
                .unwrap();
            }
            Err(_) => {
                // Pipeline stalled this cycle; say so instead of hanging.
                Text::with_baseline("ERRO", Point::zero(), value_style, Baseline::Top)
                    .draw(&mut display)
                    .unwrap();
            }
        }

        display.flush().await.unwrap();
    }
}
