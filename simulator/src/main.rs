//! Rolling chart simulator for desktop platforms.
//!
//! Renders a 128x32 monochrome chart in an SDL window using the
//! embedded-graphics-simulator crate.
//!
//! # Keys
//!
//! - `R`: reset the chart (clears samples, shows the title again)
//! - `I`: toggle the info overlay
//! - `Esc`: quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

mod clock;
mod signal;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use rolling_chart::RollingChart;
use rolling_chart::config::{DEFAULT_CAPACITY, DEFAULT_MAX_HEIGHT, DISPLAY_HEIGHT, DISPLAY_WIDTH};

use crate::clock::StdClock;
use crate::signal::sensor_reading;
use crate::timing::{FRAME_TIME, SAMPLE_INTERVAL};

const TITLE: &str = "Temp";

fn main() {
    let mut display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT));
    let output_settings = OutputSettingsBuilder::new()
        .scale(4)
        .theme(BinaryColorTheme::OledBlue)
        .build();
    let mut window = Window::new("Rolling Chart Sim", &output_settings);

    display.clear(BinaryColor::Off).ok();
    window.update(&display);

    let clock = StdClock::new();
    let mut chart: RollingChart<'_, _, DEFAULT_CAPACITY> = RollingChart::new(TITLE, DEFAULT_MAX_HEIGHT, &clock);

    // Sampler state
    let mut t = 0.0f32;
    let mut sample_count = 0u32;
    let mut last_sample = Instant::now();

    println!("Chart started: {TITLE}, {DEFAULT_CAPACITY} samples");

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::R => {
                            chart.reset();
                            println!("Chart reset");
                        }
                        Keycode::I => {
                            let active = !chart.info_mode();
                            chart.set_info_mode(active);
                            println!("Info mode: {}", if active { "ON" } else { "OFF" });
                        }
                        Keycode::Escape => return,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Sampler runs on its own cadence, independent of the frame rate
        if last_sample.elapsed() >= SAMPLE_INTERVAL {
            last_sample = Instant::now();
            let reading = sensor_reading(t, sample_count);
            if let Err(err) = chart.try_update(reading) {
                println!("Dropped reading {reading:.2}: {err}");
            }
            t += 0.1;
            sample_count = sample_count.wrapping_add(1);
        }

        display.clear(BinaryColor::Off).ok();
        chart.render(&mut display);
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
