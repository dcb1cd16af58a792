//! Endless Runner Simulator for Windows/Desktop.
//!
//! Runs the same game core as the firmware in an embedded-graphics-simulator
//! window, with the lives LEDs and an event log under the LCD.
//!
//! # Keys
//!
//! The keys mirror the Display Pack buttons:
//! - **A**: Jump (hold to keep jumping)
//! - **B**: Crouch (fast-fall while airborne)
//! - **X**: Cycle starting lives (start screen only)
//! - **Q**: Quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod panel;
mod timing;

use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use runner_common::config::MAX_LIVES;
use runner_common::event_log::{EventLog, push_u32};
use runner_common::ground::GroundEntry;
use runner_common::raster::{self, ALL_PAGES};
use runner_common::{Game, GameConfig, GlyphFrame, Phase, TickInput};

use crate::panel::{LCD_ORIGIN, LCD_SCALE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::timing::{FRAME_TIME, GROUND_ENTRY_STEP, TICKS_PER_FRAME};

/// Keyboard state carried between frames.
#[derive(Default)]
struct Keys {
    jump: bool,
    crouch: bool,
    cycle_lives: bool,
    quit: bool,
}

impl Keys {
    /// Apply all pending window events.
    fn poll(
        &mut self,
        window: &mut Window,
    ) {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => self.quit = true,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                    Keycode::A => self.jump = true,
                    Keycode::B => self.crouch = true,
                    Keycode::X if !repeat => self.cycle_lives = true,
                    Keycode::Q => self.quit = true,
                    _ => {}
                },
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::A => self.jump = false,
                    Keycode::B => self.crouch = false,
                    _ => {}
                },
                _ => {}
            }
        }
    }

    const fn tick_input(&self) -> TickInput {
        TickInput {
            jump: self.jump,
            crouch: self.crouch,
        }
    }
}

/// Seed from the wall clock so every session gets a different course.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.subsec_nanos() ^ elapsed.as_secs() as u32)
}

/// Redraw the LCD pages that changed, plus the LEDs and log.
fn present(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    frame: &mut GlyphFrame,
    leds: [bool; MAX_LIVES as usize],
    log: &EventLog,
) {
    let pages = frame.take_dirty();
    if pages != 0 {
        raster::draw_pages(frame, display, LCD_ORIGIN, LCD_SCALE, pages).ok();
    }
    panel::draw_lives(display, leds);
    panel::draw_log_terminal(display, log);
    window.update(display);
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Runner Sim", &output_settings);

    let mut frame = GlyphFrame::new();
    let mut leds = [false; MAX_LIVES as usize];
    let mut log = EventLog::new();
    let mut keys = Keys::default();
    let mut game = Game::new(GameConfig::DEFAULT.with_seed(clock_seed()));

    panel::draw_bezel(&mut display);
    raster::draw_pages(&frame, &mut display, LCD_ORIGIN, LCD_SCALE, ALL_PAGES).ok();
    log.push("Simulator started");

    for step in GroundEntry::new() {
        keys.poll(&mut window);
        if keys.quit {
            return;
        }
        game.intro_step(step, &mut frame);
        present(&mut display, &mut window, &mut frame, leds, &log);
        thread::sleep(GROUND_ENTRY_STEP);
    }
    game.draw_start_screen(&mut frame, &mut leds);
    log.push("Press A to start");

    loop {
        let frame_start = Instant::now();

        keys.poll(&mut window);
        if keys.quit {
            return;
        }

        if core::mem::take(&mut keys.cycle_lives) && matches!(game.phase(), Phase::StartScreen { .. }) {
            let count = game.config().cycle_lives().lives();
            game.set_starting_lives(count, &mut leds);

            let mut line: String<16> = String::new();
            line.push_str("Lives: ").ok();
            push_u32(&mut line, u32::from(count));
            log.push(&line);
        }

        for _ in 0..TICKS_PER_FRAME {
            let report = game.tick(keys.tick_input(), &mut frame, &mut leds);
            for event in &report.events {
                log.push_event(event);
            }
        }

        present(&mut display, &mut window, &mut frame, leds, &log);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
