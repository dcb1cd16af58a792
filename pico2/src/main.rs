//! Endless Runner Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Runs the game on the Pimoroni PIM715 Display Pack 2.8", showing the
//! 128x64 paged LCD at 2x in the middle of the panel.
//!
//! # Architecture
//!
//! - Main task: ticks the game every `TICK_PERIOD_MS` from a `Ticker`,
//!   rasterizes the glyph frame into the idle framebuffer when something
//!   changed, then hands it to the flush task
//! - Flush task: waits for a signal, flushes the completed buffer via DMA
//!
//! # Button Controls
//!
//! - **A**: Jump
//! - **B**: Crouch (fast-fall while airborne)
//! - **X**: Cycle starting lives (start screen only)
//!
//! # Wiring
//!
//! PIM715: DC=16, CS=17, CLK=18, MOSI=19, backlight=20, buttons A/B/X=12/13/14
//! (active-low), reset tied to RUN. Lives LEDs are external on GPIO2..5.

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
mod st7789;
mod tasks;

// Re-export testable modules from library for local use
mod config {
    pub use runner_pico2::config::*;
}

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::{Duration, Instant, Ticker, Timer};
use embedded_graphics::prelude::*;
use runner_common::colors::BEZEL;
use runner_common::config::{GROUND_ENTRY_STEP_MS, TICK_PERIOD_MS};
use runner_common::ground::GroundEntry;
use runner_common::{Game, GameEvent, GlyphFrame, Phase, raster};
use runner_pico2::input::{ButtonLevels, Buttons};
use runner_pico2::leds::LivesLeds;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::config::{GAME_CONFIG, LCD_SCALE};
use crate::st7789::{DoubleBuffer, St7789Flusher, St7789Renderer, spi_config};
use crate::tasks::{FLUSH_DONE, FLUSH_SIGNAL, display_flush_task};

/// Rasterize the whole glyph frame into the current render buffer.
fn render(
    frame: &GlyphFrame,
    double_buffer: &mut DoubleBuffer,
) {
    // SAFETY: the flush task only reads the buffer it was signalled with
    let buffer = unsafe { double_buffer.render_buffer() };
    let mut renderer = St7789Renderer::new(buffer);
    raster::draw_frame(frame, &mut renderer, Point::zero(), LCD_SCALE).ok();
}

/// Log one game event over RTT.
fn log_event(event: &GameEvent) {
    match *event {
        GameEvent::Started => info!("Run started"),
        GameEvent::Jumped => debug!("Jump"),
        GameEvent::Spawned(kind) => debug!("Spawned {}", kind.label()),
        GameEvent::SpawnSkipped => warn!("Spawn skipped: no free slot"),
        GameEvent::SpeedUp(cadence) => info!("Speed up: {} ticks per step", cadence),
        GameEvent::Hit { lives_left } => warn!("Hit! {} lives left", lives_left),
        GameEvent::GameOver { score } => info!("Game over, score {}", score),
        GameEvent::Restarted => info!("Back to start screen"),
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Runner starting...");

    let p = embassy_rp::init(Default::default());

    // Lives LEDs (external, active-high on GPIO2..5)
    let mut lives = LivesLeds::new([
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
    ]);

    // Initialize display pins
    // PIM715 pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // Initialize async SPI with DMA (TX-only, display doesn't need MISO)
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config());

    let mut flusher = St7789Flusher::new(spi, dc, cs);
    flusher.init(BEZEL).await;
    info!("Display initialized");

    // SAFETY: Only one DoubleBuffer instance exists
    let mut double_buffer = unsafe { DoubleBuffer::new() };
    let mut frame = GlyphFrame::new();
    let mut game = Game::new(GAME_CONFIG);

    // Ground entry animation, flushed inline before the flush task exists
    for step in GroundEntry::new() {
        game.intro_step(step, &mut frame);
        frame.take_dirty();
        render(&frame, &mut double_buffer);
        let idx = double_buffer.swap();
        // SAFETY: nothing renders into this buffer until the next swap
        flusher.flush_buffer(unsafe { st7789::buffer(idx) }).await;
        Timer::after_millis(GROUND_ENTRY_STEP_MS).await;
    }
    game.draw_start_screen(&mut frame, &mut lives);
    info!("Start screen, {} lives", game.config().lives());

    // Move flusher to static for task (Embassy tasks need 'static lifetime)
    static FLUSHER: StaticCell<St7789Flusher<'static>> = StaticCell::new();
    let flusher: &'static mut St7789Flusher<'static> = FLUSHER.init(flusher);
    spawner.spawn(display_flush_task(flusher)).unwrap();

    // Initialize buttons (active-low with internal pull-up)
    // PIM715: A=12, B=13, X=14
    let btn_a = Input::new(p.PIN_12, Pull::Up);
    let btn_b = Input::new(p.PIN_13, Pull::Up);
    let btn_x = Input::new(p.PIN_14, Pull::Up);
    let mut buttons = Buttons::new();

    info!("Buttons initialized!");

    let mut flush_idle = true;
    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));

    loop {
        let now = Instant::now();
        let levels = ButtonLevels {
            a: btn_a.is_low(),
            b: btn_b.is_low(),
            x: btn_x.is_low(),
        };
        let input = buttons.process(levels, now.as_millis());

        if matches!(game.phase(), Phase::StartScreen { .. }) {
            // How long the player waits decides the obstacle sequence
            game.reseed(now.as_ticks() as u32);
            if input.cycle_lives {
                let count = game.config().cycle_lives().lives();
                game.set_starting_lives(count, &mut lives);
                info!("Starting lives: {}", count);
            }
        }

        let report = game.tick(input.tick, &mut frame, &mut lives);
        report.events.iter().for_each(log_event);

        if FLUSH_DONE.try_take().is_some() {
            flush_idle = true;
        }
        if flush_idle && frame.take_dirty() != 0 {
            render(&frame, &mut double_buffer);
            FLUSH_SIGNAL.signal(double_buffer.swap());
            flush_idle = false;
        }

        ticker.next().await;
    }
}
