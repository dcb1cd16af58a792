//! Everything drawn around the emulated LCD: bezel, lives LEDs and the
//! event log terminal.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use profont::PROFONT_9_POINT;
use runner_common::colors::{BEZEL, BLACK, GRAY, RED, WHITE};
use runner_common::config::MAX_LIVES;
use runner_common::event_log::EventLog;
use runner_common::raster::{draw_leds, lcd_size};

// =============================================================================
// Layout
// =============================================================================

/// Simulator window size, before the window's own scaling.
pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 264;

/// Each LCD pixel becomes a `LCD_SCALE` x `LCD_SCALE` block.
pub const LCD_SCALE: u32 = 2;

/// Top-left corner of the LCD.
pub const LCD_ORIGIN: Point = Point::new(((SCREEN_WIDTH - lcd_size(LCD_SCALE).width) / 2) as i32, 12);

const LED_DIAMETER: u32 = 10;
const LED_Y: i32 = LCD_ORIGIN.y + lcd_size(LCD_SCALE).height as i32 + 10;
const LED_ROW_WIDTH: i32 = (MAX_LIVES as i32 - 1) * (LED_DIAMETER as i32 * 3 / 2) + LED_DIAMETER as i32;
const LED_X: i32 = (SCREEN_WIDTH as i32 - LED_ROW_WIDTH) / 2;

const LOG_DIVIDER_Y: i32 = LED_Y + LED_DIAMETER as i32 + 10;
const LOG_Y: i32 = LOG_DIVIDER_Y + 14;
const LOG_LINE_HEIGHT: i32 = 12;
const LOG_X: i32 = 4;

const LOG_BG: Rgb565 = Rgb565::new(1, 2, 1);
const LOG_PROMPT_COLOR: Rgb565 = RED;
const LOG_TEXT_COLOR: Rgb565 = WHITE;
const DIVIDER_COLOR: Rgb565 = GRAY;

// =============================================================================
// Drawing
// =============================================================================

/// Paint the bezel around the LCD.
pub fn draw_bezel(display: &mut SimulatorDisplay<Rgb565>) {
    display.clear(BEZEL).ok();
    Rectangle::new(LCD_ORIGIN - Point::new(2, 2), lcd_size(LCD_SCALE) + Size::new(4, 4))
        .into_styled(PrimitiveStyle::with_stroke(BLACK, 1))
        .draw(display)
        .ok();
}

/// Draw the lives LEDs under the LCD.
pub fn draw_lives(
    display: &mut SimulatorDisplay<Rgb565>,
    levels: [bool; MAX_LIVES as usize],
) {
    draw_leds(display, Point::new(LED_X, LED_Y), LED_DIAMETER, levels);
}

/// Draw the event log terminal at the bottom of the window.
pub fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &EventLog,
) {
    let prompt_style = MonoTextStyle::new(&PROFONT_9_POINT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(&PROFONT_9_POINT, LOG_TEXT_COLOR);

    Line::new(Point::new(2, LOG_DIVIDER_Y), Point::new(SCREEN_WIDTH as i32 - 2, LOG_DIVIDER_Y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for line in log.iter() {
        Text::new(">", Point::new(LOG_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(LOG_X + 10, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }
}
