//! Color constants for the front ends.
//!
//! The game is monochrome. These colors only decide how the emulated LCD and
//! the lives LEDs look on an RGB565 screen (the ST7789 panel or the
//! simulator window).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

pub const BLACK: Rgb565 = Rgb565::BLACK;

pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Lit lives LED.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// LCD Emulation
// =============================================================================

/// Lit LCD pixel: dark blue-gray, like an STN panel.
pub const LCD_ON: Rgb565 = Rgb565::new(4, 10, 8);

/// Unlit LCD pixel: pale yellow-green background.
pub const LCD_OFF: Rgb565 = Rgb565::new(22, 50, 14);

/// Bezel around the emulated LCD.
pub const BEZEL: Rgb565 = Rgb565::new(6, 12, 6);

/// Unlit lives LED.
pub const LED_OFF: Rgb565 = Rgb565::new(8, 4, 4);

/// Dim text for the event log.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);
