//! Panel geometry and where the emulated LCD sits on it.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! The LCD window is fixed at compile time, so the framebuffers are sized to
//! the window instead of the whole panel and the ST7789 address window is set
//! once during init. Only the window is ever flushed.

use runner_common::config::{LCD_HEIGHT, LCD_WIDTH};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni PIM715: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Bytes per RGB565 pixel.
pub const BYTES_PER_PIXEL: usize = 2;

// =============================================================================
// LCD Window
// =============================================================================

/// Each LCD pixel becomes a `LCD_SCALE` x `LCD_SCALE` block.
pub const LCD_SCALE: u32 = 2;

/// Width of the LCD window in panel pixels.
pub const WINDOW_WIDTH: u32 = LCD_WIDTH * LCD_SCALE;

/// Height of the LCD window in panel pixels.
pub const WINDOW_HEIGHT: u32 = LCD_HEIGHT * LCD_SCALE;

/// Left edge of the LCD window (centered).
pub const WINDOW_X: u32 = (SCREEN_WIDTH - WINDOW_WIDTH) / 2;

/// Top edge of the LCD window (centered).
pub const WINDOW_Y: u32 = (SCREEN_HEIGHT - WINDOW_HEIGHT) / 2;

/// Framebuffer size for the LCD window.
pub const WINDOW_BUFFER_SIZE: usize = WINDOW_WIDTH as usize * WINDOW_HEIGHT as usize * BYTES_PER_PIXEL;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_fits_panel() {
        assert!(WINDOW_X + WINDOW_WIDTH <= SCREEN_WIDTH);
        assert!(WINDOW_Y + WINDOW_HEIGHT <= SCREEN_HEIGHT);
        assert_eq!((WINDOW_X, WINDOW_Y), (32, 56));
    }

    #[test]
    fn test_buffer_size() {
        assert_eq!(WINDOW_BUFFER_SIZE, 256 * 128 * 2);
        // clear_buffer writes 32-bit words
        assert_eq!(WINDOW_BUFFER_SIZE % 4, 0);
    }
}
