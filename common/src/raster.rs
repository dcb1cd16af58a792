//! Rasterizes a [`GlyphFrame`] onto any embedded-graphics target.
//!
//! The frame is drawn with `fill_contiguous`, one page band at a time, so
//! targets with a native area fill (like the ST7789 framebuffer) get a single
//! write per band. `scale` blows each LCD pixel up to a `scale` x `scale` block.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};

use crate::colors::{LCD_OFF, LCD_ON, LED_OFF, RED, WHITE};
use crate::config::{LCD_HEIGHT, LCD_WIDTH, MAX_LIVES, PAGE_COUNT, PAGE_HEIGHT};
use crate::frame::GlyphFrame;

/// Mask selecting every page.
pub const ALL_PAGES: u8 = u8::MAX;

/// Size of the emulated LCD on screen.
#[inline]
pub const fn lcd_size(scale: u32) -> Size { Size::new(LCD_WIDTH * scale, LCD_HEIGHT * scale) }

/// Draw the whole frame at `origin`.
pub fn draw_frame<D>(
    frame: &GlyphFrame,
    display: &mut D,
    origin: Point,
    scale: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_pages(frame, display, origin, scale, ALL_PAGES)
}

/// Draw only the pages set in `pages` (bit `n` = page `n`).
pub fn draw_pages<D>(
    frame: &GlyphFrame,
    display: &mut D,
    origin: Point,
    scale: u32,
    pages: u8,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let scale = scale.max(1);
    let band = Size::new(LCD_WIDTH * scale, PAGE_HEIGHT * scale);

    for page in (0..PAGE_COUNT as u32).filter(|page| pages & (1 << *page) != 0) {
        let top = origin + Point::new(0, (page * PAGE_HEIGHT * scale) as i32);
        let first_y = page * PAGE_HEIGHT;
        let colors = (0..band.height).flat_map(move |dy| {
            let bits = frame.row_bits(first_y + dy / scale);
            (0..band.width).map(move |dx| {
                let x = dx / scale;
                if bits[(x / 8) as usize] & (0x80 >> (x % 8)) != 0 {
                    LCD_ON
                } else {
                    LCD_OFF
                }
            })
        });
        display.fill_contiguous(&Rectangle::new(top, band), colors)?;
    }
    Ok(())
}

/// Draw the lives LEDs as a row of circles starting at `origin`.
pub fn draw_leds<D>(
    display: &mut D,
    origin: Point,
    diameter: u32,
    levels: [bool; MAX_LIVES as usize],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let spacing = diameter as i32 + diameter as i32 / 2;
    for (i, lit) in levels.iter().enumerate() {
        let style = if *lit {
            PrimitiveStyleBuilder::new()
                .fill_color(RED)
                .stroke_color(WHITE)
                .stroke_width(1)
                .build()
        } else {
            PrimitiveStyle::with_fill(LED_OFF)
        };
        Circle::new(origin + Point::new(i as i32 * spacing, 0), diameter)
            .into_styled(style)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::DisplaySink;
    use crate::sprites::GROUND_LINE;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_lcd_size() {
        assert_eq!(lcd_size(1), Size::new(128, 64));
        assert_eq!(lcd_size(2), Size::new(256, 128));
    }

    #[test]
    fn test_draw_single_page() {
        let mut frame = GlyphFrame::new();
        frame.draw(0, 0, &[GROUND_LINE]);

        // Page 1 holds the lower half of the line glyph; its first row is solid
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_out_of_bounds_drawing(true);
        draw_pages(&frame, &mut display, Point::zero(), 1, 1 << 1).unwrap();

        assert_eq!(display.get_pixel(Point::new(0, 8)), Some(LCD_ON));
        assert_eq!(display.get_pixel(Point::new(7, 8)), Some(LCD_ON));
        assert_eq!(display.get_pixel(Point::new(8, 8)), Some(LCD_OFF));
        assert_eq!(display.get_pixel(Point::new(0, 9)), Some(LCD_OFF));
        // Page 0 was not requested
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_draw_leds() {
        let mut display = MockDisplay::<Rgb565>::new();
        draw_leds(&mut display, Point::zero(), 8, [true, false, false, false]);
        assert_eq!(display.get_pixel(Point::new(4, 4)), Some(RED));
        assert_eq!(display.get_pixel(Point::new(16, 4)), Some(LED_OFF));
    }
}
