//! Display and indicator contracts, and an in-memory paged glyph frame.
//!
//! The core never touches pixels. It asks a [`DisplaySink`] to put glyphs at
//! a (row, column) address, the way a paged character LCD is driven, and
//! tells a [`LivesIndicator`] how many lives are left.
//!
//! [`GlyphFrame`] emulates the LCD's display RAM: every page of every glyph
//! column remembers which half of which glyph was last written there. The
//! front ends rasterize it with [`crate::raster`].
//!
//! # Addressing
//!
//! A glyph is 8 pixels wide and 16 tall. Written at row `r`, its upper half
//! lands on page `r` and its lower half on page `r + 1`. Writes are clipped
//! at the bottom and right edges.

use crate::config::{COLUMN_STRIDE, GLYPH_COLUMNS, MAX_LIVES, MAX_ROW, PAGE_COUNT, PAGE_HEIGHT};
use crate::glyphs;

// =============================================================================
// Contracts
// =============================================================================

/// Anything that can show glyphs at page/column addresses.
pub trait DisplaySink {
    /// Write `glyphs` left to right starting at `row` (page, `0..=7`) and
    /// pixel `column` (a multiple of 8, `0..=127`).
    fn draw(
        &mut self,
        row: u8,
        column: u8,
        glyphs: &[u8],
    );
}

/// Anything that can show how many lives are left.
pub trait LivesIndicator {
    fn set_lives(
        &mut self,
        count: u8,
    );
}

/// LED states for `count` lives: LED `i` is lit when `count > i`.
pub const fn lives_led_levels(count: u8) -> [bool; MAX_LIVES as usize] {
    let mut levels = [false; MAX_LIVES as usize];
    let mut i = 0;
    while i < levels.len() {
        levels[i] = count > i as u8;
        i += 1;
    }
    levels
}

impl LivesIndicator for [bool; MAX_LIVES as usize] {
    fn set_lives(
        &mut self,
        count: u8,
    ) {
        *self = lives_led_levels(count);
    }
}

// =============================================================================
// Glyph Frame
// =============================================================================

/// Which half of a glyph a page holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Half {
    Upper,
    Lower,
}

impl Half {
    /// First bitmap row of this half.
    #[inline]
    const fn first_row(self) -> usize {
        match self {
            Self::Upper => 0,
            Self::Lower => PAGE_HEIGHT as usize,
        }
    }
}

/// Content of one page of one glyph column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub glyph: u8,
    pub half: Half,
}

/// In-memory copy of the LCD's paged display RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphFrame {
    cells: [[Option<Cell>; GLYPH_COLUMNS]; PAGE_COUNT],
    /// One bit per page changed since the last [`Self::take_dirty`].
    dirty: u8,
}

impl GlyphFrame {
    /// A cleared frame (all pixels off).
    pub const fn new() -> Self {
        Self {
            cells: [[None; GLYPH_COLUMNS]; PAGE_COUNT],
            dirty: 0,
        }
    }

    /// What was last written to `page` at glyph column `column`.
    pub fn cell(
        &self,
        page: usize,
        column: usize,
    ) -> Option<Cell> {
        self.cells.get(page).and_then(|row| row.get(column)).copied().flatten()
    }

    /// Glyph whose upper half sits at `row`, pixel column `column`.
    pub fn glyph_at(
        &self,
        row: u8,
        column: u8,
    ) -> Option<u8> {
        match self.cell(row as usize, (column / COLUMN_STRIDE) as usize) {
            Some(Cell { glyph, half: Half::Upper }) => Some(glyph),
            _ => None,
        }
    }

    /// Whether pixel (`x`, `y`) is on.
    pub fn pixel(
        &self,
        x: u32,
        y: u32,
    ) -> bool {
        let page = (y / PAGE_HEIGHT) as usize;
        let column = (x / u32::from(COLUMN_STRIDE)) as usize;
        let Some(cell) = self.cell(page, column) else {
            return false;
        };
        let bits = glyphs::glyph_row(cell.glyph, cell.half.first_row() + (y % PAGE_HEIGHT) as usize);
        bits & (0x80 >> (x % u32::from(COLUMN_STRIDE))) != 0
    }

    /// Pixel row `y` as one byte per glyph column, leftmost pixel in the MSB.
    pub fn row_bits(
        &self,
        y: u32,
    ) -> [u8; GLYPH_COLUMNS] {
        let page = (y / PAGE_HEIGHT) as usize;
        let offset = (y % PAGE_HEIGHT) as usize;
        core::array::from_fn(|column| match self.cell(page, column) {
            Some(cell) => glyphs::glyph_row(cell.glyph, cell.half.first_row() + offset),
            None => 0,
        })
    }

    /// Pages changed since the last call, as a bit mask. Clears the mask.
    pub fn take_dirty(&mut self) -> u8 { core::mem::take(&mut self.dirty) }

    fn write(
        &mut self,
        page: usize,
        column: usize,
        cell: Cell,
    ) {
        if let Some(slot) = self.cells.get_mut(page).and_then(|row| row.get_mut(column))
            && *slot != Some(cell)
        {
            *slot = Some(cell);
            self.dirty |= 1 << page;
        }
    }
}

impl Default for GlyphFrame {
    fn default() -> Self { Self::new() }
}

impl DisplaySink for GlyphFrame {
    fn draw(
        &mut self,
        row: u8,
        column: u8,
        glyphs: &[u8],
    ) {
        debug_assert!(row <= MAX_ROW, "row {row} out of range");
        debug_assert!(column % COLUMN_STRIDE == 0, "column {column} not glyph aligned");
        if row > MAX_ROW {
            return;
        }

        let page = row as usize;
        let first = (column / COLUMN_STRIDE) as usize;
        for (i, &glyph) in glyphs.iter().enumerate() {
            let column = first + i;
            if column >= GLYPH_COLUMNS {
                break;
            }
            self.write(page, column, Cell { glyph, half: Half::Upper });
            self.write(page + 1, column, Cell { glyph, half: Half::Lower });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::{BLANK, GROUND_LINE};

    #[test]
    fn test_led_levels() {
        assert_eq!(lives_led_levels(0), [false; 4]);
        assert_eq!(lives_led_levels(1), [true, false, false, false]);
        assert_eq!(lives_led_levels(3), [true, true, true, false]);
        assert_eq!(lives_led_levels(9), [true; 4]);

        let mut leds = [false; 4];
        leds.set_lives(2);
        assert_eq!(leds, [true, true, false, false]);
    }

    #[test]
    fn test_draw_covers_two_pages() {
        let mut frame = GlyphFrame::new();
        frame.draw(3, 16, &[5, 6]);
        assert_eq!(frame.cell(3, 2), Some(Cell { glyph: 5, half: Half::Upper }));
        assert_eq!(frame.cell(4, 2), Some(Cell { glyph: 5, half: Half::Lower }));
        assert_eq!(frame.cell(3, 3), Some(Cell { glyph: 6, half: Half::Upper }));
        assert_eq!(frame.glyph_at(3, 24), Some(6));
        assert_eq!(frame.glyph_at(4, 24), None);
        assert_eq!(frame.take_dirty(), 0b0001_1000);
        assert_eq!(frame.take_dirty(), 0);
    }

    #[test]
    fn test_rewrite_is_not_dirty() {
        let mut frame = GlyphFrame::new();
        frame.draw(0, 0, &[GROUND_LINE]);
        frame.take_dirty();
        frame.draw(0, 0, &[GROUND_LINE]);
        assert_eq!(frame.take_dirty(), 0);
        frame.draw(0, 0, &[BLANK]);
        assert_eq!(frame.take_dirty(), 0b0000_0011);
    }

    #[test]
    fn test_row_bits_match_pixels() {
        let mut frame = GlyphFrame::new();
        frame.draw(2, 32, &[8, 9]);
        for y in 16..32 {
            let bits = frame.row_bits(y);
            for x in 0..128 {
                let lit = bits[(x / 8) as usize] & (0x80 >> (x % 8)) != 0;
                assert_eq!(lit, frame.pixel(x, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_draw_clips_bottom_and_right() {
        let mut frame = GlyphFrame::new();
        frame.draw(7, 120, &[1, 2, 3]);
        assert_eq!(frame.glyph_at(7, 120), Some(1));
        assert_eq!(frame.take_dirty(), 0b1000_0000);
    }

    #[test]
    fn test_later_write_wins() {
        let mut frame = GlyphFrame::new();
        frame.draw(5, 0, &[BLANK]);
        frame.draw(6, 0, &[GROUND_LINE]);
        assert_eq!(frame.cell(5, 0), Some(Cell { glyph: BLANK, half: Half::Upper }));
        assert_eq!(frame.cell(6, 0), Some(Cell { glyph: GROUND_LINE, half: Half::Upper }));
        assert_eq!(frame.cell(7, 0), Some(Cell { glyph: GROUND_LINE, half: Half::Lower }));
    }

    #[test]
    fn test_pixels() {
        let mut frame = GlyphFrame::new();
        assert!(!frame.pixel(0, 0));
        frame.draw(0, 0, &[GROUND_LINE]);
        // Line glyph: solid row in the lower half
        let lit = (0..16).filter(|&y| frame.pixel(0, y)).count();
        assert!(lit > 0);
        frame.draw(0, 0, &[BLANK]);
        assert!((0..16).all(|y| (0..8).all(|x| !frame.pixel(x, y))));
    }
}
