//! Scrolling ground row.
//!
//! The ground is the 16-glyph [`GROUND_PATTERN`] read at an offset that
//! advances once per cadence step, so it scrolls at the same speed as the
//! obstacles. Columns covered by the player or an obstacle standing on the
//! ground are left undrawn so the ground never overwrites them.

use crate::config::{GLYPH_COLUMNS, GROUND_ROW};
use crate::sprites::{Footprint, GROUND_PATTERN};

/// Length of the repeating terrain pattern.
pub const GROUND_PATTERN_LEN: usize = GROUND_PATTERN.len();

// =============================================================================
// Column Mask
// =============================================================================

/// Set of glyph columns that the ground must not draw over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColumnMask(u16);

impl ColumnMask {
    pub const EMPTY: Self = Self(0);

    /// Mark one glyph column. Out-of-range columns are ignored.
    pub const fn with_column(
        self,
        column: usize,
    ) -> Self {
        if column < GLYPH_COLUMNS {
            Self(self.0 | (1 << column))
        } else {
            self
        }
    }

    /// Mark the columns of `footprint` if it reaches into the ground pages.
    pub const fn with_footprint(
        self,
        footprint: &Footprint,
    ) -> Self {
        if footprint.row + 1 != GROUND_ROW && footprint.row != GROUND_ROW {
            return self;
        }
        let first = footprint.first_column();
        let mut mask = self;
        let mut i = 0;
        while i < footprint.glyph_width() {
            mask = mask.with_column(first + i);
            i += 1;
        }
        mask
    }

    #[inline]
    pub const fn contains(
        self,
        column: usize,
    ) -> bool {
        column < GLYPH_COLUMNS && self.0 & (1 << column) != 0
    }
}

// =============================================================================
// Ground Scroller
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroundScroller {
    offset: u8,
}

impl GroundScroller {
    pub const fn new() -> Self { Self { offset: 0 } }

    #[inline]
    pub const fn offset(&self) -> u8 { self.offset }

    /// Scroll one glyph column.
    pub const fn tick(&mut self) { self.offset = (self.offset + 1) % GROUND_PATTERN_LEN as u8; }

    /// Glyph shown at glyph column `column`.
    #[inline]
    pub const fn glyph_at(
        &self,
        column: usize,
    ) -> u8 {
        GROUND_PATTERN[(column + self.offset as usize) % GROUND_PATTERN_LEN]
    }

    /// Glyphs for the whole ground row. Excluded columns are `None`.
    pub fn render_row(
        &self,
        excluded: ColumnMask,
    ) -> [Option<u8>; GLYPH_COLUMNS] {
        core::array::from_fn(|column| (!excluded.contains(column)).then(|| self.glyph_at(column)))
    }
}

// =============================================================================
// Startup Animation
// =============================================================================

/// One step of the startup animation: the ground has reached `column`,
/// showing `glyph` there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroundEntryStep {
    pub column: usize,
    pub glyph: u8,
}

/// The ground rolling in from the right edge, one glyph column per step.
///
/// The front end draws each step and waits
/// [`GROUND_ENTRY_STEP_MS`](crate::config::GROUND_ENTRY_STEP_MS) in between,
/// before the fixed-rate loop starts.
#[derive(Clone, Debug)]
pub struct GroundEntry {
    remaining: usize,
}

impl GroundEntry {
    pub const fn new() -> Self {
        Self {
            remaining: GLYPH_COLUMNS,
        }
    }
}

impl Default for GroundEntry {
    fn default() -> Self { Self::new() }
}

impl Iterator for GroundEntry {
    type Item = GroundEntryStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let column = self.remaining;
        Some(GroundEntryStep {
            column,
            glyph: GROUND_PATTERN[column],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl ExactSizeIterator for GroundEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PLAYER_COL, PLAYER_GROUND_ROW};

    #[test]
    fn test_offset_wraps() {
        let mut ground = GroundScroller::new();
        for _ in 0..GROUND_PATTERN_LEN {
            ground.tick();
        }
        assert_eq!(ground.offset(), 0);
        ground.tick();
        assert_eq!(ground.offset(), 1);
        assert_eq!(ground.glyph_at(0), GROUND_PATTERN[1]);
        assert_eq!(ground.glyph_at(15), GROUND_PATTERN[0]);
    }

    #[test]
    fn test_render_row_skips_excluded() {
        let ground = GroundScroller::new();
        let mask = ColumnMask::EMPTY.with_column(1).with_column(2);
        let row = ground.render_row(mask);
        assert_eq!(row[0], Some(GROUND_PATTERN[0]));
        assert_eq!(row[1], None);
        assert_eq!(row[2], None);
        assert_eq!(row[3], Some(GROUND_PATTERN[3]));
    }

    #[test]
    fn test_mask_from_footprints() {
        let player = Footprint::new(PLAYER_GROUND_ROW, PLAYER_COL, 16);
        let mask = ColumnMask::EMPTY.with_footprint(&player);
        assert!(mask.contains(1));
        assert!(mask.contains(2));
        assert!(!mask.contains(3));

        // Airborne player and high birds leave the ground alone
        let airborne = Footprint::new(PLAYER_GROUND_ROW - 1, PLAYER_COL, 16);
        assert_eq!(ColumnMask::EMPTY.with_footprint(&airborne), ColumnMask::EMPTY);

        let small_cactus = Footprint::new(PLAYER_GROUND_ROW, 120, 8);
        let mask = ColumnMask::EMPTY.with_footprint(&small_cactus);
        assert!(mask.contains(15));
        assert!(!mask.contains(14));
    }

    #[test]
    fn test_mask_ignores_out_of_range() {
        assert_eq!(ColumnMask::EMPTY.with_column(16), ColumnMask::EMPTY);
        assert!(!ColumnMask::EMPTY.contains(40));
    }

    #[test]
    fn test_ground_entry_runs_right_to_left() {
        let steps: Vec<_> = GroundEntry::new().collect();
        assert_eq!(steps.len(), GLYPH_COLUMNS);
        assert_eq!(steps[0].column, 15);
        assert_eq!(steps[15].column, 0);
        assert!(steps.iter().all(|s| s.glyph == GROUND_PATTERN[s.column]));
    }
}
