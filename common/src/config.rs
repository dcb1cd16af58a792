//! Game and display configuration.
//!
//! Everything the core needs is a compile-time constant, except the few knobs
//! that a front end may change between runs, which live in [`GameConfig`].
//!
//! # Coordinate System
//!
//! The LCD is 128x64 pixels organised as 8 pages of 8 pixel rows. Every glyph
//! is 8x16, so a glyph drawn at page `r` covers page `r` and page `r + 1`.
//! "Row" throughout the core means page. Columns are pixel columns, always a
//! multiple of [`COLUMN_STRIDE`].

// =============================================================================
// Display Geometry
// =============================================================================

/// LCD width in pixels.
pub const LCD_WIDTH: u32 = 128;

/// LCD height in pixels.
pub const LCD_HEIGHT: u32 = 64;

/// Number of 8-pixel pages (rows) on the LCD.
pub const PAGE_COUNT: usize = 8;

/// Height of one page in pixels.
pub const PAGE_HEIGHT: u32 = 8;

/// Width of one glyph in pixels. Column addresses are multiples of this.
pub const COLUMN_STRIDE: u8 = 8;

/// Number of glyph-wide columns across the LCD (128 / 8).
pub const GLYPH_COLUMNS: usize = 16;

/// Highest valid page index.
pub const MAX_ROW: u8 = (PAGE_COUNT - 1) as u8;

/// Highest valid glyph-aligned column.
pub const MAX_COL: u8 = (LCD_WIDTH as u8) - COLUMN_STRIDE;

// =============================================================================
// Playfield Layout
// =============================================================================

/// Page holding the ground line (bottom page of the LCD).
pub const GROUND_PAGE: u8 = 7;

/// Pages between the ground page and the resting player.
pub const GROUND_OFFSET: u8 = 2;

/// Row the ground glyphs are drawn at. The line pixels sit in the lower half,
/// which lands on [`GROUND_PAGE`].
pub const GROUND_ROW: u8 = GROUND_PAGE - 1;

/// Row of the player (and of ground obstacles) when standing on the ground.
pub const PLAYER_GROUND_ROW: u8 = GROUND_PAGE - GROUND_OFFSET;

/// Fixed column of the player.
pub const PLAYER_COL: u8 = 8;

/// Column where new obstacles appear (rightmost glyph column).
pub const SPAWN_COL: u8 = MAX_COL;

/// Flight row of high birds. Jumping into them is what gets you hit.
pub const BIRD_HIGH_ROW: u8 = 3;

/// Flight row of low birds. Only crouching avoids them.
pub const BIRD_LOW_ROW: u8 = 5;

/// Score area: up to three digits in row 0, right-aligned.
pub const SCORE_ROW: u8 = 0;

/// Number of decimal digits the score area can show.
pub const SCORE_DIGITS: usize = 3;

/// Largest score the display can show.
pub const SCORE_DISPLAY_MAX: u16 = 999;

/// Row of the START / END banners.
pub const BANNER_ROW: u8 = 3;

/// Column of the five-glyph "START" banner.
pub const START_BANNER_COL: u8 = 40;

/// Column of the three-glyph "END" banner.
pub const END_BANNER_COL: u8 = 48;

// =============================================================================
// Jump Physics
// =============================================================================

/// Maximum jump height in rows above the ground.
pub const MAX_JUMP_HEIGHT: u8 = 3;

/// Upward velocity at launch. Higher means a faster start.
pub const JUMP_INITIAL_VELOCITY: i8 = 6;

/// Velocity lost (ascending) or gained (descending) per row step.
pub const JUMP_GRAVITY: i8 = 1;

/// Ascent cadence base: ticks per row step are `max(1, base - velocity)`.
pub const ASCENT_FRAMES_BASE: i8 = 6;

/// Descent cadence base: ticks per row step are `clamp(base + velocity, 1, 4)`.
pub const DESCENT_FRAMES_BASE: i8 = 5;

/// Slowest descent step, in ticks.
pub const DESCENT_FRAMES_MAX: i8 = 4;

// =============================================================================
// Speed / Cadence
// =============================================================================

/// Initial ticks between obstacle moves (higher = slower).
pub const SPEED_INITIAL: u8 = 6;

/// Fastest allowed cadence.
pub const SPEED_MIN: u8 = 3;

/// Running ticks between speed increases.
pub const SPEED_RAMP_TICKS: u16 = 160;

// =============================================================================
// Obstacles & Spawning
// =============================================================================

/// Capacity of the obstacle slot table.
pub const MAX_OBSTACLES: usize = 4;

/// Minimum ticks between spawn attempts.
pub const SPAWN_MIN_TICKS: u16 = 30;

/// Maximum ticks between spawn attempts.
pub const SPAWN_MAX_TICKS: u16 = 100;

// =============================================================================
// Lives & Timing
// =============================================================================

/// Lives a run starts with unless configured otherwise.
pub const DEFAULT_LIVES: u8 = 1;

/// Largest number of lives (one LED each).
pub const MAX_LIVES: u8 = 4;

/// Animation counters wrap to zero once they exceed this.
pub const ANIMATION_WRAP: u8 = 100;

/// Tick period of the fixed-rate game loop (~250 ticks per second).
pub const TICK_PERIOD_MS: u64 = 4;

/// Ticks the hit sprite stays up after a non-fatal hit (~0.5 s).
pub const HIT_FLASH_TICKS: u8 = 125;

/// Ticks the END screen ignores input before a restart is accepted (~1 s).
pub const GAME_OVER_LOCKOUT_TICKS: u16 = 250;

/// Delay between steps of the startup ground animation.
pub const GROUND_ENTRY_STEP_MS: u64 = 30;

/// Seed used when the front end does not provide one.
pub const DEFAULT_SEED: u32 = 0x2545_F491;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Per-run settings chosen by the front end.
///
/// A restart always reuses the same `GameConfig`, so two runs from the same
/// config are tick-for-tick identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Lives at the start of a run (clamped to `1..=MAX_LIVES`).
    pub starting_lives: u8,
    /// Minimum ticks between spawns.
    pub spawn_min_ticks: u16,
    /// Maximum ticks between spawns.
    pub spawn_max_ticks: u16,
    /// Seed for the spawn PRNG. Zero is remapped, xorshift cannot leave zero.
    pub seed: u32,
}

impl GameConfig {
    /// Defaults taken from the constants above.
    pub const DEFAULT: Self = Self {
        starting_lives: DEFAULT_LIVES,
        spawn_min_ticks: SPAWN_MIN_TICKS,
        spawn_max_ticks: SPAWN_MAX_TICKS,
        seed: DEFAULT_SEED,
    };

    /// Copy of this config with a different seed.
    pub const fn with_seed(
        self,
        seed: u32,
    ) -> Self {
        Self { seed, ..self }
    }

    /// Copy of this config with a different number of starting lives.
    pub const fn with_lives(
        self,
        lives: u8,
    ) -> Self {
        Self {
            starting_lives: clamp_lives(lives),
            ..self
        }
    }

    /// Starting lives after clamping.
    #[inline]
    pub const fn lives(&self) -> u8 { clamp_lives(self.starting_lives) }

    /// Copy of this config with the next starting-lives choice, wrapping
    /// from `MAX_LIVES` back to 1.
    pub const fn cycle_lives(self) -> Self {
        let lives = self.lives();
        self.with_lives(if lives >= MAX_LIVES { 1 } else { lives + 1 })
    }

    /// Spawn window with `min <= max` and `min >= 1` enforced.
    pub const fn spawn_window(&self) -> (u16, u16) {
        let min = if self.spawn_min_ticks == 0 { 1 } else { self.spawn_min_ticks };
        let max = if self.spawn_max_ticks < min { min } else { self.spawn_max_ticks };
        (min, max)
    }
}

impl Default for GameConfig {
    fn default() -> Self { Self::DEFAULT }
}

const fn clamp_lives(lives: u8) -> u8 {
    if lives == 0 {
        1
    } else if lives > MAX_LIVES {
        MAX_LIVES
    } else {
        lives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_glyph_aligned() {
        assert_eq!(PLAYER_COL % COLUMN_STRIDE, 0);
        assert_eq!(SPAWN_COL % COLUMN_STRIDE, 0);
        assert_eq!(START_BANNER_COL % COLUMN_STRIDE, 0);
        assert_eq!(END_BANNER_COL % COLUMN_STRIDE, 0);
        assert_eq!(GLYPH_COLUMNS * COLUMN_STRIDE as usize, LCD_WIDTH as usize);
    }

    #[test]
    fn test_rows() {
        assert_eq!(GROUND_ROW, 6);
        assert_eq!(PLAYER_GROUND_ROW, 5);
        assert!(PLAYER_GROUND_ROW >= MAX_JUMP_HEIGHT);
    }

    #[test]
    fn test_lives_clamped() {
        assert_eq!(GameConfig::DEFAULT.with_lives(0).lives(), 1);
        assert_eq!(GameConfig::DEFAULT.with_lives(9).lives(), MAX_LIVES);
        assert_eq!(GameConfig::DEFAULT.with_lives(3).lives(), 3);
    }

    #[test]
    fn test_cycle_lives_wraps() {
        let seen: Vec<u8> = core::iter::successors(Some(GameConfig::DEFAULT), |config| Some(config.cycle_lives()))
            .take(6)
            .map(|config| config.lives())
            .collect();
        assert_eq!(seen, [1, 2, 3, 4, 1, 2]);
    }

    #[test]
    fn test_spawn_window_sanitised() {
        let config = GameConfig {
            spawn_min_ticks: 0,
            spawn_max_ticks: 0,
            ..GameConfig::DEFAULT
        };
        assert_eq!(config.spawn_window(), (1, 1));
        assert_eq!(GameConfig::DEFAULT.spawn_window(), (SPAWN_MIN_TICKS, SPAWN_MAX_TICKS));
    }
}
