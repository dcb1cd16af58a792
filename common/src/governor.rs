//! Speed ramp and score formatting.
//!
//! The cadence is the number of ticks between obstacle moves. It starts at
//! [`SPEED_INITIAL`] and tightens by one every [`SPEED_RAMP_TICKS`] running
//! ticks until it hits [`SPEED_MIN`]. Nothing but a restart slows it down.

use heapless::Vec;

use crate::config::{COLUMN_STRIDE, LCD_WIDTH, SCORE_DIGITS, SCORE_DISPLAY_MAX, SPEED_INITIAL, SPEED_MIN, SPEED_RAMP_TICKS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedGovernor {
    /// Ticks per cadence step.
    pub current_speed: u8,
    /// Ticks since the last ramp step.
    pub speed_timer: u16,
    /// Ticks since the last cadence step.
    pub cadence_ticks: u8,
}

impl SpeedGovernor {
    pub const fn new() -> Self {
        Self {
            current_speed: SPEED_INITIAL,
            speed_timer: 0,
            cadence_ticks: 0,
        }
    }

    /// Count one running tick. Returns the new speed when it ramps.
    pub fn tick(&mut self) -> Option<u8> {
        self.speed_timer = self.speed_timer.saturating_add(1);
        if self.speed_timer < SPEED_RAMP_TICKS {
            return None;
        }
        self.speed_timer = 0;
        if self.current_speed > SPEED_MIN {
            self.current_speed -= 1;
            Some(self.current_speed)
        } else {
            None
        }
    }

    /// Count one tick towards the next cadence step. Returns `true` when
    /// obstacles and ground should move this tick.
    pub fn cadence_elapsed(&mut self) -> bool {
        self.cadence_ticks = self.cadence_ticks.saturating_add(1);
        if self.cadence_ticks >= self.current_speed {
            self.cadence_ticks = 0;
            true
        } else {
            false
        }
    }
}

impl Default for SpeedGovernor {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Score Formatting
// =============================================================================

/// Decimal digits of `score`, most significant first, clamped to
/// [`SCORE_DISPLAY_MAX`].
pub fn score_digits(score: u16) -> Vec<u8, SCORE_DIGITS> {
    let mut value = score.min(SCORE_DISPLAY_MAX);
    let mut reversed = [0u8; SCORE_DIGITS];
    let mut len = 0;
    loop {
        reversed[len] = (value % 10) as u8;
        len += 1;
        value /= 10;
        if value == 0 || len == SCORE_DIGITS {
            break;
        }
    }
    reversed[..len].iter().rev().copied().collect()
}

/// Column of the first digit so that `len` digits end at the right edge.
#[inline]
pub const fn score_column(len: usize) -> u8 { LCD_WIDTH as u8 - (len as u8) * COLUMN_STRIDE }

/// Column where the cleared score area starts.
pub const SCORE_AREA_COL: u8 = score_column(SCORE_DIGITS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_ramp() {
        let mut governor = SpeedGovernor::new();
        for _ in 0..SPEED_RAMP_TICKS - 1 {
            assert_eq!(governor.tick(), None);
        }
        assert_eq!(governor.tick(), Some(5));
        assert_eq!(governor.current_speed, 5);
    }

    #[test]
    fn test_speed_floor() {
        let mut governor = SpeedGovernor::new();
        let mut ramps = 0;
        for _ in 0..SPEED_RAMP_TICKS * 10 {
            if governor.tick().is_some() {
                ramps += 1;
            }
        }
        assert_eq!(ramps, SPEED_INITIAL - SPEED_MIN);
        assert_eq!(governor.current_speed, SPEED_MIN);
    }

    #[test]
    fn test_cadence_follows_speed() {
        let mut governor = SpeedGovernor::new();
        let steps = (0..60).filter(|_| governor.cadence_elapsed()).count();
        assert_eq!(steps, 10);

        governor.current_speed = SPEED_MIN;
        governor.cadence_ticks = 0;
        let steps = (0..60).filter(|_| governor.cadence_elapsed()).count();
        assert_eq!(steps, 20);
    }

    #[test]
    fn test_score_digits() {
        assert_eq!(score_digits(0).as_slice(), &[0]);
        assert_eq!(score_digits(7).as_slice(), &[7]);
        assert_eq!(score_digits(42).as_slice(), &[4, 2]);
        assert_eq!(score_digits(305).as_slice(), &[3, 0, 5]);
        assert_eq!(score_digits(1234).as_slice(), &[9, 9, 9]);
    }

    #[test]
    fn test_score_right_aligned() {
        assert_eq!(score_column(1), 120);
        assert_eq!(score_column(3), 104);
        assert_eq!(SCORE_AREA_COL, 104);
    }
}
