//! Player state.
//!
//! The player never moves horizontally. Its row is derived from the jump
//! height every tick, see [`crate::jump`].

use crate::config::{ANIMATION_WRAP, PLAYER_COL, PLAYER_GROUND_ROW, SCORE_DISPLAY_MAX};
use crate::sprites::{self, Footprint, Sprite};

/// Mutually exclusive player postures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Posture {
    #[default]
    Running,
    Jumping,
    Crouching,
}

/// Everything the core tracks about the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerState {
    /// Page of the top half of the sprite.
    pub row: u8,
    /// Pixel column, fixed at [`PLAYER_COL`].
    pub col: u8,
    pub posture: Posture,
    /// Drives the two-frame run and crouch animations.
    pub animation_phase: u8,
    /// Rows above the ground, `0..=MAX_JUMP_HEIGHT`.
    pub jump_height: u8,
    /// Positive while rising, negative while falling, zero on the ground.
    pub jump_velocity: i8,
    /// Ticks accumulated towards the next row step.
    pub jump_ticks: u8,
    /// Remaining ticks of the hit sprite after a non-fatal hit.
    pub hit_flash: u8,
    pub lives: u8,
    pub score: u16,
}

impl PlayerState {
    /// Grounded, running player with `lives` lives and no score.
    pub const fn new(lives: u8) -> Self {
        Self {
            row: PLAYER_GROUND_ROW,
            col: PLAYER_COL,
            posture: Posture::Running,
            animation_phase: 0,
            jump_height: 0,
            jump_velocity: 0,
            jump_ticks: 0,
            hit_flash: 0,
            lives,
            score: 0,
        }
    }

    /// On the ground and not about to leave it.
    #[inline]
    pub const fn is_grounded(&self) -> bool { self.jump_height == 0 && self.jump_velocity == 0 }

    #[inline]
    pub const fn is_airborne(&self) -> bool { !self.is_grounded() }

    #[inline]
    pub const fn is_crouching(&self) -> bool { matches!(self.posture, Posture::Crouching) }

    /// Advance the animation counter, wrapping once it passes [`ANIMATION_WRAP`].
    pub const fn advance_animation(&mut self) {
        self.animation_phase += 1;
        if self.animation_phase > ANIMATION_WRAP {
            self.animation_phase = 0;
        }
    }

    /// Sprite for the current posture and phase, or the hit sprite while flashing.
    pub const fn sprite(&self) -> Sprite {
        if self.hit_flash > 0 {
            sprites::PLAYER_HIT_SPRITE
        } else {
            sprites::player(self.posture, self.animation_phase)
        }
    }

    /// Collision and erase rectangle: always two glyphs wide.
    #[inline]
    pub const fn footprint(&self) -> Footprint { Footprint::new(self.row, self.col, 16) }

    /// Add survived obstacles to the score, saturating at [`SCORE_DISPLAY_MAX`].
    pub fn add_score(
        &mut self,
        points: u16,
    ) {
        self.score = self.score.saturating_add(points).min(SCORE_DISPLAY_MAX);
    }
}

impl Default for PlayerState {
    fn default() -> Self { Self::new(crate::config::DEFAULT_LIVES) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_grounded() {
        let player = PlayerState::new(3);
        assert!(player.is_grounded());
        assert_eq!(player.row, PLAYER_GROUND_ROW);
        assert_eq!(player.col, PLAYER_COL);
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_animation_wraps() {
        let mut player = PlayerState::new(1);
        player.animation_phase = ANIMATION_WRAP;
        player.advance_animation();
        assert_eq!(player.animation_phase, 0);
    }

    #[test]
    fn test_score_saturates() {
        let mut player = PlayerState::new(1);
        player.add_score(998);
        player.add_score(5);
        assert_eq!(player.score, SCORE_DISPLAY_MAX);
        player.add_score(u16::MAX);
        assert_eq!(player.score, SCORE_DISPLAY_MAX);
    }

    #[test]
    fn test_hit_flash_sprite() {
        let mut player = PlayerState::new(1);
        player.hit_flash = 1;
        assert_eq!(player.sprite(), sprites::PLAYER_HIT_SPRITE);
        player.hit_flash = 0;
        assert_eq!(player.sprite(), sprites::player(Posture::Running, 0));
    }
}
