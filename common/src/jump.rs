//! Jump integrator.
//!
//! A small discrete velocity model: velocity is a signed integer, and the
//! number of ticks between row steps depends on it. Fast at launch, hanging
//! near the apex, accelerating on the way down.
//!
//! # Cadence
//!
//! | Phase | Ticks per row step |
//! |-------|--------------------|
//! | Ascent (`v > 0`) | `max(1, 6 - v)` |
//! | Descent (`v < 0`) | `clamp(5 + v, 1, 4)` |
//!
//! Each step moves one row and takes [`JUMP_GRAVITY`] off the velocity.
//! Steps that would rise above [`MAX_JUMP_HEIGHT`] only burn velocity, which
//! is what produces the hang at the top.
//!
//! Crouching while airborne drops the player straight to the ground in one tick.

use crate::config::{
    ASCENT_FRAMES_BASE, DESCENT_FRAMES_BASE, DESCENT_FRAMES_MAX, JUMP_GRAVITY, JUMP_INITIAL_VELOCITY, MAX_JUMP_HEIGHT,
    PLAYER_GROUND_ROW,
};
use crate::player::{PlayerState, Posture};

/// Notable transitions produced by [`advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JumpEvent {
    /// Left the ground this tick.
    Launched,
    /// Crouch cancelled a jump.
    FastFall,
    /// Touched down at the end of a normal descent.
    Landed,
}

/// Advance the player's vertical state by one tick.
///
/// Also updates `row` and `posture` to match the new state.
pub fn advance(
    player: &mut PlayerState,
    crouch: bool,
    jump: bool,
) -> Option<JumpEvent> {
    let event = step(player, crouch, jump);

    player.row = PLAYER_GROUND_ROW - player.jump_height;
    player.posture = if crouch {
        Posture::Crouching
    } else if player.is_airborne() {
        Posture::Jumping
    } else {
        Posture::Running
    };

    event
}

fn step(
    player: &mut PlayerState,
    crouch: bool,
    jump: bool,
) -> Option<JumpEvent> {
    if crouch {
        if player.jump_height > 0 || player.jump_velocity > 0 {
            land(player);
            return Some(JumpEvent::FastFall);
        }
        return None;
    }

    let mut event = None;
    if jump && player.is_grounded() {
        player.jump_velocity = JUMP_INITIAL_VELOCITY;
        player.jump_ticks = 0;
        event = Some(JumpEvent::Launched);
    }

    if player.jump_velocity > 0 {
        ascend(player);
    } else if player.jump_velocity < 0 || player.jump_height > 0 {
        if descend(player) {
            event = Some(JumpEvent::Landed);
        }
    }

    event
}

fn ascend(player: &mut PlayerState) {
    player.jump_ticks = player.jump_ticks.saturating_add(1);
    let frames = (ASCENT_FRAMES_BASE - player.jump_velocity).max(1);
    if i16::from(player.jump_ticks) < i16::from(frames) {
        return;
    }

    player.jump_ticks = 0;
    player.jump_height = (player.jump_height + 1).min(MAX_JUMP_HEIGHT);
    player.jump_velocity -= JUMP_GRAVITY;
    if player.jump_velocity <= 0 {
        player.jump_velocity = -1;
    }
}

/// Returns `true` when the player touches down.
fn descend(player: &mut PlayerState) -> bool {
    if player.jump_velocity == 0 {
        player.jump_velocity = -1;
    }

    player.jump_ticks = player.jump_ticks.saturating_add(1);
    let frames = (DESCENT_FRAMES_BASE + player.jump_velocity).clamp(1, DESCENT_FRAMES_MAX);
    if i16::from(player.jump_ticks) < i16::from(frames) {
        return false;
    }

    player.jump_ticks = 0;
    player.jump_height = player.jump_height.saturating_sub(1);
    player.jump_velocity = (player.jump_velocity - JUMP_GRAVITY).max(-JUMP_INITIAL_VELOCITY);
    if player.jump_height == 0 {
        land(player);
        return true;
    }
    false
}

#[inline]
const fn land(player: &mut PlayerState) {
    player.jump_height = 0;
    player.jump_velocity = 0;
    player.jump_ticks = 0;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCHEDULE: [u8; 25] = [1, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 0];

    #[test]
    fn test_jump_schedule() {
        let mut player = PlayerState::new(1);
        let mut heights = [0u8; 25];
        for (tick, height) in heights.iter_mut().enumerate() {
            advance(&mut player, false, tick == 0);
            *height = player.jump_height;
        }
        assert_eq!(heights, SCHEDULE);
        assert_eq!(player.jump_velocity, 0);
        assert_eq!(player.posture, Posture::Running);
        assert_eq!(player.row, PLAYER_GROUND_ROW);
    }

    #[test]
    fn test_jump_events() {
        let mut player = PlayerState::new(1);
        assert_eq!(advance(&mut player, false, true), Some(JumpEvent::Launched));
        assert_eq!(player.posture, Posture::Jumping);
        assert_eq!(player.row, PLAYER_GROUND_ROW - 1);

        let mut landed_at = None;
        for tick in 1..30 {
            if advance(&mut player, false, false) == Some(JumpEvent::Landed) {
                landed_at = Some(tick);
                break;
            }
        }
        assert_eq!(landed_at, Some(24));
    }

    #[test]
    fn test_held_jump_does_not_double_jump() {
        let mut player = PlayerState::new(1);
        let mut launches = 0;
        for _ in 0..24 {
            if advance(&mut player, false, true) == Some(JumpEvent::Launched) {
                launches += 1;
            }
        }
        assert_eq!(launches, 1);
        assert_eq!(advance(&mut player, false, true), Some(JumpEvent::Landed));
        // Grounded again, so the held button launches once more
        assert_eq!(advance(&mut player, false, true), Some(JumpEvent::Launched));
    }

    #[test]
    fn test_fast_fall_from_any_height() {
        for ticks_in_air in 1..24 {
            let mut player = PlayerState::new(1);
            advance(&mut player, false, true);
            for _ in 1..ticks_in_air {
                advance(&mut player, false, false);
            }
            assert!(player.jump_height > 0);

            assert_eq!(advance(&mut player, true, false), Some(JumpEvent::FastFall));
            assert_eq!(player.jump_height, 0);
            assert_eq!(player.jump_velocity, 0);
            assert_eq!(player.row, PLAYER_GROUND_ROW);
            assert_eq!(player.posture, Posture::Crouching);
        }
    }

    #[test]
    fn test_crouch_suppresses_launch() {
        let mut player = PlayerState::new(1);
        assert_eq!(advance(&mut player, true, true), None);
        assert!(player.is_grounded());
        assert_eq!(player.posture, Posture::Crouching);

        assert_eq!(advance(&mut player, false, false), None);
        assert_eq!(player.posture, Posture::Running);
    }

    #[test]
    fn test_zero_velocity_in_air_falls() {
        let mut player = PlayerState::new(1);
        player.jump_height = 1;
        player.jump_velocity = 0;
        for _ in 0..4 {
            advance(&mut player, false, false);
        }
        assert!(player.is_grounded());
    }

    proptest! {
        #[test]
        fn test_height_and_velocity_invariants(
            inputs in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..400),
        ) {
            let mut player = PlayerState::new(1);
            for (crouch, jump) in inputs {
                advance(&mut player, crouch, jump);
                prop_assert!(player.jump_height <= MAX_JUMP_HEIGHT);
                prop_assert!(player.jump_velocity.abs() <= JUMP_INITIAL_VELOCITY);
                prop_assert_eq!(player.row, PLAYER_GROUND_ROW - player.jump_height);
                if player.jump_height == 0 {
                    prop_assert_eq!(player.jump_velocity, 0);
                    prop_assert_eq!(player.jump_ticks, 0);
                }
                if crouch {
                    prop_assert_eq!(player.jump_height, 0);
                    prop_assert_eq!(player.posture, Posture::Crouching);
                }
            }
        }
    }
}
