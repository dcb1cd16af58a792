//! Maps the Display Pack buttons to game input.
//!
//! - **A**: Jump (level, held jumps keep bouncing)
//! - **B**: Crouch / fast-fall (level)
//! - **X**: Cycle starting lives 1 → 4 (start screen only, edge)
//! - **Y**: Unused

use runner_common::TickInput;

use crate::button::ButtonState;

/// Raw button levels, `true` when the (active-low) pin reads low.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonLevels {
    pub a: bool,
    pub b: bool,
    pub x: bool,
}

/// Result of processing button inputs for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputResult {
    /// Debounced levels for the game.
    pub tick: TickInput,
    /// X was just pressed.
    pub cycle_lives: bool,
}

/// Debounce state for every button the game uses.
#[derive(Clone, Copy, Debug, Default)]
pub struct Buttons {
    a: ButtonState,
    b: ButtonState,
    x: ButtonState,
}

impl Buttons {
    pub const fn new() -> Self {
        Self {
            a: ButtonState::new(),
            b: ButtonState::new(),
            x: ButtonState::new(),
        }
    }

    /// Debounce `levels` sampled at `now_ms`.
    pub fn process(
        &mut self,
        levels: ButtonLevels,
        now_ms: u64,
    ) -> InputResult {
        InputResult {
            tick: TickInput {
                jump: self.a.update(levels.a, now_ms),
                crouch: self.b.update(levels.b, now_ms),
            },
            cycle_lives: self.x.just_pressed(levels.x, now_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_map_to_tick_input() {
        let mut buttons = Buttons::new();
        let result = buttons.process(ButtonLevels { a: true, b: false, x: false }, 0);
        assert_eq!(result.tick, TickInput::JUMP);
        assert!(!result.cycle_lives);

        // Held A keeps jumping
        let result = buttons.process(ButtonLevels { a: true, b: false, x: false }, 100);
        assert_eq!(result.tick, TickInput::JUMP);

        let result = buttons.process(ButtonLevels { a: false, b: true, x: false }, 200);
        assert_eq!(result.tick, TickInput::CROUCH);
    }

    #[test]
    fn test_lives_button_is_an_edge() {
        let mut buttons = Buttons::new();
        let held = ButtonLevels { x: true, ..ButtonLevels::default() };
        assert!(buttons.process(held, 0).cycle_lives);
        assert!(!buttons.process(held, 100).cycle_lives);
        assert!(!buttons.process(ButtonLevels::default(), 200).cycle_lives);
        assert!(buttons.process(held, 300).cycle_lives);
    }
}
