//! Firmware configuration.
//!
//! - `layout`: Panel dimensions and the LCD window
//! - Starting lives, selected with the `four-lives` feature

pub mod layout;

use runner_common::GameConfig;
use runner_common::config::{DEFAULT_LIVES, MAX_LIVES};

// Re-export layout constants at config level for convenience
pub use layout::{
    LCD_SCALE,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    WINDOW_BUFFER_SIZE,
    WINDOW_HEIGHT,
    WINDOW_WIDTH,
    WINDOW_X,
    WINDOW_Y,
};

/// Lives a run starts with.
pub const STARTING_LIVES: u8 = if cfg!(feature = "four-lives") { MAX_LIVES } else { DEFAULT_LIVES };

/// Game configuration the firmware boots with.
pub const GAME_CONFIG: GameConfig = GameConfig::DEFAULT.with_lives(STARTING_LIVES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_config_lives() {
        assert_eq!(GAME_CONFIG.lives(), STARTING_LIVES);
        assert!((1..=MAX_LIVES).contains(&STARTING_LIVES));
    }
}
