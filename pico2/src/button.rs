//! Button debounce handling.
//!
//! Time-based debouncing to filter contact bounce on the Display Pack
//! buttons. Time is passed in as milliseconds since boot, so the same logic
//! runs on the host in tests and on the Pico with `Instant::now().as_millis()`.

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

/// Button debounce state with time-based edge detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pressed: bool,
    last_change_ms: Option<u64>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            pressed: false,
            last_change_ms: None,
        }
    }

    /// Feed the raw level and return the debounced one.
    ///
    /// Buttons are active-low, so `is_low` means pressed. A change is only
    /// accepted once `DEBOUNCE_MS` have passed since the last accepted change.
    pub fn update(
        &mut self,
        is_low: bool,
        now_ms: u64,
    ) -> bool {
        if is_low != self.pressed {
            if let Some(last) = self.last_change_ms
                && now_ms.saturating_sub(last) < DEBOUNCE_MS
            {
                return self.pressed;
            }

            self.pressed = is_low;
            self.last_change_ms = Some(now_ms);
        }
        self.pressed
    }

    /// Returns true only on the falling edge (button just pressed).
    pub fn just_pressed(
        &mut self,
        is_low: bool,
        now_ms: u64,
    ) -> bool {
        let was_pressed = self.pressed;
        self.update(is_low, now_ms) && !was_pressed
    }

    /// Debounced level from the last update.
    #[inline]
    pub const fn is_pressed(&self) -> bool { self.pressed }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_is_immediate() {
        let mut button = ButtonState::new();
        assert!(!button.just_pressed(false, 0));
        assert!(button.just_pressed(true, 1));
        assert!(button.is_pressed());
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut button = ButtonState::new();
        assert!(button.just_pressed(true, 100));
        // Contact bounce inside the window
        assert!(button.update(false, 110));
        assert!(!button.just_pressed(true, 120));
        assert!(button.update(false, 149));
        // Release accepted after the window
        assert!(!button.update(false, 150));
    }

    #[test]
    fn test_held_button_fires_once() {
        let mut button = ButtonState::new();
        let presses = (0..20u64).filter(|t| button.just_pressed(true, t * 10)).count();
        assert_eq!(presses, 1);
    }

    #[test]
    fn test_press_release_press() {
        let mut button = ButtonState::new();
        assert!(button.just_pressed(true, 0));
        assert!(!button.just_pressed(false, 60));
        assert!(button.just_pressed(true, 120));
    }
}
