//! Lives LEDs.
//!
//! Four active-high LEDs on GP2..GP5 show the lives left, LED `i` lit while
//! more than `i` lives remain.

use runner_common::LivesIndicator;
use runner_common::config::MAX_LIVES;
use runner_common::frame::lives_led_levels;

/// An output that can switch one LED.
pub trait LedPin {
    fn set_lit(
        &mut self,
        lit: bool,
    );
}

#[cfg(target_arch = "arm")]
impl LedPin for embassy_rp::gpio::Output<'_> {
    #[inline]
    fn set_lit(
        &mut self,
        lit: bool,
    ) {
        self.set_level(embassy_rp::gpio::Level::from(lit));
    }
}

/// The row of lives LEDs.
pub struct LivesLeds<P> {
    pins: [P; MAX_LIVES as usize],
    count: u8,
}

impl<P: LedPin> LivesLeds<P> {
    /// Take ownership of the pins and switch them all off.
    pub fn new(mut pins: [P; MAX_LIVES as usize]) -> Self {
        for pin in &mut pins {
            pin.set_lit(false);
        }
        Self { pins, count: 0 }
    }

    /// Lives currently shown.
    #[inline]
    pub const fn count(&self) -> u8 { self.count }
}

impl<P: LedPin> LivesIndicator for LivesLeds<P> {
    fn set_lives(
        &mut self,
        count: u8,
    ) {
        self.count = count;
        for (pin, lit) in self.pins.iter_mut().zip(lives_led_levels(count)) {
            pin.set_lit(lit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl LedPin for bool {
        fn set_lit(
            &mut self,
            lit: bool,
        ) {
            *self = lit;
        }
    }

    #[test]
    fn test_new_switches_off() {
        let leds = LivesLeds::new([true; 4]);
        assert_eq!(leds.pins, [false; 4]);
        assert_eq!(leds.count(), 0);
    }

    #[test]
    fn test_set_lives() {
        let mut leds = LivesLeds::new([false; 4]);
        leds.set_lives(3);
        assert_eq!(leds.pins, [true, true, true, false]);
        leds.set_lives(1);
        assert_eq!(leds.pins, [true, false, false, false]);
        leds.set_lives(0);
        assert_eq!(leds.pins, [false; 4]);
        assert_eq!(leds.count(), 0);
    }
}
