//! Randomised spawn scheduling.
//!
//! A countdown drawn from the configured spawn window decides when the next
//! obstacle appears, and the same PRNG picks its kind. The PRNG is seeded
//! from [`GameConfig`], so a run is reproducible from its config alone.

use crate::config::GameConfig;
use crate::obstacles::ObstacleKind;

/// Replacement for a zero seed, which xorshift would never leave.
const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

/// 32-bit xorshift PRNG (13/17/5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct XorShift32(u32);

impl XorShift32 {
    pub const fn new(seed: u32) -> Self {
        if seed == 0 {
            Self(ZERO_SEED_REPLACEMENT)
        } else {
            Self(seed)
        }
    }

    pub const fn next_u32(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    /// Uniform-ish value in `0..max`. `max` of zero yields zero.
    pub const fn range(
        &mut self,
        max: u32,
    ) -> u32 {
        if max == 0 { 0 } else { self.next_u32() % max }
    }
}

/// Decides when to spawn and what.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpawnScheduler {
    rng: XorShift32,
    min_ticks: u16,
    max_ticks: u16,
    countdown: u16,
}

impl SpawnScheduler {
    pub fn new(config: &GameConfig) -> Self {
        let (min_ticks, max_ticks) = config.spawn_window();
        let mut scheduler = Self {
            rng: XorShift32::new(config.seed),
            min_ticks,
            max_ticks,
            countdown: 0,
        };
        scheduler.countdown = scheduler.roll_interval();
        scheduler
    }

    /// Count one running tick. Returns the kind to spawn when the countdown
    /// expires, and starts a new one.
    pub fn tick(&mut self) -> Option<ObstacleKind> {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return None;
        }
        let kind = ObstacleKind::from_index(self.rng.range(ObstacleKind::ALL.len() as u32) as usize);
        self.countdown = self.roll_interval();
        Some(kind)
    }

    fn roll_interval(&mut self) -> u16 {
        let span = u32::from(self.max_ticks - self.min_ticks) + 1;
        self.min_ticks + self.rng.range(span) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = XorShift32::new(1234);
        let mut b = XorShift32::new(1234);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_intervals_within_window() {
        let config = GameConfig::DEFAULT;
        let mut scheduler = SpawnScheduler::new(&config);
        let mut since_last = 0u16;
        let mut spawns = 0;
        for _ in 0..10_000 {
            since_last += 1;
            if scheduler.tick().is_some() {
                assert!(since_last >= config.spawn_min_ticks, "interval {since_last}");
                assert!(since_last <= config.spawn_max_ticks, "interval {since_last}");
                since_last = 0;
                spawns += 1;
            }
        }
        assert!(spawns > 10_000 / u32::from(config.spawn_max_ticks));
    }

    #[test]
    fn test_fixed_window() {
        let config = GameConfig {
            spawn_min_ticks: 5,
            spawn_max_ticks: 5,
            ..GameConfig::DEFAULT
        };
        let mut scheduler = SpawnScheduler::new(&config);
        let spawned: Vec<bool> = (0..15).map(|_| scheduler.tick().is_some()).collect();
        let expected: Vec<bool> = (1..=15).map(|tick| tick % 5 == 0).collect();
        assert_eq!(spawned, expected);
    }

    #[test]
    fn test_every_kind_eventually_spawns() {
        let config = GameConfig::DEFAULT.with_seed(7);
        let mut scheduler = SpawnScheduler::new(&config);
        let mut seen = [false; 4];
        for _ in 0..20_000 {
            if let Some(kind) = scheduler.tick() {
                seen[ObstacleKind::ALL.iter().position(|k| *k == kind).unwrap()] = true;
            }
        }
        assert_eq!(seen, [true; 4]);
    }
}
