//! Obstacle table: spawning, movement and collision.
//!
//! Obstacles live in a fixed array of `Option` slots. A new obstacle takes
//! the first free slot. Everything moves one glyph column left per cadence
//! step, and an obstacle already at column 0 is retired on the next step,
//! which is what scores a point.
//!
//! # Collision Rules
//!
//! Horizontal extents must overlap first. Then, per kind:
//!
//! | Kind | Hits when |
//! |------|-----------|
//! | Cactus (both sizes) | `player.row + 1 >= cactus.row` (jump height 0 or 1) |
//! | High bird | player within one row of the bird (any airborne height) |
//! | Low bird | player is not crouching |
//!
//! A one-row jump does not clear a cactus.

use core::fmt;

use crate::config::{ANIMATION_WRAP, BIRD_HIGH_ROW, BIRD_LOW_ROW, COLUMN_STRIDE, MAX_OBSTACLES, PLAYER_GROUND_ROW, SPAWN_COL};
use crate::player::PlayerState;
use crate::sprites::{self, Footprint, Sprite};

// =============================================================================
// Obstacle Kinds
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ObstacleKind {
    CactusLarge,
    CactusSmall,
    BirdHigh,
    BirdLow,
}

impl ObstacleKind {
    /// All kinds, in spawn-roll order.
    pub const ALL: [Self; 4] = [Self::CactusLarge, Self::CactusSmall, Self::BirdHigh, Self::BirdLow];

    /// Kind for a roll, wrapping around [`Self::ALL`].
    #[inline]
    pub const fn from_index(index: usize) -> Self { Self::ALL[index % Self::ALL.len()] }

    /// Row the obstacle travels on.
    pub const fn row(self) -> u8 {
        match self {
            Self::CactusLarge | Self::CactusSmall => PLAYER_GROUND_ROW,
            Self::BirdHigh => BIRD_HIGH_ROW,
            Self::BirdLow => BIRD_LOW_ROW,
        }
    }

    /// Width in pixels.
    pub const fn width(self) -> u8 {
        match self {
            Self::CactusSmall => COLUMN_STRIDE,
            _ => 2 * COLUMN_STRIDE,
        }
    }

    /// Short name for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CactusLarge => "cactus",
            Self::CactusSmall => "small cactus",
            Self::BirdHigh => "high bird",
            Self::BirdLow => "low bird",
        }
    }
}

// =============================================================================
// Obstacle
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Obstacle {
    pub row: u8,
    pub col: u8,
    pub kind: ObstacleKind,
    pub animation_phase: u8,
}

impl Obstacle {
    /// A fresh obstacle at the spawn column.
    pub const fn new(kind: ObstacleKind) -> Self {
        Self {
            row: kind.row(),
            col: SPAWN_COL,
            kind,
            animation_phase: 0,
        }
    }

    #[inline]
    pub const fn footprint(&self) -> Footprint { Footprint::new(self.row, self.col, self.kind.width()) }

    #[inline]
    pub const fn sprite(&self) -> Sprite { sprites::obstacle(self.kind, self.animation_phase) }

    /// Whether this obstacle hits `player`.
    pub const fn hits(
        &self,
        player: &PlayerState,
    ) -> bool {
        if !self.footprint().columns_overlap(&player.footprint()) {
            return false;
        }
        match self.kind {
            ObstacleKind::CactusLarge | ObstacleKind::CactusSmall => player.row + 1 >= self.row,
            ObstacleKind::BirdHigh => player.row.abs_diff(self.row) <= 1,
            ObstacleKind::BirdLow => !player.is_crouching(),
        }
    }

    /// Move one column left. Returns `false` if the obstacle was already at
    /// the left edge and should be retired instead.
    const fn step_left(&mut self) -> bool {
        if self.col == 0 {
            return false;
        }
        self.col = self.col.saturating_sub(COLUMN_STRIDE);
        self.animation_phase += 1;
        if self.animation_phase > ANIMATION_WRAP {
            self.animation_phase = 0;
        }
        true
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Every obstacle slot is in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoFreeSlot;

impl fmt::Display for NoFreeSlot {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "all {MAX_OBSTACLES} obstacle slots are in use")
    }
}

impl core::error::Error for NoFreeSlot {}

// =============================================================================
// Obstacle Table
// =============================================================================

/// Fixed-capacity arena of obstacles. `None` is a free slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ObstacleTable {
    slots: [Option<Obstacle>; MAX_OBSTACLES],
}

impl ObstacleTable {
    pub const fn new() -> Self {
        Self {
            slots: [None; MAX_OBSTACLES],
        }
    }

    /// Place a new obstacle in the first free slot and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`NoFreeSlot`] if the table is full. The table is left unchanged.
    pub fn spawn(
        &mut self,
        kind: ObstacleKind,
    ) -> Result<usize, NoFreeSlot> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_none())
            .ok_or(NoFreeSlot)?;
        *slot = Some(Obstacle::new(kind));
        Ok(index)
    }

    /// Advance every obstacle by one cadence step. Returns how many were
    /// retired off the left edge.
    pub fn advance_all(&mut self) -> u16 {
        let mut retired = 0;
        for slot in &mut self.slots {
            if let Some(obstacle) = slot {
                if !obstacle.step_left() {
                    *slot = None;
                    retired += 1;
                }
            }
        }
        retired
    }

    /// Index of the first obstacle that hits `player`.
    pub fn test_collision(
        &self,
        player: &PlayerState,
    ) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.is_some_and(|obstacle| obstacle.hits(player)))
    }

    #[inline]
    pub fn collides(
        &self,
        player: &PlayerState,
    ) -> bool {
        self.test_collision(player).is_some()
    }

    /// Free a slot, returning what was in it.
    pub fn retire(
        &mut self,
        index: usize,
    ) -> Option<Obstacle> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&Obstacle> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut Obstacle> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Active obstacles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> { self.slots.iter().flatten() }

    pub fn active_count(&self) -> usize { self.iter().count() }
}

// =============================================================================
// Unit Tests
// =============================================================================
