//! Game core for the paged-LCD endless runner.
//!
//! This crate contains everything that is not hardware glue, shared between
//! the simulator and the Pico 2 firmware:
//!
//! - [`config`]: Display geometry, physics and cadence constants, [`GameConfig`]
//! - [`sprites`]: Sprite catalog (entity + animation phase to glyph indices) and footprints
//! - [`player`]: Player state
//! - [`jump`]: Jump integrator (velocity/gravity model with fast-fall)
//! - [`obstacles`]: Fixed-capacity obstacle table, movement and collision
//! - [`ground`]: Scrolling ground row and the startup ground animation
//! - [`governor`]: Speed ramp and score formatting
//! - [`spawner`]: Randomised spawn scheduling
//! - [`game`]: Frame orchestrator and the start / running / game-over state machine
//! - [`frame`]: Display sink and lives indicator contracts, in-memory glyph frame
//! - [`glyphs`]: 8x16 glyph bitmaps
//! - [`raster`]: Draws a glyph frame onto any embedded-graphics target
//! - [`colors`]: RGB565 palette shared by the front ends
//! - [`event_log`]: Ring buffer of human-readable game events
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free. Tests run on the host:
//!
//! ```bash
//! cargo test -p runner-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod event_log;
pub mod frame;
pub mod game;
pub mod glyphs;
pub mod governor;
pub mod ground;
pub mod jump;
pub mod obstacles;
pub mod player;
pub mod raster;
pub mod spawner;
pub mod sprites;

// Re-export commonly used items
pub use config::GameConfig;
pub use frame::{DisplaySink, GlyphFrame, LivesIndicator};
pub use game::{Game, GameEvent, Phase, TickInput, TickReport};
pub use obstacles::{NoFreeSlot, Obstacle, ObstacleKind, ObstacleTable};
pub use player::{PlayerState, Posture};
