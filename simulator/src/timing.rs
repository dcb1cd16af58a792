//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

use runner_common::config::{GROUND_ENTRY_STEP_MS, TICK_PERIOD_MS};

/// One game tick.
pub const TICK: Duration = Duration::from_millis(TICK_PERIOD_MS);

/// Target frame time (~50 FPS). Game ticks run in batches of
/// [`TICKS_PER_FRAME`], then the window is updated.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Game ticks per window update.
pub const TICKS_PER_FRAME: u32 = (FRAME_TIME.as_millis() / TICK.as_millis()) as u32;

/// Delay between two steps of the ground entry animation.
pub const GROUND_ENTRY_STEP: Duration = Duration::from_millis(GROUND_ENTRY_STEP_MS);
