//! Frame orchestrator and game state machine.
//!
//! [`Game`] owns all game state and is advanced by [`Game::tick`], once per
//! fixed-rate tick. It draws through a [`DisplaySink`] and reports lives
//! through a [`LivesIndicator`]; it never reads hardware itself.
//!
//! # States
//!
//! ```text
//! StartScreen --jump--> Running --fatal hit--> GameOver --jump after lockout--> StartScreen
//!                          ^  |
//!                          +--+ non-fatal hit (lose a life, keep running)
//! ```
//!
//! The start screen only accepts a jump after it has seen the button
//! released, so a button still held from the previous run cannot skip it.
//!
//! # Running Tick
//!
//! 1. Erase the player and every obstacle at their old positions
//! 2. Jump physics, hit flash, speed ramp, spawning
//! 3. On a cadence step: move obstacles, scroll the ground, animate, score
//! 4. Collision check
//! 5. Draw ground (skipping occupied columns), obstacles, player, score

use heapless::Vec;

use crate::config::{
    BANNER_ROW, COLUMN_STRIDE, END_BANNER_COL, GAME_OVER_LOCKOUT_TICKS, GLYPH_COLUMNS, GROUND_ROW, HIT_FLASH_TICKS,
    LCD_WIDTH, SCORE_DIGITS, SCORE_ROW, START_BANNER_COL, GameConfig,
};
use crate::frame::{DisplaySink, LivesIndicator};
use crate::governor::{self, SCORE_AREA_COL, SpeedGovernor};
use crate::ground::{ColumnMask, GroundEntryStep, GroundScroller};
use crate::jump::{self, JumpEvent};
use crate::obstacles::{ObstacleKind, ObstacleTable};
use crate::player::{PlayerState, Posture};
use crate::spawner::SpawnScheduler;
use crate::sprites::{self, BLANK, Sprite};

// =============================================================================
// Input / Output Types
// =============================================================================

/// Debounced input levels, sampled once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInput {
    pub jump: bool,
    pub crouch: bool,
}

impl TickInput {
    pub const NONE: Self = Self {
        jump: false,
        crouch: false,
    };

    pub const JUMP: Self = Self {
        jump: true,
        crouch: false,
    };

    pub const CROUCH: Self = Self {
        jump: false,
        crouch: true,
    };
}

/// Something worth telling the outside world about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameEvent {
    Started,
    Jumped,
    Spawned(ObstacleKind),
    /// A spawn was due but every slot was taken.
    SpawnSkipped,
    /// Cadence tightened to this many ticks per step.
    SpeedUp(u8),
    Hit { lives_left: u8 },
    GameOver { score: u16 },
    Restarted,
}

/// Maximum events a single tick can produce.
pub const MAX_EVENTS_PER_TICK: usize = 8;

/// Events produced by one tick, in order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TickReport {
    pub events: Vec<GameEvent, MAX_EVENTS_PER_TICK>,
}

impl TickReport {
    fn push(
        &mut self,
        event: GameEvent,
    ) {
        self.events.push(event).ok();
    }

    #[inline]
    pub fn contains(
        &self,
        event: &GameEvent,
    ) -> bool {
        self.events.contains(event)
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.events.is_empty() }
}

/// Top-level game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for a jump. `armed` once the jump input was seen released.
    StartScreen { armed: bool },
    Running,
    /// Showing END. `ticks` counts towards the restart lockout.
    GameOver { ticks: u16 },
}

// =============================================================================
// Game
// =============================================================================

/// All state of one game, from start screen to game over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    phase: Phase,
    player: PlayerState,
    obstacles: ObstacleTable,
    ground: GroundScroller,
    governor: SpeedGovernor,
    spawner: SpawnScheduler,
    score_dirty: bool,
}

impl Game {
    /// A fresh game on the start screen.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: Phase::StartScreen { armed: false },
            player: PlayerState::new(config.lives()),
            obstacles: ObstacleTable::new(),
            ground: GroundScroller::new(),
            governor: SpeedGovernor::new(),
            spawner: SpawnScheduler::new(&config),
            score_dirty: false,
        }
    }

    #[inline]
    pub const fn config(&self) -> &GameConfig { &self.config }

    #[inline]
    pub const fn phase(&self) -> Phase { self.phase }

    #[inline]
    pub const fn player(&self) -> &PlayerState { &self.player }

    #[inline]
    pub const fn obstacles(&self) -> &ObstacleTable { &self.obstacles }

    #[inline]
    pub const fn ground(&self) -> &GroundScroller { &self.ground }

    #[inline]
    pub const fn governor(&self) -> &SpeedGovernor { &self.governor }

    #[inline]
    pub const fn score(&self) -> u16 { self.player.score }

    // -------------------------------------------------------------------------
    // Screens
    // -------------------------------------------------------------------------

    /// Draw one step of the startup animation: the ground glyph arriving at
    /// `step.column`, with the player running in place.
    pub fn intro_step<D>(
        &self,
        step: GroundEntryStep,
        display: &mut D,
    ) where
        D: DisplaySink + ?Sized,
    {
        display.draw(GROUND_ROW, step.column as u8 * COLUMN_STRIDE, &[step.glyph]);
        let phase = (GLYPH_COLUMNS - step.column) as u8;
        draw_sprite(display, self.player.row, self.player.col, sprites::player(Posture::Running, phase));
    }

    /// Draw the start screen from scratch and show the starting lives.
    pub fn draw_start_screen<D, L>(
        &self,
        display: &mut D,
        lives: &mut L,
    ) where
        D: DisplaySink + ?Sized,
        L: LivesIndicator + ?Sized,
    {
        clear_screen(display);
        self.draw_ground(display, ColumnMask::EMPTY);
        draw_sprite(display, self.player.row, self.player.col, sprites::PLAYER_STAND_SPRITE);
        display.draw(BANNER_ROW, START_BANNER_COL, &sprites::START_TEXT);
        lives.set_lives(self.player.lives);
    }

    /// Change the starting lives. Only allowed on the start screen.
    ///
    /// Returns `false` (and changes nothing) in any other phase.
    pub fn set_starting_lives<L>(
        &mut self,
        count: u8,
        lives: &mut L,
    ) -> bool
    where
        L: LivesIndicator + ?Sized,
    {
        if !matches!(self.phase, Phase::StartScreen { .. }) {
            return false;
        }
        self.config = self.config.with_lives(count);
        self.player.lives = self.config.lives();
        lives.set_lives(self.player.lives);
        true
    }

    /// Replace the spawn seed. Only allowed on the start screen, where no
    /// spawn has happened yet.
    ///
    /// Returns `false` (and changes nothing) in any other phase.
    pub fn reseed(
        &mut self,
        seed: u32,
    ) -> bool {
        if !matches!(self.phase, Phase::StartScreen { .. }) {
            return false;
        }
        self.config = self.config.with_seed(seed);
        self.spawner = SpawnScheduler::new(&self.config);
        true
    }

    // -------------------------------------------------------------------------
    // Tick
    // -------------------------------------------------------------------------

    /// Advance the game by one tick.
    pub fn tick<D, L>(
        &mut self,
        input: TickInput,
        display: &mut D,
        lives: &mut L,
    ) -> TickReport
    where
        D: DisplaySink + ?Sized,
        L: LivesIndicator + ?Sized,
    {
        let mut report = TickReport::default();
        match self.phase {
            Phase::StartScreen { armed: false } => {
                if !input.jump {
                    self.phase = Phase::StartScreen { armed: true };
                }
            }
            Phase::StartScreen { armed: true } => {
                if input.jump {
                    self.start_run(display, lives);
                    report.push(GameEvent::Started);
                }
            }
            Phase::Running => self.run_tick(input, display, lives, &mut report),
            Phase::GameOver { ticks } => {
                let ticks = ticks.saturating_add(1);
                if ticks >= GAME_OVER_LOCKOUT_TICKS && input.jump {
                    *self = Self::new(self.config);
                    self.draw_start_screen(display, lives);
                    report.push(GameEvent::Restarted);
                } else {
                    self.phase = Phase::GameOver { ticks };
                }
            }
        }
        report
    }

    fn start_run<D, L>(
        &mut self,
        display: &mut D,
        lives: &mut L,
    ) where
        D: DisplaySink + ?Sized,
        L: LivesIndicator + ?Sized,
    {
        display.draw(BANNER_ROW, START_BANNER_COL, &[BLANK; sprites::START_TEXT.len()]);
        lives.set_lives(self.player.lives);
        self.phase = Phase::Running;
        self.score_dirty = true;
        self.draw_score(display);
    }

    fn run_tick<D, L>(
        &mut self,
        input: TickInput,
        display: &mut D,
        lives: &mut L,
        report: &mut TickReport,
    ) where
        D: DisplaySink + ?Sized,
        L: LivesIndicator + ?Sized,
    {
        // Clear
        for obstacle in self.obstacles.iter() {
            erase(display, obstacle.row, obstacle.col, obstacle.sprite().width());
        }
        erase(display, self.player.row, self.player.col, 2);

        // Update
        if jump::advance(&mut self.player, input.crouch, input.jump) == Some(JumpEvent::Launched) {
            report.push(GameEvent::Jumped);
        }
        self.player.hit_flash = self.player.hit_flash.saturating_sub(1);

        if let Some(speed) = self.governor.tick() {
            report.push(GameEvent::SpeedUp(speed));
        }

        if let Some(kind) = self.spawner.tick() {
            match self.obstacles.spawn(kind) {
                Ok(_) => report.push(GameEvent::Spawned(kind)),
                Err(_) => report.push(GameEvent::SpawnSkipped),
            }
        }

        if self.governor.cadence_elapsed() {
            let survived = self.obstacles.advance_all();
            self.ground.tick();
            self.player.advance_animation();
            if survived > 0 {
                self.player.add_score(survived);
                self.score_dirty = true;
            }
        }

        // Collision
        if let Some(index) = self.obstacles.test_collision(&self.player) {
            if self.player.lives > 1 {
                self.player.lives -= 1;
                self.player.hit_flash = HIT_FLASH_TICKS;
                self.obstacles.retire(index);
                lives.set_lives(self.player.lives);
                report.push(GameEvent::Hit {
                    lives_left: self.player.lives,
                });
            } else {
                self.player.lives = 0;
                lives.set_lives(0);
                self.phase = Phase::GameOver { ticks: 0 };
                self.draw_playfield(display, sprites::PLAYER_DEAD_SPRITE);
                display.draw(BANNER_ROW, END_BANNER_COL, &sprites::END_TEXT);
                report.push(GameEvent::GameOver {
                    score: self.player.score,
                });
                return;
            }
        }

        // Draw
        self.draw_playfield(display, self.player.sprite());
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    fn draw_playfield<D>(
        &mut self,
        display: &mut D,
        player_sprite: Sprite,
    ) where
        D: DisplaySink + ?Sized,
    {
        let mask = self
            .obstacles
            .iter()
            .fold(ColumnMask::EMPTY.with_footprint(&self.player.footprint()), |mask, obstacle| {
                mask.with_footprint(&obstacle.footprint())
            });
        self.draw_ground(display, mask);

        for obstacle in self.obstacles.iter() {
            draw_sprite(display, obstacle.row, obstacle.col, obstacle.sprite());
        }
        draw_sprite(display, self.player.row, self.player.col, player_sprite);
        self.draw_score(display);
    }

    fn draw_ground<D>(
        &self,
        display: &mut D,
        mask: ColumnMask,
    ) where
        D: DisplaySink + ?Sized,
    {
        for (column, glyph) in self.ground.render_row(mask).into_iter().enumerate() {
            if let Some(glyph) = glyph {
                display.draw(GROUND_ROW, column as u8 * COLUMN_STRIDE, &[glyph]);
            }
        }
    }

    fn draw_score<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DisplaySink + ?Sized,
    {
        if !self.score_dirty {
            return;
        }
        self.score_dirty = false;

        display.draw(SCORE_ROW, SCORE_AREA_COL, &[BLANK; SCORE_DIGITS]);
        let digits = governor::score_digits(self.player.score);
        let glyphs: Vec<u8, SCORE_DIGITS> = digits.iter().map(|d| sprites::digit(*d)).collect();
        display.draw(SCORE_ROW, governor::score_column(glyphs.len()), &glyphs);
    }
}

impl Default for Game {
    fn default() -> Self { Self::new(GameConfig::DEFAULT) }
}

// =============================================================================
// Drawing Helpers
// =============================================================================

/// Draw a sprite, dropping glyphs that would fall off the right edge.
fn draw_sprite<D>(
    display: &mut D,
    row: u8,
    col: u8,
    sprite: Sprite,
) where
    D: DisplaySink + ?Sized,
{
    let fit = ((LCD_WIDTH as u8).saturating_sub(col) / COLUMN_STRIDE) as usize;
    let glyphs = sprite.glyphs();
    display.draw(row, col, &glyphs[..glyphs.len().min(fit)]);
}

fn erase<D>(
    display: &mut D,
    row: u8,
    col: u8,
    width: u8,
) where
    D: DisplaySink + ?Sized,
{
    draw_sprite(display, row, col, sprites::blank(width));
}

fn clear_screen<D>(display: &mut D)
where
    D: DisplaySink + ?Sized,
{
    for row in (0..crate::config::PAGE_COUNT as u8).step_by(2) {
        display.draw(row, 0, &[BLANK; GLYPH_COLUMNS]);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
