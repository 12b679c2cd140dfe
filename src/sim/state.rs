//! Game state and core simulation types
//!
//! The body list is always `[ball, paddle, bricks...]`. Bricks are built once
//! and afterwards only their active flag changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Shape};
use crate::config::GameConfig;

/// Index of the ball in the body list
pub const BALL: usize = 0;
/// Index of the paddle in the body list
pub const PADDLE: usize = 1;
/// Index of the first brick in the body list
pub const FIRST_BRICK: usize = 2;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Every brick destroyed
    Won,
    /// Ball went out past the paddle
    Lost,
}

impl GamePhase {
    /// Won and Lost need a reset before play continues
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    /// End-of-game overlay text
    pub fn banner(self) -> Option<&'static str> {
        match self {
            GamePhase::Playing => None,
            GamePhase::Won => Some("HOORAY YOU WIN"),
            GamePhase::Lost => Some("BOO YOU LOSE"),
        }
    }
}

/// Bricks destroyed so far, doubling as the win/loss flag
///
/// `0..total` while playing, `total` once won, `-1` once lost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickCounter(i32);

impl BrickCounter {
    /// Loss sentinel
    pub const LOST: i32 = -1;

    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }

    /// Count one destroyed brick
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn mark_lost(&mut self) {
        self.0 = Self::LOST;
    }

    pub fn phase(self, total: i32) -> GamePhase {
        if self.0 == Self::LOST {
            GamePhase::Lost
        } else if self.0 == total {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    #[inline]
    pub fn is_terminal(self, total: i32) -> bool {
        self.phase(total).is_terminal()
    }
}

/// Read-only view of one frame for the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// `[ball, paddle, bricks...]`
    pub bodies: Vec<Body>,
    pub brick_count: i32,
    pub phase: GamePhase,
    pub frame: u64,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// `[ball, paddle, bricks...]`
    pub(crate) bodies: Vec<Body>,
    pub(crate) counter: BrickCounter,
    /// Frames actually simulated (skipped ticks do not count)
    pub(crate) frame_count: u64,
}

impl GameState {
    /// Build the playfield: ball at its start, paddle centered, all bricks active
    pub fn new(config: GameConfig) -> Self {
        let mut bodies = Vec::with_capacity(FIRST_BRICK + config.total_bricks as usize);

        bodies.push(Body::circle(
            config.ball_start,
            config.radius,
            config.ball_mass(),
        ));
        bodies.push(Body::paddle(
            Vec2::new(config.paddle_start_x(), config.paddle_y()),
            config.paddle_width,
            config.paddle_height,
        ));
        for idx in 0..config.total_bricks {
            bodies.push(Body::brick(
                brick_position(&config, idx),
                config.brick_width,
                config.brick_height,
            ));
        }

        let mut state = Self {
            config,
            bodies,
            counter: BrickCounter::new(),
            frame_count: 0,
        };
        state.place_ball();

        log::info!(
            "New game: {}x{} playfield, {} bricks in rows of {}",
            state.config.width,
            state.config.height,
            state.config.total_bricks,
            state.config.brick_row_length
        );
        state
    }

    /// Put the ball at its start with zero velocity and the start acceleration
    fn place_ball(&mut self) {
        let config = &self.config;
        let ball = &mut self.bodies[BALL];
        ball.pos = config.ball_start;
        ball.vel = Vec2::ZERO;
        ball.acc = config.ball_start_accel;
        ball.mass = config.ball_mass();
        ball.shape = Shape::Circle {
            radius: config.radius,
        };
    }

    /// Start a new playthrough. Safe to call repeatedly.
    pub fn reset(&mut self) {
        self.place_ball();
        self.bodies[PADDLE].pos.x = self.config.paddle_start_x();
        for brick in &mut self.bodies[FIRST_BRICK..] {
            brick.set_active(true);
        }
        self.counter.reset();
        log::info!("Game reset");
    }

    /// Start of a drag gesture. Resets the game if it is over.
    ///
    /// Returns true if a reset happened.
    pub fn begin_drag(&mut self) -> bool {
        if self.is_terminal() {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Center the paddle under a pointer x. No bounds clamping.
    pub fn set_paddle_target(&mut self, pointer_x: f32) {
        if !pointer_x.is_finite() {
            log::warn!("Ignoring non-finite paddle target {pointer_x}");
            return;
        }
        self.bodies[PADDLE].pos.x = pointer_x - self.config.paddle_width / 2.0;
    }

    /// Park the ball once the game is over
    pub(crate) fn freeze_ball(&mut self) {
        let ball = &mut self.bodies[BALL];
        ball.vel = Vec2::ZERO;
        ball.acc = self.config.frozen_ball_accel;
    }

    pub fn ball(&self) -> &Body {
        &self.bodies[BALL]
    }

    pub fn paddle(&self) -> &Body {
        &self.bodies[PADDLE]
    }

    pub fn bricks(&self) -> &[Body] {
        &self.bodies[FIRST_BRICK..]
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable ball access for external setups (tests, demos)
    pub fn ball_mut(&mut self) -> &mut Body {
        &mut self.bodies[BALL]
    }

    pub fn counter(&self) -> BrickCounter {
        self.counter
    }

    pub fn active_bricks(&self) -> usize {
        self.bricks().iter().filter(|b| b.is_active()).count()
    }

    pub fn phase(&self) -> GamePhase {
        self.counter.phase(self.config.win_count())
    }

    pub fn is_terminal(&self) -> bool {
        self.phase().is_terminal()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bodies: self.bodies.clone(),
            brick_count: self.counter.get(),
            phase: self.phase(),
            frame: self.frame_count,
        }
    }
}

/// Top-left corner of brick `idx`
///
/// Rows fill top-down. Within a row, column 0 is the rightmost brick and
/// columns are spaced `brick_width + brick_gap` apart around the center.
pub fn brick_position(config: &GameConfig, idx: u32) -> Vec2 {
    let row_length = config.brick_row_length.max(1);
    let row = idx / row_length;
    let column = idx % row_length;

    let center = (row_length - 1) as f32 / 2.0;
    let step = config.brick_width + config.brick_gap;
    let x = config.brick_middle() + (center - column as f32) * step;
    let y = config.brick_top + config.brick_row_spacing * row as f32;
    Vec2::new(x, y)
}
