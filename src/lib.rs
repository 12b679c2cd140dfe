//! Brick Bounce - a breakout physics core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (integration, walls, collisions, game state)
//! - `config`: Playfield and body dimensions, loaded from JSON
//!
//! Rendering, input capture and frame scheduling live outside this crate.
//! They feed the simulation an elapsed time and a paddle target each frame
//! and read back a [`sim::Snapshot`].

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GamePhase, GameState, Snapshot, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Scale applied to elapsed milliseconds so that one 16 ms frame
    /// advances the simulation by 0.15 units of time
    pub const BASE_SCALE: f32 = 0.15 / 16.0;
    /// Longest elapsed time a single tick will integrate (ms)
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Playfield dimensions
    pub const WIDTH: f32 = 390.0;
    pub const HEIGHT: f32 = 844.0;

    /// Ball defaults
    pub const RADIUS: f32 = 16.0;
    pub const MAX_SPEED: f32 = 25.0;
    pub const BALL_START: (f32, f32) = (100.0, 450.0);
    pub const BALL_START_ACCEL: (f32, f32) = (0.5, 0.5);
    /// Acceleration parked on the ball once the game is over
    pub const FROZEN_BALL_ACCEL: (f32, f32) = (0.5, 1.0);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 125.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Paddle sits this far above the bottom edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 100.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_ROW_LENGTH: u32 = 3;
    pub const TOTAL_BRICKS: u32 = 15;
    /// Horizontal gap between brick columns
    pub const BRICK_GAP: f32 = 50.0;
    /// Top edge of the first brick row
    pub const BRICK_TOP: f32 = 60.0;
    pub const BRICK_ROW_SPACING: f32 = 45.0;
}
