//! Game configuration
//!
//! Playfield size, body extents and tuning knobs. Loaded from JSON; any field
//! left out of the document falls back to its default. The upper-case names
//! (`RADIUS`, `TOTAL_BRICKS`, ...) are accepted as aliases.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config document is not valid JSON for this schema
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Simulation configuration (fixed for the lifetime of a [`crate::GameState`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Ball ===
    #[serde(alias = "RADIUS")]
    pub radius: f32,
    /// Per-axis velocity limit
    #[serde(alias = "MAX_SPEED")]
    pub max_speed: f32,
    pub ball_start: Vec2,
    pub ball_start_accel: Vec2,
    pub frozen_ball_accel: Vec2,

    // === Paddle ===
    #[serde(alias = "PADDLE_WIDTH")]
    pub paddle_width: f32,
    #[serde(alias = "PADDLE_HEIGHT")]
    pub paddle_height: f32,
    pub paddle_bottom_offset: f32,

    // === Bricks ===
    #[serde(alias = "BRICK_WIDTH")]
    pub brick_width: f32,
    #[serde(alias = "BRICK_HEIGHT")]
    pub brick_height: f32,
    #[serde(alias = "BRICK_ROW_LENGTH")]
    pub brick_row_length: u32,
    #[serde(alias = "TOTAL_BRICKS")]
    pub total_bricks: u32,
    pub brick_gap: f32,
    pub brick_top: f32,
    pub brick_row_spacing: f32,

    // === Timing ===
    /// Simulation time per elapsed millisecond
    pub base_scale: f32,
    /// Elapsed time per tick is capped at this many milliseconds
    pub max_frame_ms: f32,

    // === Rules ===
    /// Ball reaching the bottom edge ends the game. When false the bottom
    /// edge bounces like the other three walls.
    pub bottom_wall_loses: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,

            radius: RADIUS,
            max_speed: MAX_SPEED,
            ball_start: Vec2::from(BALL_START),
            ball_start_accel: Vec2::from(BALL_START_ACCEL),
            frozen_ball_accel: Vec2::from(FROZEN_BALL_ACCEL),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_row_length: BRICK_ROW_LENGTH,
            total_bricks: TOTAL_BRICKS,
            brick_gap: BRICK_GAP,
            brick_top: BRICK_TOP,
            brick_row_spacing: BRICK_ROW_SPACING,

            base_scale: BASE_SCALE,
            max_frame_ms: MAX_FRAME_MS,

            bottom_wall_loses: true,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "Using default config ({}: {})",
                    path.as_ref().display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Check that every dimension and limit is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("radius", self.radius),
            ("max_speed", self.max_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("base_scale", self.base_scale),
            ("max_frame_ms", self.max_frame_ms),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("must be finite and > 0, got {value}")));
            }
        }

        let finite = [
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("brick_gap", self.brick_gap),
            ("brick_top", self.brick_top),
            ("brick_row_spacing", self.brick_row_spacing),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {value}")));
            }
        }

        let vectors = [
            ("ball_start", self.ball_start),
            ("ball_start_accel", self.ball_start_accel),
            ("frozen_ball_accel", self.frozen_ball_accel),
        ];
        for (field, value) in vectors {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {value}")));
            }
        }

        if self.brick_row_length == 0 {
            return Err(invalid("brick_row_length", "must be at least 1".into()));
        }
        if self.total_bricks == 0 || i32::try_from(self.total_bricks).is_err() {
            return Err(invalid(
                "total_bricks",
                format!("must be in 1..={}, got {}", i32::MAX, self.total_bricks),
            ));
        }

        let diameter = self.radius * 2.0;
        if diameter >= self.width || diameter >= self.height {
            return Err(invalid(
                "radius",
                format!(
                    "ball diameter {diameter} must be smaller than the {}x{} playfield",
                    self.width, self.height
                ),
            ));
        }

        Ok(())
    }

    /// Counter value that means every brick is gone
    #[inline]
    pub fn win_count(&self) -> i32 {
        // validate() guarantees the conversion
        i32::try_from(self.total_bricks).unwrap_or(i32::MAX)
    }

    /// Paddle x that centers it horizontally
    #[inline]
    pub fn paddle_start_x(&self) -> f32 {
        self.width / 2.0 - self.paddle_width / 2.0
    }

    /// Fixed paddle y
    #[inline]
    pub fn paddle_y(&self) -> f32 {
        self.height - self.paddle_bottom_offset
    }

    /// Brick x that centers it horizontally
    #[inline]
    pub fn brick_middle(&self) -> f32 {
        self.width / 2.0 - self.brick_width / 2.0
    }

    /// Placeholder ball mass
    #[inline]
    pub fn ball_mass(&self) -> f32 {
        self.radius * 10.0
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
