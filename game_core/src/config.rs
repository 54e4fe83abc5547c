use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::components::Side;
use crate::error::ConfigError;
use crate::params::Params;

/// Who drives the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    Human,
    #[default]
    Ai,
}

/// Game configuration
///
/// Every field is optional in a config file; missing fields take the
/// [`Params`] defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ai_speed: f32,
    pub ai_dead_zone: f32,
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub serve_max_vy: f32,
    pub speed_step: f32,
    pub max_speed_multiplier: f32,
    pub win_score: u32,
    pub right_paddle: Controller,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed: Params::AI_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_size: Params::BALL_SIZE,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_max_vy: Params::SERVE_MAX_VY,
            speed_step: Params::SPEED_STEP,
            max_speed_multiplier: Params::MAX_SPEED_MULTIPLIER,
            win_score: Params::WIN_SCORE,
            right_paddle: Controller::Ai,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_margin", self.paddle_margin),
            ("paddle_speed", self.paddle_speed),
            ("ai_speed", self.ai_speed),
            ("ai_dead_zone", self.ai_dead_zone),
            ("ball_size", self.ball_size),
            ("serve_speed_x", self.serve_speed_x),
            ("serve_max_vy", self.serve_max_vy),
            ("speed_step", self.speed_step),
            ("max_speed_multiplier", self.max_speed_multiplier),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("serve_speed_x", self.serve_speed_x),
            ("speed_step", self.speed_step),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("paddle_margin", self.paddle_margin),
            ("paddle_speed", self.paddle_speed),
            ("ai_speed", self.ai_speed),
            ("ai_dead_zone", self.ai_dead_zone),
            ("serve_max_vy", self.serve_max_vy),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if self.paddle_height > self.arena_height {
            return Err(ConfigError::Invalid(
                "paddle_height is larger than arena_height".to_string(),
            ));
        }
        // The wall bounce parks the ball inside the arena, which needs room
        if self.ball_size >= self.arena_height || self.ball_size >= self.arena_width {
            return Err(ConfigError::Invalid(
                "ball_size must be smaller than the arena".to_string(),
            ));
        }
        if 2.0 * self.paddle_margin + self.paddle_width > self.arena_width {
            return Err(ConfigError::Invalid(
                "paddles and margins do not fit in arena_width".to_string(),
            ));
        }
        if self.max_speed_multiplier < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "max_speed_multiplier must be at least 1.0, got {}",
                self.max_speed_multiplier
            )));
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid("win_score must be at least 1".to_string()));
        }
        Ok(())
    }

    /// X position (left edge) of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Starting top-left corner of a paddle, vertically centered
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(
            self.paddle_x(side),
            self.arena_height / 2.0 - self.paddle_height / 2.0,
        )
    }

    /// Top-left corner that puts the ball in the middle of the arena
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.ball_size / 2.0,
            self.arena_height / 2.0 - self.ball_size / 2.0,
        )
    }

    /// Clamp paddle Y (top edge) to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }
}
