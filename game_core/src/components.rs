use glam::Vec2;

use crate::GameRng;

/// Which half of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction pointing into this side's goal
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap on both axes; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            side,
            pos,
            size,
            color,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
    pub vel: Vec2, // per frame, before the multiplier
    pub color: Color,
    pub speed_multiplier: f32,
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            color: Color::WHITE,
            speed_multiplier: 1.0,
        }
    }

    /// Advance by `frames` reference frames of travel
    pub fn move_by(&mut self, frames: f32) {
        self.pos += self.vel * self.speed_multiplier * frames;
    }

    pub fn change_color(&mut self, rng: &mut GameRng) {
        self.color = rng.color();
    }

    /// Bump the multiplier by `step`, never past `cap`
    pub fn increase_speed(&mut self, step: f32, cap: f32) {
        if self.speed_multiplier < cap {
            self.speed_multiplier = (self.speed_multiplier + step).min(cap);
        }
    }

    /// Put the ball at `pos` at rest with the base speed
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.speed_multiplier = 1.0;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Movement intent for a human-driven paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marks a paddle as computer controlled.
///
/// The controller only reacts to where the ball is now. It chases the
/// ball's center while the ball travels toward its side and holds still
/// inside the dead zone.
#[derive(Debug, Clone, Copy)]
pub struct PaddleAi {
    pub speed: f32,
    pub dead_zone: f32,
}

impl PaddleAi {
    pub fn new(speed: f32, dead_zone: f32) -> Self {
        Self { speed, dead_zone }
    }
}
