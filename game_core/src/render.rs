//! Frame rendering as a list of backend-agnostic draw commands
//!
//! The core never talks to a window. [`render`] describes a frame and any
//! [`Canvas`] implementation replays it.

use glam::Vec2;
use hecs::World;

use crate::{Ball, Color, Config, Paddle, Phase, Score, Session, Side};

pub const SCORE_TEXT_SIZE: f32 = 16.0;
pub const INFO_TEXT_SIZE: f32 = 12.0;

/// Drawing backend
pub trait Canvas {
    /// Axis-aligned rectangle with `pos` as its top-left corner
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, fill: Color, line: Color);

    /// Text with `pos` as the top-left of the first glyph
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        pos: Vec2,
        size: Vec2,
        fill: Color,
        line: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Ordered draw commands for one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&mut self, pos: Vec2, size: Vec2, fill: Color, line: Color) {
        self.commands.push(DrawCommand::Rect {
            pos,
            size,
            fill,
            line,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            size,
            color,
        });
    }

    /// All text commands, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Rect { .. } => None,
        })
    }

    pub fn replay(&self, canvas: &mut impl Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Rect {
                    pos,
                    size,
                    fill,
                    line,
                } => canvas.fill_rect(*pos, *size, *fill, *line),
                DrawCommand::Text {
                    text,
                    pos,
                    size,
                    color,
                } => canvas.text(text, *pos, *size, *color),
            }
        }
    }
}

/// Describe the current frame
pub fn render(world: &World, config: &Config, session: &Session, score: &Score) -> DrawList {
    let mut list = DrawList::new();

    // Background
    list.rect(
        Vec2::ZERO,
        Vec2::new(config.arena_width, config.arena_height),
        Color::BLACK,
        Color::BLACK,
    );

    // Paddles, left first so output does not depend on spawn order
    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side == Side::Right);
    for paddle in &paddles {
        list.rect(paddle.pos, paddle.size, paddle.color, Color::BLACK);
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        list.rect(ball.pos, ball.size, ball.color, Color::BLACK);
    }

    // HUD
    let center_x = config.arena_width / 2.0;
    list.text(
        format!("Left: {} | Right: {}", score.left, score.right),
        Vec2::new(center_x - 80.0, 10.0),
        SCORE_TEXT_SIZE,
        Color::WHITE,
    );
    list.text(
        format!("Hits: {}", score.hits),
        Vec2::new(10.0, config.arena_height - 20.0),
        INFO_TEXT_SIZE,
        Color::WHITE,
    );

    let prompt = match session.phase {
        Phase::Serving => Some("Press SPACE to serve".to_string()),
        Phase::Playing => None,
        Phase::GameOver => score
            .winner(config.win_score)
            .map(|side| format!("{side:?} wins! Press R to restart")),
    };
    if let Some(prompt) = prompt {
        list.text(
            prompt,
            Vec2::new(center_x - 80.0, config.arena_height / 2.0 - 40.0),
            INFO_TEXT_SIZE,
            Color::WHITE,
        );
    }

    list
}
