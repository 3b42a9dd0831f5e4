//! Recording surface
//!
//! Keeps the draw calls of the last frame as plain data. Used headless and
//! in tests to assert on what a frame would show.

use glam::Vec2;

use super::surface::{Half, Surface, TextStyle};
use crate::sim::Sprite;
use crate::{Rect, Rgba};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: Sprite,
        dst: Rect,
    },
    SpriteHalf {
        sprite: Sprite,
        half: Half,
        pivot: Vec2,
        rotation: f32,
        dst: Rect,
    },
    Tint {
        rect: Rect,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    Text {
        text: String,
        pos: Vec2,
        style: TextStyle,
    },
}

/// A surface that records instead of drawing
#[derive(Debug, Clone)]
pub struct DrawList {
    pub size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Every text string drawn this frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(*c)).count()
    }
}

impl Surface for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    /// Clearing starts a new frame
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_sprite(&mut self, sprite: Sprite, dst: Rect) {
        self.commands.push(DrawCommand::Sprite { sprite, dst });
    }

    fn draw_sprite_half(&mut self, sprite: Sprite, half: Half, pivot: Vec2, rotation: f32, dst: Rect) {
        self.commands.push(DrawCommand::SpriteHalf {
            sprite,
            half,
            pivot,
            rotation,
            dst,
        });
    }

    fn tint_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::Tint { rect, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style,
        });
    }
}
