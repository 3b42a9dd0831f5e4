//! Render surface capability
//!
//! The simulation draws through this trait and never sees a canvas. A
//! frontend implements it over whatever it has (canvas 2D, a test recorder).

use glam::Vec2;

use crate::sim::Sprite;
use crate::{Rect, Rgba};

/// Which half of a sprite to draw (split vertically down the middle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Left,
    Right,
}

/// Font settings for HUD text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub color: Rgba,
}

impl TextStyle {
    pub const fn new(size_px: f32, color: Rgba) -> Self {
        Self { size_px, color }
    }
}

/// Drawing operations the game needs
pub trait Surface {
    /// Current drawable size in pixels
    fn size(&self) -> Vec2;

    fn clear(&mut self);

    fn draw_sprite(&mut self, sprite: Sprite, dst: Rect);

    /// Draw one half of a sprite rotated by `rotation` about `pivot`.
    /// `dst` is relative to the pivot before rotation.
    fn draw_sprite_half(&mut self, sprite: Sprite, half: Half, pivot: Vec2, rotation: f32, dst: Rect);

    /// Wash `color` over what was already drawn inside `rect`
    fn tint_rect(&mut self, rect: Rect, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
}
