//! Falling entities: vegetables, power-ups and bombs
//!
//! All three share the same ballistic body and box hit-test. What differs is
//! what happens on a hit and how each one leaves the game.

use glam::Vec2;

use super::assets::{Sprite, VegetableKind};
use super::effects::EffectKind;
use super::particles::{Beam, beam_fan};
use crate::tuning::Tuning;
use crate::{Rect, Rgb, Rgba};

/// Per-tick drift of the two halves of a sliced vegetable
const FRAGMENT_DRIFT: Vec2 = Vec2::new(2.0, 1.0);
/// Per-tick spin of each half (radians, left half turns counter-clockwise)
const FRAGMENT_SPIN: f32 = 0.05;
/// Initial separation of the halves along the slice direction
const SLICE_SEPARATION: f32 = 5.0;

/// Bomb warning colors, cycled while flashing
pub const FLASH_COLORS: [Rgba; 3] = [
    Rgba::new(255, 0, 0, 0.5),
    Rgba::new(255, 165, 0, 0.5),
    Rgba::new(255, 255, 0, 0.5),
];

/// Explosion fill color (alpha comes from the explosion timer)
pub const EXPLOSION_COLOR: Rgb = Rgb::new(255, 140, 0);

/// Shared ballistic state
#[derive(Debug, Clone)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// Downward acceleration per tick, fixed at spawn
    pub gravity: f32,
    pub size: Vec2,
    /// False once the entity has left the game
    pub active: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, gravity: f32, size: f32) -> Self {
        Self {
            pos,
            vel,
            gravity,
            size: Vec2::splat(size),
            active: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Apply gravity then velocity for one tick
    pub fn integrate(&mut self) {
        self.vel.y += self.gravity;
        self.pos += self.vel;
    }

    /// Whether the body has dropped fully out through the bottom edge
    pub fn below(&self, surface_height: f32) -> bool {
        self.pos.y - self.size.y > surface_height
    }
}

/// Result of advancing an entity by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Still in play
    Moving,
    /// Dropped out through the bottom this tick
    FellOut,
    /// Finished its terminal animation this tick
    Finished,
}

/// Physics + hit-test contract shared by every falling entity
pub trait FallingEntity {
    fn body(&self) -> &Body;

    /// Advance one tick. Call only while active.
    fn update(&mut self, bounds: Vec2, tuning: &Tuning) -> Motion;

    /// Whether a pointer at `point` slices this entity right now
    fn hit_test(&self, point: Vec2) -> bool {
        self.body().active && self.body().rect().contains(point)
    }

    fn is_active(&self) -> bool {
        self.body().active
    }
}

/// A sliceable vegetable
#[derive(Debug, Clone)]
pub struct Vegetable {
    pub body: Body,
    pub kind: VegetableKind,
    /// Effect dispatched instead of scoring (power-up-flagged vegetable)
    pub effect: Option<EffectKind>,
    pub sliced: bool,
    /// How far the halves have separated
    pub slice_offset: Vec2,
    pub rotation_left: f32,
    pub rotation_right: f32,
}

impl Vegetable {
    pub fn new(kind: VegetableKind, body: Body) -> Self {
        Self {
            body,
            kind,
            effect: None,
            sliced: false,
            slice_offset: Vec2::ZERO,
            rotation_left: 0.0,
            rotation_right: 0.0,
        }
    }

    /// Turn this vegetable into an effect carrier
    pub fn with_effect(mut self, effect: EffectKind) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn sprite(&self) -> Sprite {
        match self.effect {
            Some(effect) => Sprite::PowerUp(effect),
            None => Sprite::Vegetable(self.kind),
        }
    }

    /// Split the vegetable; the halves start apart along the hit direction
    pub fn slice(&mut self, hit: Vec2) {
        self.sliced = true;
        let dir = (hit - self.body.center()).normalize_or_zero();
        self.slice_offset = dir * SLICE_SEPARATION;
    }

    /// An unsliced plain vegetable leaving the screen breaks the combo
    pub fn counts_as_miss(&self) -> bool {
        !self.sliced && self.effect.is_none()
    }
}

impl FallingEntity for Vegetable {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, bounds: Vec2, _tuning: &Tuning) -> Motion {
        self.body.integrate();

        if self.sliced {
            self.slice_offset += FRAGMENT_DRIFT;
            self.rotation_left -= FRAGMENT_SPIN;
            self.rotation_right += FRAGMENT_SPIN;
        }

        if self.body.below(bounds.y) {
            self.body.active = false;
            return Motion::FellOut;
        }
        Motion::Moving
    }

    fn hit_test(&self, point: Vec2) -> bool {
        !self.sliced && self.body.active && self.body.rect().contains(point)
    }
}

/// A collectible power-up
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub body: Body,
    pub kind: EffectKind,
    pub collected: bool,
}

impl PowerUp {
    pub fn new(kind: EffectKind, body: Body) -> Self {
        Self {
            body,
            kind,
            collected: false,
        }
    }

    /// Take the effect out of the power-up. Only the first call yields it.
    pub fn collect(&mut self) -> Option<EffectKind> {
        if self.collected {
            return None;
        }
        self.collected = true;
        self.body.active = false;
        Some(self.kind)
    }
}

impl FallingEntity for PowerUp {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, bounds: Vec2, _tuning: &Tuning) -> Motion {
        self.body.integrate();
        if self.body.below(bounds.y) {
            self.body.active = false;
            return Motion::FellOut;
        }
        Motion::Moving
    }

    fn hit_test(&self, point: Vec2) -> bool {
        !self.collected && self.body.active && self.body.rect().contains(point)
    }
}

/// Bomb lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BombStage {
    Falling,
    Exploding { timer: u32 },
}

/// Warning flash state of a falling bomb
#[derive(Debug, Clone, Default)]
pub struct FlashCycle {
    pub ticks: u32,
    pub on: bool,
    pub color_index: usize,
}

impl FlashCycle {
    fn advance(&mut self, interval: u32) {
        self.ticks += 1;
        if self.ticks >= interval {
            self.ticks = 0;
            self.on = !self.on;
            self.color_index = (self.color_index + 1) % FLASH_COLORS.len();
        }
    }

    /// Overlay color to draw this frame, if the flash is on
    pub fn overlay(&self) -> Option<Rgba> {
        self.on.then(|| FLASH_COLORS[self.color_index])
    }
}

/// Explosion ring to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    pub center: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// A bomb; slicing it costs points and sets off beams
#[derive(Debug, Clone)]
pub struct Bomb {
    pub body: Body,
    pub stage: BombStage,
    pub flash: FlashCycle,
}

impl Bomb {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            stage: BombStage::Falling,
            flash: FlashCycle::default(),
        }
    }

    pub fn is_falling(&self) -> bool {
        self.stage == BombStage::Falling
    }

    /// Detonate a falling bomb, returning the beams it fires.
    /// Already exploding bombs return `None`.
    pub fn explode(&mut self, tuning: &Tuning) -> Option<[Beam; 3]> {
        if !self.is_falling() {
            return None;
        }
        self.stage = BombStage::Exploding { timer: 0 };
        Some(beam_fan(self.body.center(), tuning))
    }

    pub fn explosion(&self, tuning: &Tuning) -> Option<Explosion> {
        match self.stage {
            BombStage::Falling => None,
            BombStage::Exploding { timer } => Some(Explosion {
                center: self.body.center(),
                radius: tuning.explosion_base_radius + tuning.explosion_growth * timer as f32,
                alpha: (1.0 - timer as f32 / tuning.explosion_ticks as f32).max(0.0),
            }),
        }
    }
}

impl FallingEntity for Bomb {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, bounds: Vec2, tuning: &Tuning) -> Motion {
        match &mut self.stage {
            BombStage::Falling => {
                self.flash.advance(tuning.flash_interval_ticks);
                self.body.integrate();
                if self.body.below(bounds.y) {
                    self.body.active = false;
                    return Motion::FellOut;
                }
                Motion::Moving
            }
            BombStage::Exploding { timer } => {
                *timer += 1;
                if *timer > tuning.explosion_ticks {
                    self.body.active = false;
                    return Motion::Finished;
                }
                Motion::Moving
            }
        }
    }

    fn hit_test(&self, point: Vec2) -> bool {
        self.is_falling() && self.body.active && self.body.rect().contains(point)
    }
}
