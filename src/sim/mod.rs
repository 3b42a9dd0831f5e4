//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (per-tick constants assume 60 Hz)
//! - Seeded RNG only, owned by `GameState`
//! - Lists are never mutated while being walked
//! - No rendering or platform dependencies

pub mod assets;
pub mod effects;
pub mod entity;
pub mod interaction;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use assets::{AssetPool, Sprite, VegetableKind};
pub use effects::{EffectKind, TimedEffects, apply_effect};
pub use entity::{Body, Bomb, BombStage, Explosion, FallingEntity, Motion, PowerUp, Vegetable};
pub use interaction::{SliceReport, slice_at};
pub use particles::{Beam, Splatter};
pub use state::{GamePhase, GameState, HudSnapshot};
pub use tick::{TickInput, tick};
