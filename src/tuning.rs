//! Data-driven game balance
//!
//! Every gameplay number lives here so a run can be rebalanced from JSON
//! without touching simulation code. Missing fields fall back to the
//! defaults, which reproduce the classic arcade feel at 60 ticks/second.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{ENTITY_SIZE, TICKS_PER_SECOND};

/// Errors from loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawning (per-tick probability at game speed 1.0) ===
    pub vegetable_spawn_chance: f32,
    pub power_up_spawn_chance: f32,
    pub bomb_spawn_chance: f32,

    // === Physics (pixels, pixels/tick, pixels/tick²) ===
    pub gravity: f32,
    pub entity_size: f32,
    /// Minimum upward launch speed of a vegetable
    pub vegetable_launch_speed: f32,
    /// Random extra launch speed of a vegetable (scaled by game speed)
    pub vegetable_launch_spread: f32,
    /// Maximum sideways drift of a vegetable (scaled by game speed)
    pub vegetable_drift: f32,
    /// Minimum upward launch speed of power-ups and bombs
    pub item_launch_speed: f32,
    pub item_launch_spread: f32,

    // === Scoring ===
    pub base_points: u64,
    pub combo_threshold: u32,
    pub combo_multiplier: u64,
    pub double_score_multiplier: u64,
    pub bomb_penalty: u64,
    pub instant_combo_bonus: u32,

    // === Timed effects ===
    pub effect_duration_ticks: u64,
    pub slow_motion_factor: f32,

    // === Splatter ===
    pub splatter_count: usize,
    pub splatter_jitter: f32,
    pub splatter_speed: f32,
    pub splatter_min_size: f32,
    pub splatter_max_size: f32,
    /// Alpha lost per tick
    pub splatter_fade: f32,

    // === Bomb ===
    pub explosion_ticks: u32,
    pub explosion_base_radius: f32,
    pub explosion_growth: f32,
    pub flash_interval_ticks: u32,
    pub beam_speed: f32,
    pub beam_max_length: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            vegetable_spawn_chance: 0.03,
            power_up_spawn_chance: 0.005,
            bomb_spawn_chance: 0.01,

            gravity: 0.2,
            entity_size: ENTITY_SIZE,
            vegetable_launch_speed: 10.0,
            vegetable_launch_spread: 8.0,
            vegetable_drift: 1.0,
            item_launch_speed: 5.0,
            item_launch_spread: 8.0,

            base_points: 10,
            combo_threshold: 5,
            combo_multiplier: 2,
            double_score_multiplier: 5,
            bomb_penalty: 50,
            instant_combo_bonus: 10,

            effect_duration_ticks: 10 * TICKS_PER_SECOND,
            slow_motion_factor: 0.5,

            splatter_count: 5,
            splatter_jitter: 10.0,
            splatter_speed: 1.0,
            splatter_min_size: 5.0,
            splatter_max_size: 15.0,
            splatter_fade: 0.01,

            explosion_ticks: 20,
            explosion_base_radius: 200.0,
            explosion_growth: 2.0,
            // 200 ms
            flash_interval_ticks: 12,
            beam_speed: 10.0,
            beam_max_length: 200.0,
        }
    }
}

/// Longest accepted effect window (one hour of play)
pub const MAX_EFFECT_DURATION_TICKS: u64 = 60 * 60 * TICKS_PER_SECOND;

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), TuningError> {
    if value.is_nan() || value < min || value > max {
        return Err(TuningError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

impl Tuning {
    /// Parse tuning JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        check_range("vegetable_spawn_chance", self.vegetable_spawn_chance as f64, 0.0, 1.0)?;
        check_range("power_up_spawn_chance", self.power_up_spawn_chance as f64, 0.0, 1.0)?;
        check_range("bomb_spawn_chance", self.bomb_spawn_chance as f64, 0.0, 1.0)?;

        check_range("gravity", self.gravity as f64, 0.0, 10.0)?;
        check_range("entity_size", self.entity_size as f64, 1.0, 1000.0)?;

        check_range(
            "effect_duration_ticks",
            self.effect_duration_ticks as f64,
            1.0,
            MAX_EFFECT_DURATION_TICKS as f64,
        )?;
        // Zero would freeze the game forever once slow motion hits
        check_range("slow_motion_factor", self.slow_motion_factor as f64, f64::EPSILON, 1.0)?;

        check_range("splatter_jitter", self.splatter_jitter as f64, 0.0, 1000.0)?;
        check_range("splatter_speed", self.splatter_speed as f64, 0.0, 1000.0)?;
        check_range("splatter_fade", self.splatter_fade as f64, f64::EPSILON, 1.0)?;
        check_range("splatter_min_size", self.splatter_min_size as f64, 0.0, 1000.0)?;
        check_range(
            "splatter_max_size",
            self.splatter_max_size as f64,
            self.splatter_min_size as f64,
            1000.0,
        )?;

        check_range("explosion_ticks", self.explosion_ticks as f64, 1.0, f64::MAX)?;
        check_range("flash_interval_ticks", self.flash_interval_ticks as f64, 1.0, f64::MAX)?;
        check_range("beam_speed", self.beam_speed as f64, f64::EPSILON, f64::MAX)?;
        check_range("beam_max_length", self.beam_max_length as f64, 0.0, f64::MAX)?;
        Ok(())
    }
}
