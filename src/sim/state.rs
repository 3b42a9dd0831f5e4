//! Game state and core simulation types
//!
//! One owned struct holds everything the simulation mutates. Spawner,
//! interaction engine and tick all take it by `&mut`; nothing is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::assets::AssetPool;
use super::effects::TimedEffects;
use super::entity::{Bomb, PowerUp, Vegetable};
use super::particles::{Beam, Splatter};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticking and accepting slices
    Running,
    /// Run ended; there is no way back to Running
    Stopped,
}

/// What the HUD needs each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: u64,
    pub combo: u32,
    pub max_combo: u32,
    pub double_score: bool,
    pub slow_motion: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values for this run
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Consecutive slices without a miss
    pub combo: u32,
    /// Highest combo reached this run
    pub max_combo: u32,
    /// Global speed multiplier for spawn rates and gravity of new entities
    pub game_speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub effects: TimedEffects,
    /// Sprites the frontend has ready
    pub assets: AssetPool,
    pub vegetables: Vec<Vegetable>,
    pub power_ups: Vec<PowerUp>,
    pub bombs: Vec<Bomb>,
    /// Visual particles (not gameplay-affecting)
    pub splatters: Vec<Splatter>,
    pub beams: Vec<Beam>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            tuning,
            phase: GamePhase::Running,
            score: 0,
            combo: 0,
            max_combo: 0,
            game_speed: 1.0,
            time_ticks: 0,
            effects: TimedEffects::default(),
            assets: AssetPool::all(),
            vegetables: Vec::new(),
            power_ups: Vec::new(),
            bombs: Vec::new(),
            splatters: Vec::new(),
            beams: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// End the run for good
    pub fn stop(&mut self) {
        if self.is_running() {
            log::info!(
                "Run over at tick {}: score {}, max combo {}",
                self.time_ticks,
                self.score,
                self.max_combo
            );
        }
        self.phase = GamePhase::Stopped;
    }

    /// Raise the combo, keeping the high-water mark in step
    pub fn add_combo(&mut self, amount: u32) {
        self.combo = self.combo.saturating_add(amount);
        self.max_combo = self.max_combo.max(self.combo);
    }

    pub fn reset_combo(&mut self) {
        self.combo = 0;
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            combo: self.combo,
            max_combo: self.max_combo,
            double_score: self.effects.double_score_active(),
            slow_motion: self.effects.slow_motion_active(),
        }
    }

    /// Entities still in play (for logging)
    pub fn live_entities(&self) -> usize {
        self.vegetables.len() + self.power_ups.len() + self.bombs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(42);
        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.combo, 0);
        assert_eq!(state.game_speed, 1.0);
        assert_eq!(state.live_entities(), 0);
        assert!(state.assets.bomb);
    }

    #[test]
    fn test_add_combo_tracks_max() {
        let mut state = GameState::new(1);
        state.add_combo(3);
        state.reset_combo();
        state.add_combo(2);
        assert_eq!(state.combo, 2);
        assert_eq!(state.max_combo, 3);
    }

    #[test]
    fn test_stop_is_terminal() {
        let mut state = GameState::new(1);
        state.stop();
        state.stop();
        assert_eq!(state.phase, GamePhase::Stopped);
        assert!(!state.is_running());
    }

    #[test]
    fn test_hud_snapshot() {
        let mut state = GameState::new(1);
        state.score = 60;
        state.add_combo(5);
        state.effects.activate_double_score(0, 600);
        let hud = state.hud();
        assert_eq!(hud.score, 60);
        assert_eq!(hud.combo, 5);
        assert_eq!(hud.max_combo, 5);
        assert!(hud.double_score);
        assert!(!hud.slow_motion);
    }
}
