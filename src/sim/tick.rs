//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation one step: effects expire,
//! the spawner rolls, every entity moves, and spent entries are culled only
//! after the whole pass.

use glam::Vec2;

use super::entity::{FallingEntity, Motion};
use super::spawn::spawn_entities;
use super::state::GameState;

/// Input for a single tick
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Current surface size; the bottom edge is where entities launch and exit
    pub bounds: Vec2,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(1280.0, 720.0),
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }

    state.time_ticks += 1;

    if let Some(speed) = state.effects.expire(state.time_ticks) {
        state.game_speed = speed;
    }

    spawn_entities(state, input.bounds);

    let bounds = input.bounds;
    let tuning = &state.tuning;

    let mut missed = false;
    for veg in state.vegetables.iter_mut().filter(|v| v.is_active()) {
        if veg.update(bounds, tuning) == Motion::FellOut && veg.counts_as_miss() {
            missed = true;
        }
    }
    for pu in state.power_ups.iter_mut().filter(|p| p.is_active()) {
        pu.update(bounds, tuning);
    }
    for bomb in state.bombs.iter_mut().filter(|b| b.is_active()) {
        bomb.update(bounds, tuning);
    }

    let fade = tuning.splatter_fade;
    for splatter in &mut state.splatters {
        splatter.update(fade);
    }
    for beam in &mut state.beams {
        beam.update();
    }

    if missed {
        log::trace!("Vegetable missed at tick {}, combo {} lost", state.time_ticks, state.combo);
        state.reset_combo();
    }

    // Cull after the full pass
    state.vegetables.retain(|v| v.is_active());
    state.power_ups.retain(|p| p.is_active());
    state.bombs.retain(|b| b.is_active());
    state.splatters.retain(|s| s.is_alive());
    state.beams.retain(|b| b.active);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::AssetPool;
    use crate::sim::assets::VegetableKind;
    use crate::sim::entity::{Body, Bomb, PowerUp, Vegetable};
    use crate::sim::effects::EffectKind;
    use crate::sim::interaction::slice_at;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn quiet_state() -> GameState {
        let mut state = GameState::new(12345);
        state.assets = AssetPool::empty();
        state
    }

    fn input() -> TickInput {
        TickInput { bounds: BOUNDS }
    }

    /// A vegetable about to drop out of the bottom edge
    fn falling_veg() -> Vegetable {
        let body = Body::new(Vec2::new(100.0, 670.0), Vec2::new(0.0, 10.0), 0.2, 75.0);
        Vegetable::new(VegetableKind::Tomato, body)
    }

    #[test]
    fn test_unsliced_vegetable_miss_resets_combo() {
        let mut state = quiet_state();
        state.add_combo(8);
        state.vegetables.push(falling_veg());

        tick(&mut state, &input());
        assert_eq!(state.combo, 0);
        assert_eq!(state.max_combo, 8);
        assert!(state.vegetables.is_empty());
    }

    #[test]
    fn test_sliced_vegetable_exit_keeps_combo() {
        let mut state = quiet_state();
        let mut veg = falling_veg();
        veg.sliced = true;
        state.vegetables.push(veg);
        state.add_combo(3);

        tick(&mut state, &input());
        assert_eq!(state.combo, 3);
        assert!(state.vegetables.is_empty());
    }

    #[test]
    fn test_effect_vegetable_exit_keeps_combo() {
        let mut state = quiet_state();
        state.vegetables.push(falling_veg().with_effect(EffectKind::SlowMotion));
        state.add_combo(3);

        tick(&mut state, &input());
        assert_eq!(state.combo, 3);
    }

    #[test]
    fn test_cull_does_not_skip_neighbours() {
        let mut state = quiet_state();
        // Two adjacent entries leaving on the same tick must both go
        state.vegetables.push(falling_veg());
        state.vegetables.push(falling_veg());
        let keep = Body::new(Vec2::new(300.0, 300.0), Vec2::ZERO, 0.2, 75.0);
        state.vegetables.push(Vegetable::new(VegetableKind::Carrot, keep));

        tick(&mut state, &input());
        assert_eq!(state.vegetables.len(), 1);
        assert_eq!(state.vegetables[0].kind, VegetableKind::Carrot);
    }

    #[test]
    fn test_collected_power_up_pruned_next_tick() {
        let mut state = quiet_state();
        let body = Body::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 0.2, 75.0);
        state.power_ups.push(PowerUp::new(EffectKind::DoubleScore, body));

        slice_at(&mut state, Vec2::new(10.0, 10.0));
        assert!(state.effects.double_score_active());
        tick(&mut state, &input());
        assert!(state.power_ups.is_empty());
    }

    #[test]
    fn test_bomb_explosion_and_beams_run_out() {
        let mut state = quiet_state();
        let body = Body::new(Vec2::new(62.5, 62.5), Vec2::ZERO, 0.2, 75.0);
        state.bombs.push(Bomb::new(body));
        slice_at(&mut state, Vec2::new(100.0, 100.0));

        for _ in 0..20 {
            tick(&mut state, &input());
        }
        assert_eq!(state.bombs.len(), 1);
        assert_eq!(state.beams.len(), 3);
        assert!(state.beams.iter().all(|b| b.length == 200.0));

        tick(&mut state, &input());
        assert!(state.bombs.is_empty());
        assert!(state.beams.is_empty());
    }

    #[test]
    fn test_splatters_fade_out() {
        let mut state = quiet_state();
        let body = Body::new(Vec2::new(300.0, 300.0), Vec2::ZERO, 0.0, 75.0);
        state.vegetables.push(Vegetable::new(VegetableKind::Pepper, body));
        slice_at(&mut state, Vec2::new(310.0, 310.0));
        assert_eq!(state.splatters.len(), 5);

        for _ in 0..102 {
            tick(&mut state, &input());
        }
        assert!(state.splatters.is_empty());
    }

    #[test]
    fn test_stopped_game_does_not_tick() {
        let mut state = GameState::new(9);
        state.stop();
        for _ in 0..100 {
            tick(&mut state, &input());
        }
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.live_entities(), 0);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(2024);
        let mut b = GameState::new(2024);
        for i in 0..1000 {
            tick(&mut a, &input());
            tick(&mut b, &input());
            let p = Vec2::new((i * 13 % 800) as f32, 300.0);
            slice_at(&mut a, p);
            slice_at(&mut b, p);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.max_combo, b.max_combo);
        assert_eq!(a.live_entities(), b.live_entities());
        assert_eq!(a.splatters.len(), b.splatters.len());
    }

    #[test]
    fn test_entities_leave_exactly_once() {
        // Long run: everything spawned must eventually exit and be culled
        let mut state = GameState::new(31);
        for _ in 0..2000 {
            tick(&mut state, &input());
        }
        state.assets = AssetPool::empty();
        for _ in 0..600 {
            tick(&mut state, &input());
        }
        assert_eq!(state.live_entities(), 0);
    }
}
