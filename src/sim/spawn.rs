//! Per-tick stochastic spawning
//!
//! Each class rolls independently every tick. Everything launches from the
//! bottom edge at a random x, moving up.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::entity::{Body, Bomb, PowerUp, Vegetable};
use super::state::GameState;

/// Roll for new vegetables, power-ups and bombs.
///
/// A class whose sprites have not loaded yet still rolls but spawns nothing.
pub fn spawn_entities(state: &mut GameState, bounds: Vec2) {
    let GameState {
        rng,
        tuning,
        assets,
        vegetables,
        power_ups,
        bombs,
        game_speed,
        ..
    } = state;
    let speed = *game_speed;
    let gravity = tuning.gravity * speed;
    let size = tuning.entity_size;

    if rng.random::<f32>() < tuning.vegetable_spawn_chance * speed {
        if let Some(&kind) = assets.vegetables.choose(rng) {
            let pos = Vec2::new(rng.random::<f32>() * bounds.x, bounds.y);
            let vx = (rng.random::<f32>() - 0.5) * 2.0 * tuning.vegetable_drift * speed;
            let vy = -rng.random::<f32>() * tuning.vegetable_launch_spread * speed
                - tuning.vegetable_launch_speed;
            vegetables.push(Vegetable::new(kind, Body::new(pos, Vec2::new(vx, vy), gravity, size)));
        }
    }

    if rng.random::<f32>() < tuning.power_up_spawn_chance * speed {
        if let Some(&kind) = assets.power_ups.choose(rng) {
            let pos = Vec2::new(rng.random::<f32>() * bounds.x, bounds.y);
            let vy = -rng.random::<f32>() * tuning.item_launch_spread - tuning.item_launch_speed;
            power_ups.push(PowerUp::new(kind, Body::new(pos, Vec2::new(0.0, vy), gravity, size)));
        }
    }

    if rng.random::<f32>() < tuning.bomb_spawn_chance * speed && assets.bomb {
        let pos = Vec2::new(rng.random::<f32>() * bounds.x, bounds.y);
        let vy = -rng.random::<f32>() * tuning.item_launch_spread - tuning.item_launch_speed;
        bombs.push(Bomb::new(Body::new(pos, Vec2::new(0.0, vy), gravity, size)));
    }
}
