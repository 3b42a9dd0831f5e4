//! Pointer slicing
//!
//! Runs at pointer-move cadence, between ticks. Hits are gathered first and
//! applied afterwards so no list is touched while it is being walked.

use glam::Vec2;

use super::effects::{EffectKind, apply_effect};
use super::entity::FallingEntity;
use super::particles::emit_splatter;
use super::state::GameState;
use crate::Rgb;

/// What a single pointer position hit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceReport {
    pub vegetables: u32,
    pub power_ups: u32,
    pub bombs: u32,
    /// Points gained (before any bomb penalty)
    pub points: u64,
}

impl SliceReport {
    pub fn is_empty(&self) -> bool {
        self.vegetables == 0 && self.power_ups == 0 && self.bombs == 0
    }
}

/// A sliced vegetable waiting to be scored
struct VegetableHit {
    center: Vec2,
    tint: Rgb,
    effect: Option<EffectKind>,
}

/// Resolve a pointer position against every live entity
pub fn slice_at(state: &mut GameState, point: Vec2) -> SliceReport {
    let mut report = SliceReport::default();
    if !state.is_running() {
        return report;
    }

    let mut vegetable_hits = Vec::new();
    for veg in state.vegetables.iter_mut().filter(|v| v.hit_test(point)) {
        veg.slice(point);
        vegetable_hits.push(VegetableHit {
            center: veg.body.center(),
            tint: veg.kind.tint(),
            effect: veg.effect,
        });
    }

    let collected: Vec<EffectKind> = state
        .power_ups
        .iter_mut()
        .filter(|p| p.hit_test(point))
        .filter_map(|p| p.collect())
        .collect();

    let mut beams = Vec::new();
    for bomb in state.bombs.iter_mut().filter(|b| b.hit_test(point)) {
        if let Some(fan) = bomb.explode(&state.tuning) {
            log::debug!("Bomb sliced at {:?}", bomb.body.center());
            beams.extend(fan);
            report.bombs += 1;
        }
    }
    state.beams.extend(beams);

    for hit in vegetable_hits {
        report.vegetables += 1;
        match hit.effect {
            Some(effect) => apply_effect(state, effect),
            None => {
                let drops = emit_splatter(&mut state.rng, hit.center, hit.tint, &state.tuning);
                state.splatters.extend(drops);
                report.points += score_slice(state);
            }
        }
    }

    for effect in collected {
        report.power_ups += 1;
        apply_effect(state, effect);
    }

    for _ in 0..report.bombs {
        apply_bomb_penalty(state);
    }

    report
}

/// Score one vegetable slice and return the points awarded.
///
/// The combo is bumped first, so the slice that reaches the threshold is
/// already multiplied.
pub fn score_slice(state: &mut GameState) -> u64 {
    state.add_combo(1);

    let tuning = &state.tuning;
    let mut points = tuning.base_points;
    if state.combo >= tuning.combo_threshold {
        points *= tuning.combo_multiplier;
    }
    if state.effects.double_score_active() {
        points *= tuning.double_score_multiplier;
    }

    state.score += points;
    points
}

/// Slicing a bomb breaks the combo and costs points, never below zero
pub fn apply_bomb_penalty(state: &mut GameState) {
    state.reset_combo();
    state.score = state.score.saturating_sub(state.tuning.bomb_penalty);
}
