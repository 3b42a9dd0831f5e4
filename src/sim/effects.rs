//! Timed power-up effects
//!
//! Double score and slow motion are windows with an explicit expiry tick,
//! polled once per tick. Re-activating an effect restarts its window; it
//! never stacks a second window on top.

use super::state::GameState;

/// Power-up effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Slices score ×5 for a while
    DoubleScore,
    /// Halves game speed for a while
    SlowMotion,
    /// Immediate combo bonus
    InstantCombo,
}

impl EffectKind {
    pub const ALL: [EffectKind; 3] = [
        EffectKind::DoubleScore,
        EffectKind::SlowMotion,
        EffectKind::InstantCombo,
    ];

    /// HUD banner text while the effect runs (one-shot effects have none)
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            EffectKind::DoubleScore => Some("Double Score Active!"),
            EffectKind::SlowMotion => Some("Slow Motion Active!"),
            EffectKind::InstantCombo => None,
        }
    }
}

/// A running slow-motion window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlowMotion {
    /// Tick at which the window closes
    pub expires_at: u64,
    /// Speed to restore when the window closes
    pub baseline_speed: f32,
}

/// Active timed effects
#[derive(Debug, Clone, Default)]
pub struct TimedEffects {
    /// Tick at which double score ends
    pub double_score_until: Option<u64>,
    pub slow_motion: Option<SlowMotion>,
}

impl TimedEffects {
    pub fn double_score_active(&self) -> bool {
        self.double_score_until.is_some()
    }

    pub fn slow_motion_active(&self) -> bool {
        self.slow_motion.is_some()
    }

    /// Start (or restart) the double-score window
    pub fn activate_double_score(&mut self, now: u64, duration: u64) {
        self.double_score_until = Some(now.saturating_add(duration));
    }

    /// Start (or restart) slow motion and return the new game speed.
    ///
    /// The baseline is captured only when no window is running, so a second
    /// pickup mid-window extends it without halving again and expiry still
    /// lands on the speed from before the first pickup.
    pub fn activate_slow_motion(
        &mut self,
        now: u64,
        duration: u64,
        current_speed: f32,
        factor: f32,
    ) -> f32 {
        let expires_at = now.saturating_add(duration);
        match &mut self.slow_motion {
            Some(slow) => {
                slow.expires_at = expires_at;
                current_speed
            }
            None => {
                self.slow_motion = Some(SlowMotion {
                    expires_at,
                    baseline_speed: current_speed,
                });
                current_speed * factor
            }
        }
    }

    /// Close every window whose expiry tick has been reached.
    ///
    /// Returns the speed to restore when slow motion ends this tick.
    pub fn expire(&mut self, now: u64) -> Option<f32> {
        if self.double_score_until.is_some_and(|until| now >= until) {
            self.double_score_until = None;
            log::debug!("Double score expired at tick {}", now);
        }

        match self.slow_motion {
            Some(slow) if now >= slow.expires_at => {
                self.slow_motion = None;
                log::debug!(
                    "Slow motion expired at tick {}, speed back to {}",
                    now,
                    slow.baseline_speed
                );
                Some(slow.baseline_speed)
            }
            _ => None,
        }
    }
}

/// Apply a power-up effect to the game.
///
/// The single dispatch point for both dedicated power-up entities and
/// effect-carrying vegetables.
pub fn apply_effect(state: &mut GameState, kind: EffectKind) {
    let now = state.time_ticks;
    let duration = state.tuning.effect_duration_ticks;

    match kind {
        EffectKind::DoubleScore => {
            state.effects.activate_double_score(now, duration);
        }
        EffectKind::SlowMotion => {
            state.game_speed = state.effects.activate_slow_motion(
                now,
                duration,
                state.game_speed,
                state.tuning.slow_motion_factor,
            );
        }
        EffectKind::InstantCombo => {
            state.add_combo(state.tuning.instant_combo_bonus);
        }
    }

    log::debug!("Applied {:?} at tick {} (speed {})", kind, now, state.game_speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::AssetPool;
    use crate::sim::tick::{TickInput, tick};

    fn quiet_state() -> GameState {
        let mut state = GameState::new(7);
        // Nothing loaded means nothing spawns, so only effects change
        state.assets = AssetPool::empty();
        state
    }

    #[test]
    fn test_double_score_restart_does_not_stack() {
        let mut effects = TimedEffects::default();
        effects.activate_double_score(0, 600);
        effects.activate_double_score(300, 600);
        assert_eq!(effects.double_score_until, Some(900));

        assert!(effects.expire(899).is_none());
        assert!(effects.double_score_active());
        effects.expire(900);
        assert!(!effects.double_score_active());
    }

    #[test]
    fn test_unbounded_duration_saturates() {
        let mut effects = TimedEffects::default();
        effects.activate_double_score(5, u64::MAX);
        assert_eq!(effects.double_score_until, Some(u64::MAX));

        let speed = effects.activate_slow_motion(5, u64::MAX, 1.0, 0.5);
        assert_eq!(speed, 0.5);
        assert_eq!(effects.slow_motion.map(|s| s.expires_at), Some(u64::MAX));
        assert!(effects.expire(1_000_000).is_none());
    }

    #[test]
    fn test_slow_motion_restores_exact_speed() {
        let mut state = quiet_state();
        state.game_speed = 1.3;
        apply_effect(&mut state, EffectKind::SlowMotion);
        assert!((state.game_speed - 0.65).abs() < 1e-6);
        assert!(state.effects.slow_motion_active());

        let input = TickInput::default();
        for _ in 0..599 {
            tick(&mut state, &input);
        }
        assert!(state.effects.slow_motion_active());
        assert!((state.game_speed - 0.65).abs() < 1e-6);

        tick(&mut state, &input);
        assert!(!state.effects.slow_motion_active());
        assert_eq!(state.game_speed, 1.3);
    }

    #[test]
    fn test_nested_slow_motion_keeps_baseline() {
        let mut state = quiet_state();
        apply_effect(&mut state, EffectKind::SlowMotion);
        assert_eq!(state.game_speed, 0.5);

        let input = TickInput::default();
        for _ in 0..300 {
            tick(&mut state, &input);
        }
        apply_effect(&mut state, EffectKind::SlowMotion);
        // Extended, not halved again
        assert_eq!(state.game_speed, 0.5);
        assert_eq!(state.effects.slow_motion.map(|s| s.expires_at), Some(900));

        for _ in 0..600 {
            tick(&mut state, &input);
        }
        assert_eq!(state.game_speed, 1.0);
    }

    #[test]
    fn test_instant_combo_raises_max_combo() {
        let mut state = quiet_state();
        state.combo = 3;
        state.max_combo = 4;
        apply_effect(&mut state, EffectKind::InstantCombo);
        assert_eq!(state.combo, 13);
        assert_eq!(state.max_combo, 13);
        assert!(!state.effects.double_score_active());
        assert!(!state.effects.slow_motion_active());
    }

    #[test]
    fn test_banners() {
        assert!(EffectKind::DoubleScore.banner().is_some());
        assert!(EffectKind::SlowMotion.banner().is_some());
        assert!(EffectKind::InstantCombo.banner().is_none());
    }
}
