//! Scene drawing
//!
//! Turns a `GameState` into surface calls: entities, then particles and
//! beams, then the HUD on top.

use glam::Vec2;

use super::surface::{Half, Surface, TextStyle};
use crate::settings::Settings;
use crate::sim::effects::EffectKind;
use crate::sim::entity::{Bomb, EXPLOSION_COLOR, Vegetable};
use crate::sim::{GameState, HudSnapshot, Sprite};
use crate::{Rect, Rgba};

const SCORE_STYLE: TextStyle = TextStyle::new(20.0, Rgba::new(255, 255, 0, 1.0));
const COMBO_STYLE: TextStyle = TextStyle::new(20.0, Rgba::new(255, 255, 0, 1.0));
const MAX_COMBO_STYLE: TextStyle = TextStyle::new(20.0, Rgba::new(255, 165, 0, 1.0));
const DOUBLE_SCORE_STYLE: TextStyle = TextStyle::new(30.0, Rgba::new(0, 0, 255, 1.0));
const SLOW_MOTION_STYLE: TextStyle = TextStyle::new(30.0, Rgba::new(128, 0, 128, 1.0));

const BEAM_WIDTH: f32 = 5.0;

/// Draw one complete frame
pub fn draw_frame<S: Surface>(state: &GameState, surface: &mut S, settings: &Settings) {
    surface.clear();

    for veg in &state.vegetables {
        draw_vegetable(veg, surface);
    }
    for pu in &state.power_ups {
        surface.draw_sprite(Sprite::PowerUp(pu.kind), pu.body.rect());
    }
    for bomb in &state.bombs {
        draw_bomb(bomb, state, surface, settings);
    }

    // Oldest droplets are dropped first when over the cap
    let skip = state.splatters.len().saturating_sub(settings.max_splatters());
    for s in state.splatters.iter().skip(skip) {
        surface.fill_circle(s.pos, s.size, s.color.with_alpha(s.alpha));
    }

    for beam in state.beams.iter().filter(|b| b.active) {
        surface.stroke_line(beam.origin, beam.tip(), BEAM_WIDTH, Rgba::WHITE);
    }

    draw_hud(&state.hud(), surface, settings);
}

fn draw_vegetable<S: Surface>(veg: &Vegetable, surface: &mut S) {
    let sprite = veg.sprite();
    let rect = veg.body.rect();
    if !veg.sliced {
        surface.draw_sprite(sprite, rect);
        return;
    }

    let (w, h) = (rect.size.x, rect.size.y);
    let off = veg.slice_offset;

    let left_pivot = rect.min + Vec2::new(w / 4.0, h / 2.0);
    let left = Rect::new(-w / 4.0 - off.x, -h / 2.0 - off.y, w / 2.0, h);
    surface.draw_sprite_half(sprite, Half::Left, left_pivot, veg.rotation_left, left);

    let right_pivot = rect.min + Vec2::new(3.0 * w / 4.0, h / 2.0);
    let right = Rect::new(-w / 4.0 + off.x, -h / 2.0 + off.y, w / 2.0, h);
    surface.draw_sprite_half(sprite, Half::Right, right_pivot, veg.rotation_right, right);
}

fn draw_bomb<S: Surface>(bomb: &Bomb, state: &GameState, surface: &mut S, settings: &Settings) {
    if let Some(explosion) = bomb.explosion(&state.tuning) {
        let color = EXPLOSION_COLOR.with_alpha(explosion.alpha);
        surface.fill_circle(explosion.center, explosion.radius, color);
        return;
    }

    surface.draw_sprite(Sprite::Bomb, bomb.body.rect());
    if settings.effective_bomb_flash() {
        if let Some(color) = bomb.flash.overlay() {
            surface.tint_rect(bomb.body.rect(), color);
        }
    }
}

/// Score, combo and active-effect banners
pub fn draw_hud<S: Surface>(hud: &HudSnapshot, surface: &mut S, settings: &Settings) {
    surface.draw_text(&format!("Score: {}", hud.score), Vec2::new(10.0, 30.0), SCORE_STYLE);
    surface.draw_text(&format!("Combo: {}", hud.combo), Vec2::new(10.0, 50.0), COMBO_STYLE);
    surface.draw_text(
        &format!("Max Combo: {}", hud.max_combo),
        Vec2::new(10.0, 70.0),
        MAX_COMBO_STYLE,
    );

    if !settings.effect_banners {
        return;
    }
    let center_x = surface.size().x / 2.0;
    let banners = [
        (hud.double_score, EffectKind::DoubleScore, 50.0, DOUBLE_SCORE_STYLE),
        (hud.slow_motion, EffectKind::SlowMotion, 90.0, SLOW_MOTION_STYLE),
    ];
    for (active, kind, y, style) in banners {
        if let (true, Some(text)) = (active, kind.banner()) {
            surface.draw_text(text, Vec2::new(center_x, y), style);
        }
    }
}
