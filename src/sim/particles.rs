//! Decorative effects: slice splatter and bomb beams
//!
//! Neither affects gameplay. Both are pruned by the tick once spent.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use rand::Rng;

use crate::Rgb;
use crate::tuning::Tuning;

/// Beam fan directions (radians, y down): level, then down-right, then up-right
pub const BEAM_ANGLES: [f32; 3] = [0.0, FRAC_PI_4, -FRAC_PI_4];

/// A juice droplet from a slice
#[derive(Debug, Clone)]
pub struct Splatter {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    pub size: f32,
    /// 1 = opaque, removed at 0
    pub alpha: f32,
}

impl Splatter {
    pub fn update(&mut self, fade: f32) {
        self.pos += self.vel;
        self.alpha -= fade;
    }

    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}

/// Burst of droplets around `center`
pub fn emit_splatter<R: Rng>(rng: &mut R, center: Vec2, color: Rgb, tuning: &Tuning) -> Vec<Splatter> {
    let jitter = tuning.splatter_jitter;
    let speed = tuning.splatter_speed;

    (0..tuning.splatter_count)
        .map(|_| {
            let offset = Vec2::new(rng.random_range(-jitter..=jitter), rng.random_range(-jitter..=jitter));
            let vel = Vec2::new(rng.random_range(-speed..=speed), rng.random_range(-speed..=speed));
            let size = rng.random_range(tuning.splatter_min_size..=tuning.splatter_max_size);
            Splatter {
                pos: center + offset,
                vel,
                color,
                size,
                alpha: 1.0,
            }
        })
        .collect()
}

/// Expanding line from a bomb explosion
#[derive(Debug, Clone)]
pub struct Beam {
    pub origin: Vec2,
    pub angle: f32,
    pub length: f32,
    pub max_length: f32,
    pub speed: f32,
    pub active: bool,
}

impl Beam {
    pub fn new(origin: Vec2, angle: f32, tuning: &Tuning) -> Self {
        Self {
            origin,
            angle,
            length: 0.0,
            max_length: tuning.beam_max_length,
            speed: tuning.beam_speed,
            active: true,
        }
    }

    /// Grow toward max length; the tick after reaching it the beam goes out
    pub fn update(&mut self) {
        if self.length < self.max_length {
            self.length = (self.length + self.speed).min(self.max_length);
        } else {
            self.active = false;
        }
    }

    /// Far end of the beam
    pub fn tip(&self) -> Vec2 {
        self.origin + Vec2::from_angle(self.angle) * self.length
    }
}

/// The three beams of one explosion
pub fn beam_fan(origin: Vec2, tuning: &Tuning) -> [Beam; 3] {
    BEAM_ANGLES.map(|angle| Beam::new(origin, angle, tuning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_splatter_burst_bounds() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(99);
        let center = Vec2::new(300.0, 200.0);
        let drops = emit_splatter(&mut rng, center, Rgb::new(255, 0, 0), &tuning);

        assert_eq!(drops.len(), 5);
        for d in &drops {
            assert!((d.pos.x - center.x).abs() <= 10.0);
            assert!((d.pos.y - center.y).abs() <= 10.0);
            assert!(d.vel.x.abs() <= 1.0 && d.vel.y.abs() <= 1.0);
            assert!((5.0..=15.0).contains(&d.size));
            assert_eq!(d.alpha, 1.0);
            assert_eq!(d.color, Rgb::new(255, 0, 0));
        }
    }

    #[test]
    fn test_splatter_fades_out_in_about_100_ticks() {
        let mut drop = Splatter {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -0.5),
            color: Rgb::new(0, 255, 0),
            size: 8.0,
            alpha: 1.0,
        };
        let mut ticks = 0;
        while drop.is_alive() {
            drop.update(0.01);
            ticks += 1;
        }
        // Float accumulation can land either side of exactly 100
        assert!((99..=101).contains(&ticks));
        assert!((drop.pos.x - ticks as f32).abs() < 1e-3);
    }

    #[test]
    fn test_beam_reaches_max_after_20_ticks() {
        let tuning = Tuning::default();
        let mut beam = Beam::new(Vec2::new(100.0, 100.0), 0.0, &tuning);
        assert_eq!(beam.length, 0.0);

        for _ in 0..20 {
            beam.update();
            assert!(beam.active);
        }
        assert_eq!(beam.length, 200.0);
        assert!((beam.tip() - Vec2::new(300.0, 100.0)).length() < 1e-3);

        beam.update();
        assert!(!beam.active);
        assert_eq!(beam.length, 200.0);
    }

    #[test]
    fn test_beam_fan_angles() {
        let fan = beam_fan(Vec2::new(137.5, 137.5), &Tuning::default());
        let angles: Vec<f32> = fan.iter().map(|b| b.angle).collect();
        assert_eq!(angles, vec![0.0, FRAC_PI_4, -FRAC_PI_4]);
        assert!(fan.iter().all(|b| b.origin == Vec2::new(137.5, 137.5) && b.active));
    }
}
