//! Visual asset identities and the loaded-asset pool
//!
//! The simulation never touches image data. It only needs to know which
//! sprites exist (so spawned entities can be drawn) and their tint colors.

use super::effects::EffectKind;
use crate::Rgb;

/// Vegetable varieties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VegetableKind {
    Carrot,
    Tomato,
    Broccoli,
    Pepper,
}

impl VegetableKind {
    pub const ALL: [VegetableKind; 4] = [
        VegetableKind::Carrot,
        VegetableKind::Tomato,
        VegetableKind::Broccoli,
        VegetableKind::Pepper,
    ];

    /// Splatter color for this vegetable
    pub fn tint(&self) -> Rgb {
        match self {
            VegetableKind::Carrot => Rgb::new(255, 165, 0),
            VegetableKind::Tomato => Rgb::new(255, 0, 0),
            VegetableKind::Broccoli => Rgb::new(0, 255, 0),
            VegetableKind::Pepper => Rgb::new(255, 255, 0),
        }
    }
}

/// Handle for one image the frontend must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Vegetable(VegetableKind),
    PowerUp(EffectKind),
    Bomb,
}

impl Sprite {
    /// Every sprite, in a stable order
    pub fn all() -> impl Iterator<Item = Sprite> {
        VegetableKind::ALL
            .into_iter()
            .map(Sprite::Vegetable)
            .chain(EffectKind::ALL.into_iter().map(Sprite::PowerUp))
            .chain(std::iter::once(Sprite::Bomb))
    }
}

/// Sprites that have finished loading and can be spawned
#[derive(Debug, Clone, Default)]
pub struct AssetPool {
    pub vegetables: Vec<VegetableKind>,
    pub power_ups: Vec<EffectKind>,
    pub bomb: bool,
}

impl AssetPool {
    /// Empty pool - nothing is spawnable until sprites are marked loaded
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pool with every sprite available (headless runs and tests)
    pub fn all() -> Self {
        let mut pool = Self::empty();
        for sprite in Sprite::all() {
            pool.mark_loaded(sprite);
        }
        pool
    }

    /// Record that a sprite finished loading (idempotent)
    pub fn mark_loaded(&mut self, sprite: Sprite) {
        match sprite {
            Sprite::Vegetable(kind) => {
                if !self.vegetables.contains(&kind) {
                    self.vegetables.push(kind);
                }
            }
            Sprite::PowerUp(kind) => {
                if !self.power_ups.contains(&kind) {
                    self.power_ups.push(kind);
                }
            }
            Sprite::Bomb => self.bomb = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sprites() {
        assert_eq!(Sprite::all().count(), 8);
        let pool = AssetPool::all();
        assert_eq!(pool.vegetables.len(), 4);
        assert_eq!(pool.power_ups.len(), 3);
        assert!(pool.bomb);
    }

    #[test]
    fn test_mark_loaded_is_idempotent() {
        let mut pool = AssetPool::empty();
        pool.mark_loaded(Sprite::Vegetable(VegetableKind::Tomato));
        pool.mark_loaded(Sprite::Vegetable(VegetableKind::Tomato));
        assert_eq!(pool.vegetables, vec![VegetableKind::Tomato]);
        assert!(pool.power_ups.is_empty());
        assert!(!pool.bomb);
    }
}
