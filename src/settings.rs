//! Presentation preferences
//!
//! Persisted separately from gameplay tuning in LocalStorage. Nothing here
//! changes the simulation; it only decides what gets drawn.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Parse a preset name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Preset named by a `quality=` pair in a URL query string
    pub fn from_query(query: &str) -> Option<Self> {
        query
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("quality="))
            .and_then(Self::from_name)
    }

    /// Maximum splatter particles drawn per frame for this preset
    pub fn max_splatters(&self) -> usize {
        match self {
            QualityPreset::Low => 50,
            QualityPreset::Medium => 300,
            QualityPreset::High => 2000,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Splatter particles on slice
    pub particles: bool,
    /// Warning flash on falling bombs
    pub bomb_flash: bool,

    // === HUD ===
    /// "Double Score Active!" style banners
    pub effect_banners: bool,

    // === Accessibility ===
    /// Reduced motion (no flashing)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            bomb_flash: true,
            effect_banners: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;

        // Low preset drops the flash overlay, which costs a composite pass per bomb
        if preset == QualityPreset::Low {
            self.bomb_flash = false;
        }
    }

    /// Effective bomb flash (respects reduced_motion)
    pub fn effective_bomb_flash(&self) -> bool {
        self.bomb_flash && !self.reduced_motion
    }

    /// Effective splatter cap
    pub fn max_splatters(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_splatters()
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "veggie_slice_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Failed to save settings: {:?}", e),
                }
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_disables_flash() {
        let mut settings = Settings::default();
        assert!(settings.effective_bomb_flash());
        settings.reduced_motion = true;
        assert!(!settings.effective_bomb_flash());
    }

    #[test]
    fn test_low_preset() {
        let mut settings = Settings::default();
        settings.apply_preset(QualityPreset::Low);
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(!settings.bomb_flash);
        assert_eq!(settings.max_splatters(), 50);
    }

    #[test]
    fn test_preset_from_query() {
        assert_eq!(QualityPreset::from_query("?quality=low"), Some(QualityPreset::Low));
        assert_eq!(
            QualityPreset::from_query("?seed=4&quality=High"),
            Some(QualityPreset::High)
        );
        assert_eq!(QualityPreset::from_query("?quality=ultra"), None);
        assert_eq!(QualityPreset::from_query(""), None);
        assert_eq!(QualityPreset::from_name("MEDIUM"), Some(QualityPreset::Medium));
    }

    #[test]
    fn test_particles_off_caps_to_zero() {
        let settings = Settings {
            particles: false,
            ..Default::default()
        };
        assert_eq!(settings.max_splatters(), 0);
    }

    #[test]
    fn test_settings_json_roundtrip_with_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{ "quality": "High" }"#).unwrap();
        assert_eq!(settings.quality, QualityPreset::High);
        assert!(settings.particles);
        assert!(settings.effect_banners);
    }
}
