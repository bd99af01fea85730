use std::time::Duration;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILE: &str = "animation.json";

pub const GALLERY_LAYER_COUNT: usize = 5;

#[derive(Embed)]
#[folder = "config"]
struct ConfigAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Couldn't parse animation config: {0}")]
    Parse(String),
    #[error("Invalid animation config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Timing and distance constants for the page animations.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationConfig {
    pub entrance_delay_ms: u64,
    pub hero_fade_distance_px: f64,
    pub gallery_fade_threshold: f64,
    pub max_parallax_px: f64,
    pub hero_text_speed: f64,
    pub hero_image_speed: f64,
    /// Speed multiplier per gallery image, in stage order.
    pub gallery_layer_speeds: [f64; GALLERY_LAYER_COUNT],
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            entrance_delay_ms: 100,
            hero_fade_distance_px: 500.0,
            gallery_fade_threshold: 0.6,
            max_parallax_px: 400.0,
            hero_text_speed: 0.8,
            hero_image_speed: 0.4,
            gallery_layer_speeds: [0.5, 0.3, 0.45, 0.35, 0.3],
        }
    }
}

impl AnimationConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the embedded config, falling back to the defaults.
    pub fn load() -> Self {
        match Self::load_embedded() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default animation config");
                Self::default()
            }
        }
    }

    fn load_embedded() -> Result<Self, ConfigError> {
        let file = ConfigAssets::get(CONFIG_FILE)
            .ok_or_else(|| ConfigError::Parse(format!("{CONFIG_FILE} not found")))?;
        let raw = std::str::from_utf8(&file.data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_json(raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.hero_fade_distance_px.is_finite() && self.hero_fade_distance_px > 0.0) {
            return Err(ConfigError::Invalid {
                field: "heroFadeDistancePx",
                reason: "must be a positive number",
            });
        }
        if !(0.0..1.0).contains(&self.gallery_fade_threshold) {
            return Err(ConfigError::Invalid {
                field: "galleryFadeThreshold",
                reason: "must be in [0, 1)",
            });
        }
        if !(self.max_parallax_px.is_finite() && self.max_parallax_px >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "maxParallaxPx",
                reason: "must not be negative",
            });
        }
        for (field, speed) in [
            ("heroTextSpeed", self.hero_text_speed),
            ("heroImageSpeed", self.hero_image_speed),
        ]
        .into_iter()
        .chain(
            self.gallery_layer_speeds
                .into_iter()
                .map(|speed| ("galleryLayerSpeeds", speed)),
        ) {
            if !(speed.is_finite() && speed >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be negative",
                });
            }
        }
        Ok(())
    }

    pub fn entrance_delay(&self) -> Duration {
        Duration::from_millis(self.entrance_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnimationConfig::default();
        assert_eq!(config.entrance_delay(), Duration::from_millis(100));
        assert_eq!(config.hero_fade_distance_px, 500.0);
        assert_eq!(config.gallery_fade_threshold, 0.6);
        assert_eq!(config.max_parallax_px, 400.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(AnimationConfig::load(), AnimationConfig::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AnimationConfig::from_json(r#"{ "heroFadeDistancePx": 300 }"#).unwrap();
        assert_eq!(config.hero_fade_distance_px, 300.0);
        assert_eq!(config.entrance_delay_ms, 100);
        assert_eq!(config.gallery_fade_threshold, 0.6);
    }

    #[test]
    fn test_malformed_json() {
        let err = AnimationConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_fade_distance() {
        let err = AnimationConfig::from_json(r#"{ "heroFadeDistancePx": 0 }"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                field: "heroFadeDistancePx",
                reason: "must be a positive number",
            }
        );
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        for raw in [
            r#"{ "galleryFadeThreshold": 1.0 }"#,
            r#"{ "galleryFadeThreshold": -0.1 }"#,
        ] {
            let err = AnimationConfig::from_json(raw).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Invalid {
                    field: "galleryFadeThreshold",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_gallery_speeds_from_json() {
        let config = AnimationConfig::from_json(
            r#"{ "galleryLayerSpeeds": [0.1, 0.2, 0.3, 0.4, 0.5] }"#,
        )
        .unwrap();
        assert_eq!(config.gallery_layer_speeds, [0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(config.hero_text_speed, 0.8);
    }

    #[test]
    fn test_rejects_wrong_gallery_speed_count() {
        let err = AnimationConfig::from_json(r#"{ "galleryLayerSpeeds": [0.1, 0.2] }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_negative_gallery_speed() {
        let err = AnimationConfig::from_json(
            r#"{ "galleryLayerSpeeds": [0.5, 0.3, -0.45, 0.35, 0.3] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "galleryLayerSpeeds",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let err = AnimationConfig::from_json(r#"{ "heroImageSpeed": -0.4 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "heroImageSpeed",
                ..
            }
        ));
    }
}
