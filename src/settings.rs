//! Page settings
//!
//! Read once at startup from the canvas `data-settings` attribute (JSON).
//! Missing fields fall back to their defaults; nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::scene::draw::{Color, palette};
use crate::scene::tracker::TrackerParams;

/// Top border palette variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderVariant {
    /// Red, yellow, green
    #[default]
    Classic,
    /// Blue, red, yellow, green
    Full,
}

const CLASSIC_BORDER: [Color; 3] = [palette::RED, palette::YELLOW, palette::GREEN];
const FULL_BORDER: [Color; 4] = [palette::BLUE, palette::RED, palette::YELLOW, palette::GREEN];

impl BorderVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderVariant::Classic => "classic",
            BorderVariant::Full => "full",
        }
    }

    /// Segment colors, left to right
    pub fn palette(&self) -> &'static [Color] {
        match self {
            BorderVariant::Classic => &CLASSIC_BORDER,
            BorderVariant::Full => &FULL_BORDER,
        }
    }
}

/// Page settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Top border variant
    pub border: BorderVariant,
    /// Pupil tracking curve
    pub tracker: TrackerParams,
    /// Log the rolling frame rate once per second (debug level)
    pub log_fps: bool,
    /// Minimum log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            border: BorderVariant::Classic,
            tracker: TrackerParams::default(),
            log_fps: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Canvas attribute holding the JSON settings object
    pub const ATTRIBUTE: &'static str = "data-settings";

    /// Parse settings from a JSON object; absent fields keep their defaults
    /// and out-of-range tracker values are reset to theirs
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.tracker = settings.tracker.sanitized();
        Ok(settings)
    }

    /// Parse settings, logging and falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Configured log level, `Info` if unrecognized
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load settings from the canvas element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::Element) -> Self {
        match canvas.get_attribute(Self::ATTRIBUTE) {
            Some(json) => Self::from_json_or_default(&json),
            None => Self::default(),
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.border, BorderVariant::Classic);
        assert_eq!(settings.tracker.max_offset, 12.0);
        assert_eq!(settings.tracker.falloff_radius, 100.0);
        assert_eq!(settings.level(), log::Level::Info);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings =
            Settings::from_json(r#"{"border":"full","tracker":{"max_offset":8}}"#).unwrap();
        assert_eq!(settings.border, BorderVariant::Full);
        assert_eq!(settings.tracker.max_offset, 8.0);
        assert_eq!(settings.tracker.falloff_radius, 100.0);
        assert!(!settings.log_fps);
    }

    #[test]
    fn test_malformed_falls_back() {
        assert!(Settings::from_json("{border:").is_err());
        assert_eq!(Settings::from_json_or_default("not json"), Settings::default());
    }

    #[test]
    fn test_negative_tracker_values_reset() {
        let eye = Vec2::new(100.0, 100.0);
        let pointer = Vec2::new(150.0, 100.0);
        for json in [
            r#"{"tracker":{"falloff_radius":-100}}"#,
            r#"{"tracker":{"max_offset":-12}}"#,
            r#"{"tracker":{"max_offset":0,"falloff_radius":0}}"#,
        ] {
            let settings = Settings::from_json(json).unwrap();
            assert_eq!(settings.tracker, TrackerParams::default(), "{}", json);
            let offset = settings.tracker.offset(eye, pointer);
            assert!(offset.dot(pointer - eye) > 0.0, "{}: {:?}", json, offset);
            assert!(offset.length() <= settings.tracker.max_offset + 1e-4);
        }
    }

    #[test]
    fn test_level_parsing() {
        let settings = Settings {
            log_level: "debug".into(),
            ..Default::default()
        };
        assert_eq!(settings.level(), log::Level::Debug);
        let settings = Settings {
            log_level: "loud".into(),
            ..Default::default()
        };
        assert_eq!(settings.level(), log::Level::Info);
    }

    #[test]
    fn test_variant_palettes() {
        assert_eq!(BorderVariant::Classic.palette().len(), 3);
        assert_eq!(BorderVariant::Full.palette().len(), 4);
        assert_eq!(BorderVariant::Full.palette()[0], palette::BLUE);
        assert_eq!(BorderVariant::Full.as_str(), "full");
    }
}
