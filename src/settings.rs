//! Simulation settings
//!
//! Read-only. In the browser they come from an optional
//! `<script id="settings" type="application/json">` element on the page.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::ControlMode;

/// Failure to build [`Settings`] from JSON
#[derive(Debug)]
pub enum SettingsError {
    /// Not valid JSON, or wrong field types
    Parse(serde_json::Error),
    /// Parsed, but the values cannot produce a sane simulation
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "settings parse error: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Simulation settings; missing fields take the reference defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Balls ===
    /// Balls spawned at startup
    pub ball_count: usize,
    pub ball_radius_min: i32,
    pub ball_radius_max: i32,
    /// Velocity components are drawn from [-max, max] px/frame
    pub ball_speed_max: i32,

    // === Evil circle ===
    pub evil_radius: f32,
    /// Per-keystroke step in keyboard mode
    pub evil_step: f32,
    pub evil_line_width: f32,
    pub evil_color: String,
    /// Pointer/touch or keyboard, fixed for the session
    pub control_mode: ControlMode,

    // === Rendering ===
    /// Overlay painted each frame (translucent for trails)
    pub trail_color: String,

    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            ball_radius_min: BALL_RADIUS_MIN,
            ball_radius_max: BALL_RADIUS_MAX,
            ball_speed_max: BALL_SPEED_MAX,

            evil_radius: EVIL_RADIUS,
            evil_step: EVIL_STEP,
            evil_line_width: EVIL_LINE_WIDTH,
            evil_color: EVIL_COLOR.to_owned(),
            control_mode: ControlMode::default(),

            trail_color: TRAIL_COLOR.to_owned(),

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that break the simulation's invariants
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.ball_radius_min <= 0 {
            return Err(SettingsError::Invalid(format!(
                "ball_radius_min must be positive, got {}",
                self.ball_radius_min
            )));
        }
        if self.ball_radius_min > self.ball_radius_max {
            return Err(SettingsError::Invalid(format!(
                "ball_radius_min ({}) exceeds ball_radius_max ({})",
                self.ball_radius_min, self.ball_radius_max
            )));
        }
        if self.ball_speed_max < 0 {
            return Err(SettingsError::Invalid(format!(
                "ball_speed_max must not be negative, got {}",
                self.ball_speed_max
            )));
        }
        if self.evil_radius.is_nan() || self.evil_radius <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "evil_radius must be positive, got {}",
                self.evil_radius
            )));
        }
        if self.evil_step < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "evil_step must not be negative, got {}",
                self.evil_step
            )));
        }
        Ok(())
    }

    /// Element id holding the JSON settings
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "settings";

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(text) = text else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(settings) => {
                log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from an optional JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        let result = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::Invalid(format!("{}: {e}", path.display())))
            .and_then(|text| Self::from_json(&text));

        match result {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_reference_configuration() {
        let s = Settings::default();
        assert_eq!(s.ball_count, 25);
        assert_eq!((s.ball_radius_min, s.ball_radius_max), (10, 20));
        assert_eq!(s.ball_speed_max, 7);
        assert_eq!(s.evil_radius, 10.0);
        assert_eq!(s.evil_step, 20.0);
        assert_eq!(s.control_mode, ControlMode::Pointer);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "ball_count": 5, "control_mode": "keyboard" }"#)
            .expect("valid settings");
        assert_eq!(s.ball_count, 5);
        assert_eq!(s.control_mode, ControlMode::Keyboard);
        assert_eq!(s.evil_radius, EVIL_RADIUS);
        assert_eq!(s.trail_color, TRAIL_COLOR);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ ball_count: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_inverted_radius_range_rejected() {
        let err =
            Settings::from_json(r#"{ "ball_radius_min": 30, "ball_radius_max": 20 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        assert!(err.to_string().contains("ball_radius_min"));
    }

    #[test]
    fn test_non_positive_evil_radius_rejected() {
        let err = Settings::from_json(r#"{ "evil_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let s = Settings::load_from(Some(std::path::Path::new("/nonexistent/settings.json")));
        assert_eq!(s, Settings::default());
    }
}
