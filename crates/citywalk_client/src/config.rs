//! Client configuration (RON)
//!
//! Loaded from `citywalk.ron` in the working directory. A missing file is
//! normal (defaults apply); a malformed file logs the parse error and
//! falls back to defaults — no retry, no partial merge.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub resolution: (f32, f32),
    pub city: CityConfig,
    pub player: PlayerConfig,
    pub props: PropsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CityConfig {
    /// Asset path, resolved against the assets directory
    pub model: String,
    pub scale: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    /// Walking speed (m/s)
    pub speed: f32,
    pub spawn: (f32, f32, f32),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PropsConfig {
    pub count: usize,
    pub seed: u64,
    /// Crates land within a square of this half-size around the origin
    pub half_area: f32,
    pub drop_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "citywalk".to_string(),
            resolution: (1280.0, 720.0),
            city: CityConfig::default(),
            player: PlayerConfig::default(),
            props: PropsConfig::default(),
        }
    }
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            model: "models/city.glb".to_string(),
            scale: 0.5,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "walker".to_string(),
            speed: 5.0,
            spawn: (0.0, 0.9, 4.0),
        }
    }
}

impl Default for PropsConfig {
    fn default() -> Self {
        Self {
            count: 12,
            seed: 42,
            half_area: 15.0,
            drop_height: 6.0,
        }
    }
}

impl AppConfig {
    /// Read and parse the config file, defaulting on any failure.
    ///
    /// Runs before the App (window settings feed into `WindowPlugin`), so
    /// errors go to stderr rather than the not-yet-installed log layer.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match ron::from_str(&text) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("citywalk: invalid config {path}: {err}; using defaults");
                    Self::default()
                }
            },
            // Missing file is the normal zero-config case
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let text = r#"(
            window_title: "demo",
            resolution: (800.0, 600.0),
            city: (model: "models/town.glb", scale: 1.0),
            player: (name: "p1", speed: 3.5, spawn: (1.0, 0.9, 2.0)),
            props: (count: 4, seed: 7, half_area: 10.0, drop_height: 3.0),
        )"#;

        let config: AppConfig = ron::from_str(text).unwrap();
        assert_eq!(config.window_title, "demo");
        assert_eq!(config.city.model, "models/town.glb");
        assert_eq!(config.props.seed, 7);
        assert!((config.player.speed - 3.5).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: AppConfig = ron::from_str(r#"(window_title: "just-a-title")"#).unwrap();
        assert_eq!(config.window_title, "just-a-title");
        assert_eq!(config.city.model, "models/city.glb");
        assert_eq!(config.props.count, 12);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert!(ron::from_str::<AppConfig>("not ron at all {{{").is_err());

        let config = AppConfig::load_or_default("/nonexistent/citywalk.ron");
        assert_eq!(config.window_title, "citywalk");
    }
}
