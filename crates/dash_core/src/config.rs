use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::time::DEFAULT_FPS_SAMPLE_PERIOD;

/// Startup configuration shared by the scene builder and the loop driver.
///
/// Every field has a default, so a config file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub tick_interval_ms: u64,
    pub fps_sample_period: u32,
    pub background_scroll_rate: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Dash Loop".to_string(),
            canvas_width: 800,
            canvas_height: 600,
            tick_interval_ms: 41,
            fps_sample_period: DEFAULT_FPS_SAMPLE_PERIOD,
            background_scroll_rate: 5.0,
        }
    }
}

impl GameConfig {
    pub fn canvas_mid(&self) -> (f32, f32) {
        (
            self.canvas_width as f32 / 2.0,
            self.canvas_height as f32 / 2.0,
        )
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse config file {}: {e}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise (or on any error) use defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at '{}', using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => {
                log::info!("Loaded config from '{}'", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}. Falling back to default config.");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(format!(
                "Config validation failed: canvas size {}x{} must be non-zero",
                self.canvas_width, self.canvas_height
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err("Config validation failed: tick_interval_ms must be > 0".to_string());
        }
        if self.fps_sample_period == 0 {
            return Err("Config validation failed: fps_sample_period must be > 0".to_string());
        }
        if self.background_scroll_rate.is_nan() || self.background_scroll_rate < 0.0 {
            return Err(format!(
                "Config validation failed: background_scroll_rate {} must be >= 0",
                self.background_scroll_rate
            ));
        }
        Ok(())
    }
}
