use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
    /// Ticks per second for the background event task
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f64,
    /// Frames per second for render events
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
}

fn default_tick_rate() -> f64 {
    4.0
}

fn default_frame_rate() -> f64 {
    30.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            _data_dir: PathBuf::default(),
            _config_dir: PathBuf::default(),
            tick_rate: default_tick_rate(),
            frame_rate: default_frame_rate(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub app: AppConfig,
}

impl Config {
    /// Load configuration: embedded defaults, then any user config file
    /// found under the config directory. A missing user config is fine;
    /// every key has a default.
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap())?
            .set_default("_config_dir", config_dir.to_str().unwrap())?
            .set_default("tick_rate", default_config.app.tick_rate)?
            .set_default("frame_rate", default_config.app.frame_rate)?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::debug!("No user configuration file found, using defaults");
        }

        let cfg: Self = builder.build()?.try_deserialize()?;

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_config_parses() {
        let config: Config = json5::from_str(CONFIG).expect("embedded default config is valid");
        assert!(config.app.tick_rate > 0.0);
        assert!(config.app.frame_rate > 0.0);
    }

    #[test]
    fn test_default_rates() {
        let config = Config::default();
        assert_eq!(config.app.tick_rate, 4.0);
        assert_eq!(config.app.frame_rate, 30.0);
    }

    #[test]
    fn test_new_falls_back_to_defaults() {
        // No user config is required for the app to start
        let config = Config::new().expect("config loads without a user file");
        assert!(config.app.tick_rate > 0.0);
        assert!(config.app.frame_rate > 0.0);
    }
}
