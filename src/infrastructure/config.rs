//! Configuration loading
//!
//! Defaults are embedded from `.config/config.json5` and merged under any
//! user config file found in the platform config directory. Keybindings and
//! styles merge per entry; the window list is replaced wholesale when the
//! user provides one.

use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::model::desktop::DesktopWindow;
use crate::presentation::config::{KeyBindings, Styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub windows: Vec<DesktopWindow>,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

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
            log::info!("No user configuration file found; using built-in defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (class, style) in default_config.styles.iter() {
            cfg.styles.entry(class.clone()).or_insert_with(|| *style);
        }

        if cfg.windows.is_empty() {
            cfg.windows.clone_from(&default_config.windows);
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let config: Config = json5::from_str(CONFIG).expect("embedded config is valid");
        assert!(!config.keybindings.is_empty());
        assert!(!config.styles.is_empty());
        assert!(!config.windows.is_empty());
    }

    #[test]
    fn test_default_windows_have_titles() {
        let config: Config = json5::from_str(CONFIG).expect("embedded config is valid");
        assert!(config.windows.iter().any(|w| w.title.is_some()));
    }

    #[test]
    fn test_config_new_falls_back_to_defaults() {
        // With or without a user config file present, loading must succeed
        // and carry the default keybindings.
        let cfg = Config::new().expect("config loads");
        assert!(!cfg.keybindings.is_empty());
        assert!(!cfg.windows.is_empty());
    }
}
