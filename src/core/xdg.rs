//! Config directory lookup following the XDG base directory layout.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "places";

/// Where the places config file is looked up
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve the config directory from the environment
    ///
    /// `PLACES_CONFIG_DIR` is used as-is; otherwise `places/` under
    /// `XDG_CONFIG_HOME`, falling back to `~/.config/places`.
    pub fn new() -> Self {
        let config_dir = match (env::var_os("PLACES_CONFIG_DIR"), env::var_os("XDG_CONFIG_HOME")) {
            (Some(dir), _) => PathBuf::from(dir),
            (None, Some(base)) => PathBuf::from(base).join(APP_DIR),
            (None, None) => dirs::config_dir()
                .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
        };

        Self { config_dir }
    }

    /// Path of the config file inside the config directory
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
