use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_addr: String,
    pub db_path: PathBuf,
    pub assets_dir: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            db_path: PathBuf::from("tangocho.db"),
            assets_dir: PathBuf::from("assets"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads a JSON config file, falling back to the defaults when no path
    /// was given or the file cannot be used.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|raw| {
            serde_json::from_str::<Config>(&raw).map_err(|e| e.to_string())
        }) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {e}. Using defaults.", path.display());
                Self::default()
            }
        }
    }
}
