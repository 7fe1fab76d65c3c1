use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    /// Probability that a non-border cell starts alive when seeding randomly.
    pub density: f64,
    /// Fixed RNG seed; set this for reproducible runs.
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DisplayConfig {
    pub alive_glyph: char,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                width: 40,
                height: 20,
                density: 0.3,
                seed: None,
            },
            display: DisplayConfig { alive_glyph: 'o' },
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the config file, falling back to defaults. A missing file is
    /// created with the defaults; a malformed one is reported and ignored.
    pub fn load(path: &str) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            match Self::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Warning: failed to parse {path}: {e}");
                }
            }
        }
        let default = Self::default();
        if !Path::new(path).exists() {
            if let Ok(toml_str) = toml::to_string(&default) {
                let _ = fs::write(path, toml_str);
            }
        }
        default
    }
}
