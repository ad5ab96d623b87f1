use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from an optional YAML file.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to (overridable via BIND_ADDR)
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Palette rows to seed the store with on startup. Empty means use
    /// the built-in default palette.
    #[serde(default)]
    pub seed_colors: Vec<SeedColor>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:4000".to_string()
}

/// One seed palette row (same field names as the colors API).
#[derive(Debug, Deserialize, Clone)]
pub struct SeedColor {
    pub name: String,
    pub hex_value: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed_colors: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults on
    /// any read or parse failure.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        bind_addr = %config.bind_addr,
                        seed_colors = config.seed_colors.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
