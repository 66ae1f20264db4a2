use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// World definition to load on startup
    #[serde(default = "default_world_path")]
    pub world_path: String,
    /// Suffix of the numbered prompt, e.g. `"> "` in `"3> "`
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_world_path() -> String {
    "worlds/house.yaml".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env");
        let cfg = Self {
            world_path: std::env::var("FROBITZ_WORLD").unwrap_or_else(|_| default_world_path()),
            prompt: std::env::var("FROBITZ_PROMPT").unwrap_or_else(|_| default_prompt()),
        };
        Ok(cfg)
    }
}
