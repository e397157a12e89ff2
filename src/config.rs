use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub backlog: u32,
    /// HTML file served for `GET /` and `GET /index.html`
    pub index_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            backlog: 5,
            index_file: PathBuf::from("index.html"),
        }
    }
}

impl Config {
    /// Defaults, overridden by the `LISTEN` and `INDEX_FILE` environment
    /// variables.
    pub fn load() -> Self {
        let mut cfg = Self::default();
        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.listen_addr = listen_addr;
        }
        if let Ok(index_file) = std::env::var("INDEX_FILE") {
            cfg.index_file = PathBuf::from(index_file);
        }
        cfg
    }

    pub fn from_yaml_str(s: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(s).context("Invalid configuration")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }
}
