use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smogscan::{DEFAULT_TOP_N, Thresholds};

pub const DEFAULT_CONFIG_FILE: &str = "smogscan.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Map image to analyse.
    pub image: PathBuf,
    /// Directory receiving masks and reports.
    pub output_dir: PathBuf,
    pub upper_threshold: u8,
    pub lower_threshold: u8,
    /// Number of largest components written to the top-N mask.
    pub top_n: usize,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let thresholds = Thresholds::<u8>::default();
        Self {
            image: PathBuf::from("data/map.png"),
            output_dir: PathBuf::from("outputs"),
            upper_threshold: thresholds.upper,
            lower_threshold: thresholds.lower,
            top_n: DEFAULT_TOP_N,
            log_level: "info".to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Reads `path`, falling back to defaults when the file does not exist.
    /// A file that exists but fails to parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text)
                .with_context(|| format!("Invalid config file '{}'", path.display())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read config '{}'", path.display()))
            }
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn thresholds(&self) -> Thresholds<u8> {
        Thresholds::new(self.upper_threshold, self.lower_threshold)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
