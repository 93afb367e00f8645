use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// User defaults, read from `config.toml` in the platform config directory.
/// Command-line flags take precedence over every value here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Column width of the `align` info report.
    #[serde(default = "default_describe_width")]
    pub describe_width: usize,
    /// Residues per line for FASTA output.
    #[serde(default)]
    pub line_wrap: Option<usize>,
    /// Where temporary output is staged. Defaults to the destination's own
    /// directory; a directory on another filesystem makes the final rename fail.
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

fn default_describe_width() -> usize {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            describe_width: default_describe_width(),
            line_wrap: None,
            temp_dir: None,
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("org", "seqmorph", "seqmorph")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Self {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Config::default(),
        }
    }

    /// Read a config file, falling back to defaults if it is unreadable.
    pub fn load_from(path: &Path) -> Self {
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
