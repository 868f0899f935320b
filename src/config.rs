//! Journal configuration loading and defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_journal_path() -> PathBuf {
    PathBuf::from(".floortime/journal.json")
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_font_path() -> PathBuf {
    PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf")
}

fn default_supersample() -> f32 {
    2.0
}

/// Journal configuration, stored as `.floortime.config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the durable answer file
    #[serde(default = "default_journal_path")]
    pub journal_path: PathBuf,

    /// Directory the exported PDF is written into
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// TTF font used by the export rasterizer
    #[serde(default = "default_font_path")]
    pub font_path: PathBuf,

    /// Supersampling factor applied when rasterizing for export
    #[serde(default = "default_supersample")]
    pub supersample: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journal_path: default_journal_path(),
            export_dir: default_export_dir(),
            font_path: default_font_path(),
            supersample: default_supersample(),
        }
    }
}

impl Config {
    /// Load config from a file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default location or fall back to defaults
    pub fn load_or_default() -> Self {
        Self::load(".floortime.config.json").unwrap_or_default()
    }
}
