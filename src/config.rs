// Configuration for the detector and the command-line harness
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Hints never exceed this many, whatever the config says.
pub const MAX_HINTS: usize = 3;

/// Editor-sized source; anything past this is not scanned.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 256 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsDoctorConfig {
    /// Only the first `max_input_bytes` of a source text are pattern-matched
    pub max_input_bytes: usize,
    pub max_hints: usize,
    /// Default output mode for the CLI: "human", "plain" or "json"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Default for JsDoctorConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_hints: MAX_HINTS,
            output: None,
        }
    }
}

impl JsDoctorConfig {
    /// Load from the user config dir, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: JsDoctorConfig = serde_json::from_str(&content)?;
        Ok(config.normalized())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// `~/.config/jsdoctor/config.json` (or the platform equivalent)
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|dir| dir.join("jsdoctor").join("config.json"))
    }

    /// Clamp values that would break detector invariants
    pub fn normalized(mut self) -> Self {
        self.max_hints = self.max_hints.min(MAX_HINTS);
        if self.max_input_bytes == 0 {
            self.max_input_bytes = DEFAULT_MAX_INPUT_BYTES;
        }
        self
    }
}
