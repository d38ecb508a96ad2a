use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory
pub const SETTINGS_PATH: &str = "snake_settings.json";

/// Optional user settings. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the highscore is kept
    pub highscore_path: PathBuf,
    /// Volume for the sound cues, 0.0 to 1.0
    pub sound_volume: f32,
    /// tracing filter directive, e.g. "info" or "snake_arcade=debug"
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from("save.txt"),
            sound_volume: 1.0,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing file gives the defaults; a file that
    /// cannot be read or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("malformed settings in {}", path.display()))?;
        Ok(settings.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.sound_volume = if self.sound_volume.is_finite() {
            self.sound_volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.highscore_path, PathBuf::from("save.txt"));
        assert_eq!(settings.sound_volume, 1.0);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load(temp_dir.path().join(SETTINGS_PATH)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_PATH);
        fs::write(&path, r#"{ "sound_volume": 0.25 }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.sound_volume, 0.25);
        assert_eq!(settings.highscore_path, PathBuf::from("save.txt"));
    }

    #[test]
    fn test_volume_is_clamped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_PATH);
        fs::write(&path, r#"{ "sound_volume": 3.0, "log_filter": "debug" }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.sound_volume, 1.0);
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_PATH);
        fs::write(&path, "{ not json").unwrap();

        assert!(Settings::load(&path).is_err());
    }
}
