// Intake settings, loaded from the embedded default config or an override file.
use std::fs;
use std::path::Path;

use serde::Deserialize;
use shared::models::SupportedLocale;

use crate::error::IntakeError;

pub const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Largest accepted upload: 20 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 20 * BYTES_PER_MIB;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct IntakeSettings {
    pub upload: UploadSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    pub max_size_bytes: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub default_locale: SupportedLocale,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        IntakeSettings {
            upload: UploadSettings {
                max_size_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            display: DisplaySettings {
                default_locale: SupportedLocale::default(),
            },
        }
    }
}

impl IntakeSettings {
    pub fn load_default() -> Result<Self, IntakeError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, IntakeError> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path).map_err(|e| {
            IntakeError::ConfigError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let settings = Self::from_json(&config_str)?;
        tracing::debug!(path = %path.display(), "Loaded intake settings");
        Ok(settings)
    }

    pub fn from_json(config_str: &str) -> Result<Self, IntakeError> {
        let settings: IntakeSettings = serde_json::from_str(config_str)
            .map_err(|e| IntakeError::ConfigError(format!("Invalid config: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    // The size rejection message states the limit in whole MB.
    fn validate(&self) -> Result<(), IntakeError> {
        let max_size_bytes = self.upload.max_size_bytes;
        if max_size_bytes == 0 {
            return Err(IntakeError::ConfigError(
                "upload.max_size_bytes must be greater than 0".to_string(),
            ));
        }
        if max_size_bytes % BYTES_PER_MIB != 0 {
            return Err(IntakeError::ConfigError(format!(
                "upload.max_size_bytes must be a whole number of MiB ({} bytes), got {}",
                BYTES_PER_MIB, max_size_bytes
            )));
        }
        Ok(())
    }
}
