use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SanviiError};

/// Top-level configuration for the Sanvii assistant.
///
/// Loaded from `~/.sanvii/config.toml` by default. Each section corresponds
/// to one layer of the widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SanviiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

impl SanviiConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SanviiConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SanviiError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Name interpolated into personalized replies.
    pub owner_name: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            owner_name: "Boss".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Widget presentation timing and toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Delay before the greeting-on-load message fires, in milliseconds.
    pub greeting_delay_ms: u64,
    /// Lower bound of the artificial "thinking" delay, in milliseconds.
    pub thinking_delay_min_ms: u64,
    /// Upper bound of the artificial "thinking" delay, in milliseconds.
    pub thinking_delay_max_ms: u64,
    /// Start with speech output muted.
    pub muted: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            greeting_delay_ms: 1500,
            thinking_delay_min_ms: 800,
            thinking_delay_max_ms: 1600,
            muted: false,
        }
    }
}

/// Speech synthesis tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Recognition/synthesis language tag.
    pub language: String,
    /// Voice pitch multiplier.
    pub pitch: f32,
    /// Speaking rate multiplier.
    pub rate: f32,
    /// Output volume, 0.0 to 1.0.
    pub volume: f32,
    /// Voice names to try in order when selecting a synthesis voice.
    pub preferred_voices: Vec<String>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            pitch: 1.1,
            rate: 1.05,
            volume: 0.9,
            preferred_voices: vec![
                "Google US English".to_string(),
                "Microsoft Zira".to_string(),
                "Samantha".to_string(),
            ],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
