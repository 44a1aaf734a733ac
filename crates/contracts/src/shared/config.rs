use crate::shared::navigation::DEFAULT_SETTLE_DELAY;
use crate::shared::typewriter::TypewriterTiming;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Site configuration. Every section and field is optional in the TOML file.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LoungeConfig {
    pub typewriter: TypewriterConfig,
    pub carousel: CarouselConfig,
    pub navigation: NavigationConfig,
    pub concierge: ConciergeConfig,
    pub image: ImageConfig,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TypewriterConfig {
    pub typing_ms: u64,
    pub deleting_ms: u64,
    pub hold_ms: u64,
    pub caret_blink_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_ms: 100,
            deleting_ms: 50,
            hold_ms: 2000,
            caret_blink_ms: 500,
        }
    }
}

impl TypewriterConfig {
    pub fn timing(&self) -> TypewriterTiming {
        TypewriterTiming {
            typing: Duration::from_millis(self.typing_ms),
            deleting: Duration::from_millis(self.deleting_ms),
            hold: Duration::from_millis(self.hold_ms),
        }
    }

    pub fn caret_blink(&self) -> Duration {
        Duration::from_millis(self.caret_blink_ms)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 6000 }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    pub settle_delay_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
        }
    }
}

impl NavigationConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConciergeConfig {
    pub model: String,
    /// Minimum time the loading state stays visible
    pub min_loading_ms: u64,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            min_loading_ms: 1500,
        }
    }
}

impl ConciergeConfig {
    pub fn min_loading(&self) -> Duration {
        Duration::from_millis(self.min_loading_ms)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ImageConfig {
    pub model: String,
    pub aspect_ratio: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-pro-image-preview".to_string(),
            aspect_ratio: "16:9".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_base: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

/// Default configuration, used when the embedded file is missing or broken
pub const DEFAULT_CONFIG: &str = r#"
[typewriter]
typing_ms = 100
deleting_ms = 50
hold_ms = 2000
caret_blink_ms = 500

[carousel]
interval_ms = 6000

[navigation]
settle_delay_ms = 100

[concierge]
model = "gemini-2.5-flash"
min_loading_ms = 1500

[image]
model = "gemini-3-pro-image-preview"
aspect_ratio = "16:9"

[gemini]
api_base = "https://generativelanguage.googleapis.com/v1beta"
"#;

impl LoungeConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parses `contents`, falling back to [`DEFAULT_CONFIG`] on error
    pub fn load(contents: &str) -> Self {
        match Self::from_toml_str(contents) {
            Ok(config) => {
                log::info!("Loaded site configuration");
                config
            }
            Err(e) => {
                log::warn!("{}; using default embedded configuration", e);
                Self::from_toml_str(DEFAULT_CONFIG).unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = LoungeConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), LoungeConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = LoungeConfig::from_toml_str("[carousel]\ninterval_ms = 3000\n").unwrap();
        assert_eq!(config.carousel.interval(), Duration::from_millis(3000));
        assert_eq!(config.typewriter.timing(), TypewriterTiming::default());
        assert_eq!(config.navigation.settle_delay(), Duration::from_millis(100));
        assert_eq!(config.concierge.min_loading(), Duration::from_millis(1500));
    }

    #[test]
    fn test_broken_config_falls_back() {
        let config = LoungeConfig::load("[carousel\ninterval_ms = ");
        assert_eq!(config, LoungeConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(LoungeConfig::load(""), LoungeConfig::default());
    }
}
