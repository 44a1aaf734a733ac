//! Site configuration embedded at build time.

use contracts::shared::config::LoungeConfig;
use once_cell::sync::Lazy;

/// `crates/frontend/config.toml`, compiled into the bundle
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: Lazy<LoungeConfig> = Lazy::new(|| LoungeConfig::load(EMBEDDED_CONFIG));

pub fn app_config() -> &'static LoungeConfig {
    &CONFIG
}
