//! Runtime configuration, resolved once from compile-time env.

use std::sync::OnceLock;

use catalog_core::config::AppConfig;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::from_env(option_env!("LMS_API_URL")))
}
