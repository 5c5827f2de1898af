use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

pub const ENV_API_URL: &str = "TEAMDESK_API_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "TEAMDESK_API_TIMEOUT_SECS";
pub const ENV_COOKIE_SECURE: &str = "COOKIE_SECURE";

/// Read `config.toml`, apply environment overrides and store the result in
/// the global `OnceLock`. Only the first call does any work.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "config file not found, using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        tracing::info!(
            api_base_url = %config.api.base_url,
            timeout_secs = config.api.timeout_secs,
            cookie_secure = config.session.secure,
            "configuration loaded"
        );
        config
    })
}

/// Parse config file contents. Invalid TOML yields the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Overlay environment variables onto `config`. Unparseable values are ignored.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    if let Some(secs) = lookup(ENV_API_TIMEOUT_SECS).and_then(|v| v.trim().parse().ok()) {
        config.api.timeout_secs = secs;
    }
    if let Some(secure) = lookup(ENV_COOKIE_SECURE).and_then(|v| v.trim().parse().ok()) {
        config.session.secure = secure;
    }
}
