use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Absence is not a load error: the key's absence surfaces as a typed
    // provider-unconfigured failure when a search is attempted.
    let places_api_key = lookup("GEARFIX_PLACES_API_KEY").ok();

    let places_base_url = or_default("GEARFIX_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let request_timeout_secs = parse_u64("GEARFIX_REQUEST_TIMEOUT_SECS", "10")?;
    let nearby_delay_ms = parse_u64("GEARFIX_NEARBY_DELAY_MS", "50")?;
    let text_delay_ms = parse_u64("GEARFIX_TEXT_DELAY_MS", "150")?;
    let log_level = or_default("GEARFIX_LOG_LEVEL", "info");
    let user_agent = or_default("GEARFIX_USER_AGENT", "gearfix/0.1 (service-locator)");

    Ok(AppConfig {
        places_api_key,
        places_base_url,
        request_timeout_secs,
        nearby_delay_ms,
        text_delay_ms,
        log_level,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
