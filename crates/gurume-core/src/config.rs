use crate::app_config::{AppConfig, Environment};
use crate::{ConfigError, Coordinate};

pub const DEFAULT_API_BASE_URL: &str = "https://webservice.recruit.co.jp/hotpepper/gourmet/v1/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if the API credential is missing/empty or values are
/// invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if the API credential is missing/empty or values are
/// invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
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

    let parse_f64 = |var: &str, raw: &str| -> Result<f64, ConfigError> {
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Missing or blank credential is a startup failure, not a runtime error.
    let hotpepper_api_key = lookup("HOTPEPPER_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar("HOTPEPPER_API_KEY".to_string()))?;

    let env = parse_environment(&or_default("GURUME_ENV", "development"));
    let log_level = or_default("GURUME_LOG_LEVEL", "info");
    let api_base_url = or_default("GURUME_API_BASE_URL", DEFAULT_API_BASE_URL);
    let request_timeout_secs = parse_u64("GURUME_REQUEST_TIMEOUT_SECS", "30")?;

    let fallback_lat = lookup("GURUME_FALLBACK_LAT").ok();
    let fallback_lng = lookup("GURUME_FALLBACK_LNG").ok();
    let fallback_coordinate = match (fallback_lat, fallback_lng) {
        (Some(lat), Some(lng)) => Some(Coordinate::new(
            parse_f64("GURUME_FALLBACK_LAT", &lat)?,
            parse_f64("GURUME_FALLBACK_LNG", &lng)?,
        )),
        (None, None) => None,
        (Some(_), None) => {
            return Err(ConfigError::InvalidEnvVar {
                var: "GURUME_FALLBACK_LNG".to_string(),
                reason: "GURUME_FALLBACK_LAT is set without GURUME_FALLBACK_LNG".to_string(),
            })
        }
        (None, Some(_)) => {
            return Err(ConfigError::InvalidEnvVar {
                var: "GURUME_FALLBACK_LAT".to_string(),
                reason: "GURUME_FALLBACK_LNG is set without GURUME_FALLBACK_LAT".to_string(),
            })
        }
    };

    Ok(AppConfig {
        env,
        log_level,
        hotpepper_api_key,
        api_base_url,
        request_timeout_secs,
        fallback_coordinate,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
