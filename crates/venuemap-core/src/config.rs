use crate::app_config::{AppConfig, Environment};
use crate::venue::LatLng;
use crate::ConfigError;

/// Katoomba, New South Wales, Australia.
const DEFAULT_LATITUDE: &str = "-33.714955";
const DEFAULT_LONGITUDE: &str = "150.311407";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Parsing and validation, decoupled from the process environment so tests
/// can use a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_degrees = |var: &str, default: &str, limit: f64| -> Result<f64, ConfigError> {
        let value = or_default(var, default)
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !(-limit..=limit).contains(&value) {
            return Err(invalid(var, format!("{value} is outside [-{limit}, {limit}]")));
        }
        Ok(value)
    };

    let foursquare_client_id = require("FOURSQUARE_CLIENT_ID")?;
    let foursquare_client_secret = require("FOURSQUARE_CLIENT_SECRET")?;

    let env = parse_environment(&or_default("VENUEMAP_ENV", "development"))?;
    let log_level = or_default("VENUEMAP_LOG_LEVEL", "info");
    let location_name = or_default(
        "VENUEMAP_LOCATION_NAME",
        "Katoomba, New South Wales, Australia",
    );

    let center = LatLng::new(
        parse_degrees("VENUEMAP_LATITUDE", DEFAULT_LATITUDE, 90.0)?,
        parse_degrees("VENUEMAP_LONGITUDE", DEFAULT_LONGITUDE, 180.0)?,
    );

    let foursquare_base_url = or_default(
        "VENUEMAP_FOURSQUARE_BASE_URL",
        "https://api.foursquare.com/v2/",
    );
    let foursquare_version = or_default("VENUEMAP_FOURSQUARE_VERSION", "20130815");
    let explore_section = or_default("VENUEMAP_SECTION", "topPicks");

    let venue_limit = parse_u32("VENUEMAP_VENUE_LIMIT", "15")?;
    if venue_limit == 0 {
        return Err(invalid(
            "VENUEMAP_VENUE_LIMIT",
            "must be greater than zero".to_string(),
        ));
    }

    let request_timeout_secs = parse_u64("VENUEMAP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("VENUEMAP_USER_AGENT", "venuemap/0.1 (venue-discovery)");

    Ok(AppConfig {
        env,
        log_level,
        location_name,
        center,
        foursquare_client_id,
        foursquare_client_secret,
        foursquare_base_url,
        foursquare_version,
        explore_section,
        venue_limit,
        request_timeout_secs,
        user_agent,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VENUEMAP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
