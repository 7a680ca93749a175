//! Registry configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), with defaults when unset.

/// Top-level registry configuration.
///
/// Loaded once at composition time via [`RegistryConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Capacity of the registry event broadcast channel.
    pub event_bus_capacity: usize,

    /// Emit a warn-level trace when a registration replaces an existing
    /// entry for the same context path.
    pub warn_on_replace: bool,
}

impl RegistryConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set or fails to parse.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            event_bus_capacity: parse_env("EVENT_BUS_CAPACITY", 1024),
            warn_on_replace: parse_env_bool("WARN_ON_REPLACE", true),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            event_bus_capacity: 1024,
            warn_on_replace: true,
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some("true") | Some("TRUE") | Some("1") => true,
        Some("false") | Some("FALSE") | Some("0") => false,
        _ => default,
    }
}
