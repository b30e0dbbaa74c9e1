/// Runtime configuration for the CoTrip station pipeline.
///
/// All configuration comes from the process environment (a `.env` file is
/// honored via dotenv). `COTRIP_TOKEN` is required and checked before any
/// network call; everything else is optional.
///
/// # Env injection
/// `from_env` only reads the environment; all parsing lives in the pure
/// `from_vars`, so configuration behavior is deterministic in tests
/// without mutating process-global state.

use crate::model::CotripError;
use std::env;

/// Loaded configuration for a single pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CoTrip API bearer token, sent as the `apiKey` query parameter.
    pub token: String,
    /// When true, the serialized GeoJSON collection is logged before
    /// submission. Observability only, no behavioral effect.
    pub debug: bool,
    /// Endpoint the finished collection is POSTed to. When unset, the
    /// collection is written to stdout instead.
    pub submit_url: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Config, CotripError> {
        dotenv::dotenv().ok();
        Config::from_vars(
            env::var("COTRIP_TOKEN").ok(),
            env::var("DEBUG").ok(),
            env::var("SUBMIT_URL").ok(),
        )
    }

    /// Build a configuration from raw variable values.
    ///
    /// An absent or empty token is a fatal configuration error. The debug
    /// flag accepts `1`, `true`, or `yes` (case-insensitive); anything
    /// else, including absence, is false.
    pub fn from_vars(
        token: Option<String>,
        debug: Option<String>,
        submit_url: Option<String>,
    ) -> Result<Config, CotripError> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(CotripError::MissingToken),
        };

        Ok(Config {
            token,
            debug: debug.map(|v| parse_bool_flag(&v)).unwrap_or(false),
            submit_url: submit_url.filter(|u| !u.is_empty()),
        })
    }
}

fn parse_bool_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
