//! Client configuration: the API token and an optional timezone.

/// Environment variable holding the API token.
pub const API_TOKEN_VAR: &str = "SPORTMONKS_API_TOKEN";
/// Environment variable holding the optional timezone (e.g. `Europe/Amsterdam`).
pub const TIMEZONE_VAR: &str = "SPORTMONKS_TIMEZONE";

/// Values every request carries. Validated when a [`Client`](crate::Client) is built.
#[derive(Clone, Default)]
pub struct Config {
    pub api_token: String,
    pub timezone: Option<String>,
}

impl Config {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            timezone: None,
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Reads `SPORTMONKS_API_TOKEN` and `SPORTMONKS_TIMEZONE` from the process
    /// environment. A missing token yields an empty one, which the client rejects.
    pub fn from_env() -> Self {
        Self {
            api_token: std::env::var(API_TOKEN_VAR).unwrap_or_default(),
            timezone: std::env::var(TIMEZONE_VAR).ok(),
        }
    }
}

// Keep the token out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<redacted>")
            .field("timezone", &self.timezone)
            .finish()
    }
}
