use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.genius.com";
pub const DEFAULT_PUBLIC_API_BASE: &str = "https://genius.com/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const USER_AGENT: &str = concat!("lyrics/", env!("CARGO_PKG_VERSION"), " (lyrics corpus tool)");

/// Connection settings for the Genius client.
///
/// Built once at the entry point and handed to [`crate::genius::GeniusClient::new`].
#[derive(Debug, Clone)]
pub struct GeniusConfig {
    /// Bearer token for the authenticated API.
    pub access_token: String,
    pub api_base: String,
    pub public_api_base: String,
    /// Per-request timeout. A request exceeding it counts as a transient failure.
    pub timeout: Duration,
    pub user_agent: String,
}

impl GeniusConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            public_api_base: DEFAULT_PUBLIC_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
