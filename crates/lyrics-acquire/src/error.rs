use thiserror::Error;

/// Failures talking to the lyrics API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}: {1}")]
    Status(u16, String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Only timeouts are worth another attempt.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Parse(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Errors surfaced by the acquisition pipeline.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("song {song_id}: request timed out on all {attempts} attempts")]
    TransientFetch { song_id: u64, attempts: u32 },

    #[error("unsupported corpus format '{0}' (expected .txt or .json)")]
    UnsupportedFormat(String),

    #[error("no artist found for '{0}'")]
    ArtistNotFound(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = AcquireError> = std::result::Result<T, E>;
