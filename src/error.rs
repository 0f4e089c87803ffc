use thiserror::Error;

/// Errors produced while looking up a user or rendering the page.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The profile request came back with a non-success status.
    #[error("User not found")]
    UserNotFound { username: String },

    /// Any other request came back with a non-success status.
    #[error("GitHub API error: {status}")]
    Api { status: reqwest::StatusCode },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
