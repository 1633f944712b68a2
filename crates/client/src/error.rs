//! Client-side error taxonomy.

use reqwest::StatusCode;

/// Anything that can go wrong on the consuming side of the API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never completed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("api error ({status}): {message}")]
    Api {
        status: StatusCode,
        message: String,
    },

    /// Token acquisition failed before the request was sent.
    #[error("token acquisition failed: {0}")]
    Token(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A payload could not be serialized or a response parsed.
    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Synthetic fault raised on purpose by the chaos utility.
    #[error("synthetic runtime fault")]
    RuntimeFault,
}

impl ClientError {
    /// The HTTP status the server answered with, when there is one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}
