use thiserror::Error;

/// Everything that can go wrong talking to the API.
///
/// Application failures are reported the same way whether the server sent
/// them with a success or an error HTTP status, so callers only ever look at
/// [`ApiError::message`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{message}")]
    Application {
        status: String,
        message: String,
        kind: Option<String>,
    },

    #[error("decode {method} response: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("encode argument {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn application(message: impl Into<String>) -> Self {
        ApiError::Application {
            status: "error".to_string(),
            message: message.into(),
            kind: None,
        }
    }

    /// Text suitable for showing to the user.
    pub fn message(&self) -> String {
        match self {
            ApiError::Application { message, .. } => message.clone(),
            ApiError::Http { status, body } if !body.is_empty() => {
                format!("server returned {}: {}", status, body)
            }
            other => other.to_string(),
        }
    }

    pub fn is_application(&self) -> bool {
        matches!(self, ApiError::Application { .. })
    }
}
