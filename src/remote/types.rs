//! The `{status, response}` envelope every API reply is wrapped in.

use serde::de::DeserializeOwned;

use super::ApiError;

pub(super) const STATUS_SUCCESS: &str = "success";

#[derive(Debug, serde::Deserialize)]
pub(super) struct Envelope {
    pub(super) status: String,

    #[serde(default)]
    pub(super) response: serde_json::Value,

    #[serde(default, rename = "type")]
    pub(super) kind: Option<String>,
}

impl Envelope {
    pub(super) fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    fn message(&self) -> String {
        match &self.response {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => self.status.clone(),
            other => other.to_string(),
        }
    }

    pub(super) fn into_error(self) -> ApiError {
        let message = self.message();
        ApiError::Application {
            status: self.status,
            message,
            kind: self.kind,
        }
    }
}

/// Turns a raw reply into a typed result. An error status whose body still
/// parses as an envelope is reported as an application failure carrying the
/// server's message.
pub(super) fn decode_envelope<T: DeserializeOwned>(
    method: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> Result<T, ApiError> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(source) if status.is_success() => {
            return Err(ApiError::Decode {
                method: method.to_string(),
                source,
            });
        }
        Err(_) => {
            return Err(ApiError::Http {
                status,
                body: body.trim().to_string(),
            });
        }
    };

    if !status.is_success() || !envelope.is_success() {
        return Err(envelope.into_error());
    }

    serde_json::from_value(envelope.response).map_err(|source| ApiError::Decode {
        method: method.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
