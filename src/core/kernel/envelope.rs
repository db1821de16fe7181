use crate::core::errors::TorusError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope wrapping every API payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    pub status: i64,
    pub data: Value,
    pub message: Option<String>,
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub id: Option<String>,
    pub details: Option<String>,
    pub message: Option<String>,
}

impl ErrorDetail {
    /// Human readable reason: `details`, then `message`, then `id`.
    pub fn reason(&self) -> Option<&str> {
        [&self.details, &self.message, &self.id]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|text| !text.is_empty())
    }
}

/// Interpret a raw response into the envelope's `data` payload.
///
/// An envelope error wins over the HTTP status. A non-2xx status without an
/// envelope error is still a failure.
pub fn interpret(status: u16, body: &str) -> Result<Value, TorusError> {
    let success = (200..300).contains(&status);

    if body.trim().is_empty() {
        if success {
            return Ok(Value::Null);
        }
        return Err(TorusError::Api {
            status,
            id: None,
            message: status_reason(status),
        });
    }

    let envelope: Envelope = serde_json::from_str(body).map_err(|e| {
        TorusError::Decode(format!(
            "Failed to parse response envelope (status {}): {}",
            status, e
        ))
    })?;

    if let Some(error) = envelope.error {
        let message = error
            .reason()
            .map_or_else(|| status_reason(status), str::to_string);
        return Err(TorusError::Api {
            status,
            id: error.id,
            message,
        });
    }

    if !success {
        let message = envelope
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| status_reason(status));
        return Err(TorusError::Api {
            status,
            id: None,
            message,
        });
    }

    Ok(envelope.data)
}

/// Map the envelope payload onto the destination type.
///
/// Timestamps and UUIDs are parsed from their string forms by the
/// destination's field types; any other mismatch is a decode error.
pub fn decode_data<T: DeserializeOwned>(data: Value) -> Result<T, TorusError> {
    serde_json::from_value(data)
        .map_err(|e| TorusError::Decode(format!("Failed to decode response data: {}", e)))
}

fn status_reason(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map_or_else(|| format!("HTTP status {}", status), str::to_string)
}
