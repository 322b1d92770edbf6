use crate::PredictionResult;
use serde_json::Value;
use thiserror::Error;

/// Why a submission failed. `Display` is the message shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered with an `error` field.
    #[error("{0}")]
    Server(String),
    /// No response reached the client.
    #[error("Unable to connect to the server. Make sure the backend is running on {base_url}")]
    Connectivity { base_url: String },
    /// 2xx response whose `success` flag was missing or falsy.
    #[error("Failed to process image")]
    Unsuccessful,
    #[error("An error occurred while processing the image")]
    Unclassified,
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a truthy scalar `error` field. Objects and arrays have no readable
/// text and fall back to the generic message.
fn server_message(error: &Value) -> Option<String> {
    if !is_truthy(error) {
        return None;
    }
    match error {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) => Some(error.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Maps a received `/api/predict` response to the submission outcome.
pub fn interpret_response(status: u16, body: &str) -> Result<PredictionResult, SubmitError> {
    let parsed = serde_json::from_str::<Value>(body).ok();

    if !(200..300).contains(&status) {
        let message = parsed
            .as_ref()
            .and_then(|v| v.get("error"))
            .and_then(server_message);

        return match message {
            Some(m) => Err(SubmitError::Server(m)),
            None => {
                log::error!("Prediction request failed with status {} and no error message", status);
                Err(SubmitError::Unclassified)
            }
        };
    }

    let Some(payload) = parsed else {
        return Err(SubmitError::Unsuccessful);
    };

    if !payload.get("success").is_some_and(is_truthy) {
        return Err(SubmitError::Unsuccessful);
    }

    serde_json::from_value::<PredictionResult>(payload).map_err(|e| {
        log::error!("Prediction payload did not match the expected shape: {}", e);
        SubmitError::Unclassified
    })
}
