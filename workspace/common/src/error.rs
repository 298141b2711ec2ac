use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Error types surfaced by the prediction, submission and contact clients.
///
/// `Display` is the text shown to the user after the operation prefix
/// (see [`Operation::failure_text`]).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// A form field could not be coerced before sending.
    #[error("Input Error:\n{0}")]
    Input(String),

    /// The service answered with a non-success status.
    #[error("{0}")]
    Api(ApiFailure),

    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Network(String),

    /// The success body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A required setting is empty.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

/// Interpretation of a non-success response body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiFailure {
    /// Field-keyed validation messages, flattened in key order.
    #[error("Input Error:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// A single error string.
    #[error("Error: {0}")]
    Message(String),

    /// Anything else; carries the operation's generic message.
    #[error("{0}")]
    Unrecognized(String),
}

impl ApiFailure {
    /// Classifies an error body. `fallback` is used when the body is not JSON
    /// or carries neither `messages` nor `error`.
    pub fn from_body(body: &str, fallback: &str) -> Self {
        let parsed: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "error body is not JSON");
                return ApiFailure::Unrecognized(fallback.to_string());
            }
        };

        if let Some(messages) = parsed.get("messages") {
            let mut flattened = Vec::new();
            collect_messages(messages, &mut flattened);
            if !flattened.is_empty() {
                return ApiFailure::Validation(flattened);
            }
        }

        if let Some(error) = parsed.get("error").and_then(Value::as_str) {
            return ApiFailure::Message(error.to_string());
        }

        warn!("unrecognized error body shape");
        ApiFailure::Unrecognized(fallback.to_string())
    }
}

fn collect_messages(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(message) => out.push(message.clone()),
        Value::Array(items) => items.iter().for_each(|item| collect_messages(item, out)),
        Value::Object(fields) => fields.values().for_each(|field| collect_messages(field, out)),
        Value::Null => {}
        other => out.push(other.to_string()),
    }
}

/// User-initiated network operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Predict,
    SubmitActualData,
    Contact,
}

impl Operation {
    /// Generic text for an error body of unknown shape.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Predict => "Prediction failed. Please check your inputs and try again.",
            Operation::SubmitActualData => "Failed to submit actual data. Please check your inputs.",
            Operation::Contact => "Failed to send message. Please try again later.",
        }
    }

    /// Full notification text for a failed operation.
    pub fn failure_text(&self, error: &ClientError) -> String {
        match self {
            Operation::Predict => format!("Prediction failed: {error}"),
            Operation::SubmitActualData => format!("Submission failed: {error}"),
            // the email form never exposes the underlying cause
            Operation::Contact => self.fallback_message().to_string(),
        }
    }
}

/// Coerces a form field to a finite number.
pub fn parse_number(field: &str, raw: &str) -> Result<f64, ClientError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ClientError::Input(format!("{field} must be a number.")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_flattened() {
        let body = r#"{"error":"Validation Error","messages":{"rainfall":["too high"],"crop":["Invalid crop selected."]}}"#;
        let failure = ApiFailure::from_body(body, "fallback");
        let ApiFailure::Validation(messages) = &failure else {
            panic!("expected validation failure, got {failure:?}");
        };
        assert_eq!(messages.len(), 2);
        assert!(messages.contains(&"too high".to_string()));
        assert!(messages.contains(&"Invalid crop selected.".to_string()));

        let text = failure.to_string();
        assert!(text.starts_with("Input Error:\n"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn single_error_string_is_prefixed() {
        let failure = ApiFailure::from_body(r#"{"error":"bad crop"}"#, "fallback");
        assert_eq!(failure.to_string(), "Error: bad crop");
    }

    #[test]
    fn unknown_shapes_use_fallback() {
        for body in ["", "<html>502</html>", r#"{"detail":"x"}"#, r#"{"messages":{}}"#, "[]"] {
            assert_eq!(
                ApiFailure::from_body(body, Operation::Predict.fallback_message()),
                ApiFailure::Unrecognized(Operation::Predict.fallback_message().into()),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn failure_text_includes_cause() {
        let error = ClientError::Api(ApiFailure::from_body(
            r#"{"messages":{"rainfall":["too high"]}}"#,
            Operation::Predict.fallback_message(),
        ));
        let text = Operation::Predict.failure_text(&error);
        assert!(text.starts_with("Prediction failed: Input Error:"));
        assert!(text.contains("too high"));

        let error = ClientError::Network("connection refused".into());
        assert_eq!(
            Operation::SubmitActualData.failure_text(&error),
            "Submission failed: Request failed: connection refused"
        );
    }

    #[test]
    fn contact_failure_hides_cause() {
        let error = ClientError::NotConfigured("Email public key");
        assert_eq!(
            Operation::Contact.failure_text(&error),
            "Failed to send message. Please try again later."
        );
    }

    #[test]
    fn parse_number_rejects_non_finite() {
        assert_eq!(parse_number("Arrival", " 1200.5 "), Ok(1200.5));
        assert!(matches!(parse_number("Arrival", ""), Err(ClientError::Input(_))));
        assert!(parse_number("Arrival", "NaN").is_err());
        assert_eq!(
            parse_number("Min price", "12abc").unwrap_err().to_string(),
            "Input Error:\nMin price must be a number."
        );
    }
}
