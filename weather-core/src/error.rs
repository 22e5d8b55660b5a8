use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single weather fetch.
///
/// The variants separate transport, HTTP-status and decode failures so that
/// logs and tests can tell them apart; callers are expected to handle all of
/// them the same way (notify and navigate back home).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the weather service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("weather service returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather response was missing field: {0}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_includes_code_and_body() {
        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
            body: "city not found".into(),
        };

        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("city not found"));
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = FetchError::MissingField("weather[0].description");
        assert!(err.to_string().contains("weather[0].description"));
    }
}
