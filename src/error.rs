use lambda_http::http::StatusCode;
use thiserror::Error;

use crate::validation::ValidationError;

/// Failure of a single handler invocation, as reported to the caller.
///
/// Every handler returns `Result<_, ApiError>`; the HTTP layer turns the error
/// into a JSON body of the form `{"error": "..."}` with the matching status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required path or query parameter was absent.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    /// Required body fields were absent or blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    /// Input was present but failed a semantic or format check.
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A dependency failed. The message is the underlying cause.
    #[error("{0}")]
    InternalFailure(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_)
            | ApiError::MissingFields(_)
            | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        // `{:#}` keeps the context chain on one line.
        ApiError::InternalFailure(format!("{err:#}"))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingFields(fields) => ApiError::MissingFields(fields),
            other => ApiError::InvalidInput(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidInput(format!("Invalid JSON: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingParameter("itemId").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingFields(vec!["name".into()]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidInput("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound("Item").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InternalFailure("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_failure_keeps_cause() {
        let err = anyhow!("connection refused").context("GetItem on 'items' failed");
        let api_err = ApiError::from(err);

        assert_eq!(api_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api_err.to_string(),
            "GetItem on 'items' failed: connection refused"
        );
    }

    #[test]
    fn test_validation_errors_map_to_client_errors() {
        let missing = ApiError::from(ValidationError::MissingFields(vec!["name".into()]));
        assert!(matches!(missing, ApiError::MissingFields(_)));
        assert_eq!(missing.to_string(), "Missing required fields: name");

        let invalid = ApiError::from(ValidationError::NotAnObject);
        assert!(matches!(invalid, ApiError::InvalidInput(_)));
    }
}
