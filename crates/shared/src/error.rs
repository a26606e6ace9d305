use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    GroupSizeUnset,
    GroupSizeTooLarge,
    RosterUnavailable,
    Validation,
    Internal,
}

/// Error shape handed to display collaborators (rendered as JSON by the CLI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code:?}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_code_in_snake_case() {
        let err = ApiError::new(ErrorCode::GroupSizeTooLarge, "too large");
        let json = serde_json::to_value(&err).expect("json");
        assert_eq!(json["code"], "group_size_too_large");
        assert_eq!(err.to_string(), "GroupSizeTooLarge: too large");
    }
}
