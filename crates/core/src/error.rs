//! Client-facing failures
//!
//! The `Display` output of every variant is the exact message placed in the
//! `{"error": ...}` body, so the shell never rewrites it.

/// Broad category of an [`ApiError`], used by the shell to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid field: {field} must be a {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Todo not found")]
    TodoNotFound,

    #[error("Blog post not found")]
    BlogPostNotFound,

    #[error("City not found")]
    CityNotFound,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidField { .. } => ErrorKind::Validation,
            ApiError::TodoNotFound | ApiError::BlogPostNotFound | ApiError::CityNotFound => {
                ErrorKind::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ApiError::MissingField("category");
        assert_eq!(err.to_string(), "Missing required field: category");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_invalid_field_message() {
        let err = ApiError::InvalidField {
            field: "completed",
            expected: "boolean",
        };
        assert_eq!(err.to_string(), "Invalid field: completed must be a boolean");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(ApiError::TodoNotFound.to_string(), "Todo not found");
        assert_eq!(ApiError::BlogPostNotFound.to_string(), "Blog post not found");
        assert_eq!(ApiError::CityNotFound.to_string(), "City not found");
        assert_eq!(ApiError::CityNotFound.kind(), ErrorKind::NotFound);
    }
}
