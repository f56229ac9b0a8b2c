use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetadataError>;

// Errors raised while reading the resource metadata file
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("The file at {path} was not found.")]
    NotFound { path: String },

    #[error("Failed to decode JSON from the file.")]
    InvalidJson(#[from] serde_json::Error),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),

    #[error("Expected a JSON object at the document root, found {found}")]
    NotAnObject { found: String },

    #[error("Missing field '{0}' in metadata")]
    MissingField(String),

    #[error("Invalid field '{field}' (expected {expected}, found {found})")]
    InvalidField {
        field: String,
        expected: String,
        found: String,
    },
}

impl From<std::io::Error> for MetadataError {
    fn from(e: std::io::Error) -> Self {
        MetadataError::Unexpected(e.to_string())
    }
}

impl From<std::str::Utf8Error> for MetadataError {
    fn from(e: std::str::Utf8Error) -> Self {
        MetadataError::Unexpected(e.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_become_unexpected() {
        let err = MetadataError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "An unexpected error occurred: denied");
    }

    #[test]
    fn syntax_errors_become_invalid_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = MetadataError::from(parse);
        assert!(matches!(err, MetadataError::InvalidJson(_)));
        assert_eq!(err.to_string(), "Failed to decode JSON from the file.");
    }
}
