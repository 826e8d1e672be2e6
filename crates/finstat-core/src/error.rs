use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinstatError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Provider returned status {status}: {message} ({report})")]
    ProviderStatus {
        status: String,
        message: String,
        report: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FinstatError {
    fn from(e: serde_json::Error) -> Self {
        FinstatError::SerializationError(e.to_string())
    }
}

impl From<serde_yaml::Error> for FinstatError {
    fn from(e: serde_yaml::Error) -> Self {
        FinstatError::SerializationError(e.to_string())
    }
}
