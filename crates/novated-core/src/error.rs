use thiserror::Error;

#[derive(Debug, Error)]
pub enum NovatedError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for NovatedError {
    fn from(e: serde_json::Error) -> Self {
        NovatedError::SerializationError(e.to_string())
    }
}
