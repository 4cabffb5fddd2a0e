use thiserror::Error;

/// Input rejected by the `Singers` field rules before any statement runs.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}
