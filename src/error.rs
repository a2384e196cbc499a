use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Helper not found: {0}")]
    HelperNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Precondition violated: {0}")]
    Precondition(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
