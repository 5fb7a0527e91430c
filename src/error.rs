use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("No endpoint with id '{id}'")]
    EndpointNotFound { id: String },

    #[error("Failed to parse registry: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DocsResult<T> = Result<T, DocsError>;
