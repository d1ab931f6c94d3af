use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlaError {
    #[error("not initialized: run 'sla init'")]
    NotInitialized,

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid entity kind: {0}")]
    InvalidEntity(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SlaError>;
