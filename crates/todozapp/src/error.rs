use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Todo not found: {0}")]
    NotFound(u64),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Script failed: {0}")]
    Script(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TodozError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, TodozError>;
