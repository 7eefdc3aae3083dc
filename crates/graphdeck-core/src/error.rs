use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphDeckError {
    #[error("Data source name already in use: {0}")]
    DuplicateName(String),
    #[error("Metadata error: {0}")]
    Metadata(String),
    #[error("Keychain error: {0}")]
    Keychain(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, GraphDeckError>;
