#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Not a folder: {0}")]
    NotAFolder(String),

    #[error("Path already exists: {0}")]
    AlreadyExists(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for VaultError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;
