#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unsupported file type {0:?}: expected application/json")]
    WrongFileType(String),
    #[error("invalid JSON content: {0}")]
    InvalidFormat(serde_json::Error),
    #[error("failed to read profile file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write profile file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize profile: {0}")]
    Serialization(serde_json::Error),
}

pub type ProfileResult<T> = std::result::Result<T, ProfileError>;
