use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("stored option index {0} is out of range")]
    InvalidOptionIndex(i32),
}
