use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrainerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid entry: {0}")]
    InvalidEntry(String),
}

impl TrainerError {
    pub(crate) fn invalid_argument(message: &str) -> Self {
        TrainerError::InvalidArgument(message.to_string())
    }
}
