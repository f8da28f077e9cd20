use std::path::PathBuf;

use thiserror::Error;

use crate::error::TrainerError;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("no saved trainer found at {0}")]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed trainer file: {0}")]
    Malformed(#[from] quick_xml::DeError),
    #[error("could not serialize trainer: {0}")]
    Serialize(#[from] quick_xml::SeError),
    #[error("saved trainer is invalid: {0}")]
    Invalid(#[from] TrainerError),
}
