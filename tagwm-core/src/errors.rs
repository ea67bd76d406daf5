use thiserror::Error;

pub type Result<T> = std::result::Result<T, TagwmError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagwmError {
    #[error("Unknown property: {0}")]
    UnknownProperty(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
