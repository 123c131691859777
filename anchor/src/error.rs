use crate::ObjectKey;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnchorError {
    #[error("object {0:?} is not part of the scene")]
    UnknownObject(ObjectKey),
    #[error("invalid anchor settings: {0}")]
    InvalidSettings(&'static str),
}

pub type Result<T> = std::result::Result<T, AnchorError>;
