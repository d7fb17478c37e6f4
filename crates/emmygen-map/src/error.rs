use emmygen_model::TypeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("reference to unknown type {0}")]
    UnknownType(TypeId),
    #[error("type {0} participates in a declaring or inheritance cycle")]
    CyclicType(TypeId),
}
