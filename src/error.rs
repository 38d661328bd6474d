use thiserror::Error;

use crate::schema::Shape;

#[derive(Error, Debug)]
pub enum SchemaError {
  #[error("invalid JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error("{shape} must be a JSON object")]
  NotAnObject { shape: Shape },
  #[error("{shape} is missing required field `{field}`")]
  MissingField { shape: Shape, field: &'static str },
  #[error("{shape} field `{field}` may be absent but not null")]
  NullField { shape: Shape, field: &'static str },
  #[error("{shape} field `{field}` must be {expected}")]
  WrongType { shape: Shape, field: &'static str, expected: &'static str },
  #[error("{shape} could not be decoded: {source}")]
  Decode { shape: Shape, source: serde_json::Error },
  #[error("{shape} field `{field}` is out of range")]
  OutOfRange { shape: Shape, field: &'static str },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
