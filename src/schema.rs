use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{error::{Result, SchemaError}, msg::Message, room::Room};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
  Integer,
  Text,
}

impl Kind {
  fn expected(self) -> &'static str {
    match self {
      Self::Integer => "an integer",
      Self::Text => "a string",
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
  pub name: &'static str,
  pub kind: Kind,
  pub required: bool,
}

const fn required(name: &'static str, kind: Kind) -> Field {
  Field { name, kind, required: true }
}

const fn optional(name: &'static str, kind: Kind) -> Field {
  Field { name, kind, required: false }
}

const ROOM_FIELDS: &[Field] = &[
  required("id", Kind::Integer),
  required("name", Kind::Text),
];

const MESSAGE_FIELDS: &[Field] = &[
  optional("id", Kind::Integer),
  required("sender", Kind::Text),
  required("content", Kind::Text),
  required("timestamp", Kind::Text),
  required("roomId", Kind::Integer),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shape {
  Room,
  Message,
}

impl Shape {
  /// Wire fields in declaration order.
  pub fn fields(self) -> &'static [Field] {
    match self {
      Self::Room => ROOM_FIELDS,
      Self::Message => MESSAGE_FIELDS,
    }
  }
}

impl fmt::Display for Shape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Room => write!(f, "Room"),
      Self::Message => write!(f, "Message"),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
  Room(Room),
  Message(Message),
}

impl Record {
  pub fn shape(&self) -> Shape {
    match self {
      Self::Room(_) => Shape::Room,
      Self::Message(_) => Shape::Message,
    }
  }
}

fn check_field(shape: Shape, field: &Field, object: &Map<String, Value>) -> Result<()> {
  let value = match object.get(field.name) {
    None if field.required => {
      return Err(SchemaError::MissingField { shape, field: field.name });
    },
    None => return Ok(()),
    Some(Value::Null) if !field.required => {
      return Err(SchemaError::NullField { shape, field: field.name });
    },
    Some(value) => value,
  };

  let wrong_type = || SchemaError::WrongType {
    shape,
    field: field.name,
    expected: field.kind.expected(),
  };

  match (field.kind, value) {
    (Kind::Text, Value::String(_)) => Ok(()),
    (Kind::Integer, Value::Number(n)) if n.is_i64() || n.is_u64() => {
      n.as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .map(|_| ())
        .ok_or(SchemaError::OutOfRange { shape, field: field.name })
    },
    _ => Err(wrong_type()),
  }
}

/// Checks a JSON value against `shape` and converts it into a typed record.
///
/// Fields are checked in declaration order and the first problem found is
/// reported. Keys the shape does not declare are ignored.
pub fn validate(shape: Shape, value: &Value) -> Result<Record> {
  let object = value.as_object()
    .ok_or(SchemaError::NotAnObject { shape })?;

  for field in shape.fields() {
    check_field(shape, field, object)?;
  }

  let decode = |source| SchemaError::Decode { shape, source };

  let record = match shape {
    Shape::Room => Record::Room(serde_json::from_value(value.clone()).map_err(decode)?),
    Shape::Message => Record::Message(serde_json::from_value(value.clone()).map_err(decode)?),
  };

  trace!("Valid {shape}: {record:?}");

  Ok(record)
}

pub fn parse(shape: Shape, text: &str) -> Result<Record> {
  let value: Value = serde_json::from_str(text)?;
  validate(shape, &value)
}

/// Parses a document holding either one object or an array of objects.
///
/// Each element is validated on its own; only malformed JSON fails the
/// document as a whole.
pub fn parse_document(shape: Shape, text: &str) -> Result<Vec<Result<Record>>> {
  let value: Value = serde_json::from_str(text)?;

  let results: Vec<Result<Record>> = match &value {
    Value::Array(items) => items.iter().map(|item| validate(shape, item)).collect(),
    other => vec![validate(shape, other)],
  };

  debug!(
    "Checked {} {shape} record(s), {} invalid",
    results.len(),
    results.iter().filter(|res| res.is_err()).count(),
  );

  Ok(results)
}
