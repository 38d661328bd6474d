use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Room {
  pub id: i32,
  pub name: String,
}

impl Room {
  pub fn new(id: i32, name: impl Into<String>) -> Self {
    Self { id, name: name.into() }
  }
}
