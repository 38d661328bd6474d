use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Deserializer, Serialize};

use crate::room::Room;

/// A single chat entry.
///
/// `id` is only present once some store has assigned one. On the wire an
/// absent id omits the key entirely; `"id": null` is not accepted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
  #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
  pub id: Option<i32>,
  pub sender: String,
  pub content: String,
  pub timestamp: String,
  pub room_id: i32,
}

fn present<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
  D: Deserializer<'de>,
{
  i32::deserialize(deserializer).map(Some)
}

impl Message {
  /// Builds a message that has not been stored yet, stamped with the
  /// current local time.
  pub fn compose(
    sender: impl Into<String>,
    content: impl Into<String>,
    room_id: i32,
  ) -> Self {
    Self {
      id: None,
      sender: sender.into(),
      content: content.into(),
      timestamp: Local::now().to_rfc3339(),
      room_id,
    }
  }

  pub fn with_id(self, id: i32) -> Self {
    Self { id: Some(id), ..self }
  }

  pub fn is_stored(&self) -> bool {
    self.id.is_some()
  }

  pub fn belongs_to(&self, room: &Room) -> bool {
    self.room_id == room.id
  }

  /// The timestamp as RFC 3339, if it happens to be written that way.
  /// Any other format yields `None`.
  pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(&self.timestamp).ok()
  }
}
