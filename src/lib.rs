//! Record shapes shared between the chat client and server: rooms and the
//! messages posted in them, plus structural validation of their JSON form.

#[macro_use]
extern crate log;

mod error;
mod msg;
mod room;
pub mod schema;

pub use error::{Result, SchemaError};
pub use msg::Message;
pub use room::Room;
pub use schema::{parse, parse_document, validate, Record, Shape};
