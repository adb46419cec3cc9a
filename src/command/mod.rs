//! Outbound client commands.

mod serialize;
mod types;

pub use self::types::{channel_name, ClientCommand};
