//! Parsed IRC lines.

mod parse;
mod serialize;
mod types;

pub use self::parse::parse;
pub use self::types::ParsedMessage;
