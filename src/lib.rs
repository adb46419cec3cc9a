//! # ircng
//!
//! An incremental IRC line framer and semantic event dispatcher for client
//! connections.
//!
//! Raw chunks read from a connection are pushed into an [`IrcStream`], which
//! reassembles complete lines, parses each one into a [`ParsedMessage`] and
//! raises named events (`message`, `numeric`, `join`, `privmsg`, ...) to the
//! handlers subscribed on it. Outbound commands leave the stream as `send`
//! events carrying a fully terminated wire line.
//!
//! The library performs no I/O of its own. With the `tokio` feature enabled,
//! [`IrcCodec`] and [`transport::pump`] connect it to async readers.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use parking_lot::Mutex;
//! use ircng::{Event, IrcStream};
//!
//! let outbox = Arc::new(Mutex::new(Vec::new()));
//! let mut stream = IrcStream::new();
//!
//! let sink = Arc::clone(&outbox);
//! stream.on("send", move |event| {
//!     if let Event::Send(send) = event {
//!         sink.lock().push(send.message.clone());
//!     }
//! });
//!
//! stream.push("PING irc.exa");
//! stream.push("mple.net\r\n");
//!
//! assert_eq!(outbox.lock()[0], "PONG irc.example.net\r\n");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod command;
pub mod config;
pub mod dispatch;
pub mod emitter;
pub mod error;
pub mod event;
#[cfg(feature = "tokio")]
pub mod irc;
pub mod line;
pub mod message;
pub mod numeric;
pub mod stream;
#[cfg(feature = "tokio")]
pub mod transport;

pub use self::command::ClientCommand;
pub use self::config::{RegistrationParams, DEFAULT_NICK, DEFAULT_REALNAME, DEFAULT_USERNAME};
pub use self::emitter::Emitter;
pub use self::error::{ProtocolError, Result};
pub use self::event::{
    ChatEvent, Event, JoinEvent, NumericEvent, PartEvent, QuitEvent, ReplyEvent, SendEvent,
    TopicEvent,
};
#[cfg(feature = "tokio")]
pub use self::irc::IrcCodec;
pub use self::line::LineFramer;
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::message::ParsedMessage;
pub use self::stream::IrcStream;
