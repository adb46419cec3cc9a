//! IRC message codec for tokio.
//!
//! This module provides a codec that decodes lines into [`ParsedMessage`]s
//! and encodes [`ClientCommand`]s, using the tokio codec framework.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::command::ClientCommand;
use crate::error;
use crate::line::LineCodec;
use crate::message::{parse, ParsedMessage};

/// Tokio codec for decoding IRC lines and encoding client commands.
///
/// Wraps [`LineCodec`] and parses lines into [`ParsedMessage`] values.
#[derive(Debug, Default)]
pub struct IrcCodec {
    inner: LineCodec,
}

impl IrcCodec {
    /// Create a new codec with no line limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new codec with custom max line length.
    ///
    /// # Arguments
    /// * `max_len` - Maximum line length in bytes, terminator included
    #[must_use]
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            inner: LineCodec::with_max_len(max_len),
        }
    }
}

impl Decoder for IrcCodec {
    type Item = ParsedMessage;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<ParsedMessage>> {
        Ok(self.inner.decode(src)?.map(|line| parse(&line)))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> error::Result<Option<ParsedMessage>> {
        Ok(self.inner.decode_eof(src)?.map(|line| parse(&line)))
    }
}

impl Encoder<ClientCommand> for IrcCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, command: ClientCommand, dst: &mut BytesMut) -> error::Result<()> {
        self.inner.encode(command.to_string(), dst)
    }
}

impl Encoder<&ClientCommand> for IrcCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, command: &ClientCommand, dst: &mut BytesMut) -> error::Result<()> {
        self.inner.encode(command.to_string(), dst)
    }
}
