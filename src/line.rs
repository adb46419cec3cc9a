//! Incremental line framing.
//!
//! [`LineFramer`] owns the frame buffer of one connection. Chunks are appended
//! as they arrive and complete lines are extracted one at a time: a line ends
//! at a line-feed, and a carriage-return immediately before it is stripped.
//! Whatever follows the last line-feed stays buffered for the next chunk.
//!
//! With the `tokio` feature, [`LineCodec`] applies the same rules as a
//! `tokio_util` codec.

use bytes::BytesMut;
#[cfg(feature = "tokio")]
use tokio_util::codec::{Decoder, Encoder};
#[cfg(feature = "tokio")]
use tracing::{debug, warn};

#[cfg(feature = "tokio")]
use crate::error;

/// Position of the first line-feed at or after `from`.
pub(crate) fn find_newline(buf: &[u8], from: usize) -> Option<usize> {
    buf[from..]
        .iter()
        .position(|b| *b == b'\n')
        .map(|offset| from + offset)
}

/// Remove everything up to and including the line-feed at `newline` from the
/// front of `buf`, returning the line without its terminator.
///
/// Bytes are decoded per complete line, so a multi-byte character split
/// across two chunks is decoded whole. Invalid UTF-8 is replaced rather than
/// rejected.
pub(crate) fn split_line(buf: &mut BytesMut, newline: usize) -> String {
    let mut line = buf.split_to(newline + 1);
    line.truncate(newline);
    if line.last() == Some(&b'\r') {
        line.truncate(newline - 1);
    }
    String::from_utf8_lossy(&line).into_owned()
}

/// Frame buffer that reassembles arbitrarily chunked input into lines.
///
/// # Example
///
/// ```
/// use ircng::LineFramer;
///
/// let mut framer = LineFramer::new();
/// assert_eq!(framer.push("PING a\r\nPI").collect::<Vec<_>>(), vec!["PING a"]);
/// assert_eq!(framer.push("NG b\r\n").collect::<Vec<_>>(), vec!["PING b"]);
/// assert!(framer.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct LineFramer {
    buffer: BytesMut,
    /// Index of next byte to check for newline
    next_index: usize,
}

impl LineFramer {
    /// Create an empty framer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk without extracting anything.
    ///
    /// An empty chunk leaves the framer untouched.
    pub fn extend(&mut self, chunk: impl AsRef<[u8]>) {
        let chunk = chunk.as_ref();
        if !chunk.is_empty() {
            self.buffer.extend_from_slice(chunk);
        }
    }

    /// Extract the next complete line, if the buffer holds one.
    pub fn next_line(&mut self) -> Option<String> {
        match find_newline(&self.buffer, self.next_index) {
            Some(newline) => {
                self.next_index = 0;
                Some(split_line(&mut self.buffer, newline))
            }
            None => {
                // Remember where we stopped so the partial line isn't rescanned
                self.next_index = self.buffer.len();
                None
            }
        }
    }

    /// Append a chunk and iterate over every line it completes, in order.
    ///
    /// Lines not pulled from the iterator remain buffered.
    pub fn push(&mut self, chunk: impl AsRef<[u8]>) -> Lines<'_> {
        self.extend(chunk);
        Lines { framer: self }
    }

    /// Bytes held that do not yet form a complete line.
    #[must_use]
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discard any buffered partial line.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.next_index = 0;
    }
}

/// Iterator over the complete lines in a [`LineFramer`].
#[derive(Debug)]
pub struct Lines<'a> {
    framer: &'a mut LineFramer,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.framer.next_line()
    }
}

/// Line-based codec that yields lines with their terminator stripped.
///
/// Unlimited by default; [`LineCodec::with_max_len`] rejects longer lines.
#[cfg(feature = "tokio")]
#[derive(Debug, Default)]
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length, terminator included
    max_len: Option<usize>,
}

#[cfg(feature = "tokio")]
impl LineCodec {
    /// Create a new codec with no line limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new codec with a maximum line length in bytes.
    #[must_use]
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len: Some(max_len),
        }
    }

    fn check_len(&self, actual: usize) -> error::Result<()> {
        match self.max_len {
            Some(limit) if actual > limit => {
                warn!(actual, limit, "rejecting over-long line");
                Err(error::ProtocolError::MessageTooLong { actual, limit })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(feature = "tokio")]
impl Decoder for LineCodec {
    type Item = String;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        if let Some(newline) = find_newline(src, self.next_index) {
            self.next_index = 0;

            if let Err(err) = self.check_len(newline + 1) {
                // Drop the offending line so the stream can resume
                let _ = src.split_to(newline + 1);
                return Err(err);
            }

            Ok(Some(split_line(src, newline)))
        } else {
            self.next_index = src.len();
            self.check_len(src.len())?;
            Ok(None)
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        match self.decode(src)? {
            Some(line) => Ok(Some(line)),
            None => {
                if !src.is_empty() {
                    debug!(len = src.len(), "discarding unterminated line at end of stream");
                    src.clear();
                    self.next_index = 0;
                }
                Ok(None)
            }
        }
    }
}

#[cfg(feature = "tokio")]
impl Encoder<String> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> error::Result<()> {
        dst.extend_from_slice(line.as_bytes());
        Ok(())
    }
}
