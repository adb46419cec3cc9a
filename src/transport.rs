//! Async read pump.
//!
//! Drives an [`IrcStream`] from any [`AsyncRead`]. The pump does not write:
//! replies leave through `send` handlers, which the caller wires to the
//! connection's write half.

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::error;
use crate::stream::IrcStream;

/// Size of the read buffer used by [`pump`].
pub const READ_CHUNK_SIZE: usize = 4096;

/// Read `reader` to end of stream, pushing every chunk into `stream`.
///
/// Returns the total number of bytes read. A partial line left at end of
/// stream stays in the stream's buffer.
pub async fn pump<R>(stream: &mut IrcStream, mut reader: R) -> error::Result<u64>
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; READ_CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            debug!(total, buffered = stream.buffered_len(), "reader closed");
            return Ok(total);
        }
        total += n as u64;
        stream.push(&buf[..n]);
    }
}
