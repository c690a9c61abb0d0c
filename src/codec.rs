//! Frame codec - reliable framing over a stream whose reads and writes may
//! be partial.
//!
//! A single socket read is not guaranteed to return the full requested
//! count, so [`read_frame`] accumulates until exactly the declared number
//! of bytes has arrived. A zero-byte read result at any point before the
//! frame is complete means the peer disconnected and is reported as
//! [`WireError::PeerClosed`], distinct from a protocol error. A zero-length
//! *prefix* is a valid empty frame, never a disconnect.
//!
//! # Example
//!
//! ```no_run
//! use tensorwire::codec::{read_frame, write_frame};
//! use tensorwire::protocol::DEFAULT_MAX_FRAME_SIZE;
//!
//! # async fn demo(stream: &mut tokio::net::UnixStream) -> tensorwire::Result<()> {
//! write_frame(stream, b"request").await?;
//! let response = read_frame(stream, DEFAULT_MAX_FRAME_SIZE).await?;
//! assert_eq!(response.len(), 7);
//! # Ok(())
//! # }
//! ```

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{Result, WireError};
use crate::protocol::{decode_len_prefix, encode_len_prefix, Frame, LEN_PREFIX_SIZE};

/// Read exactly one frame from the stream.
///
/// Reads the 4-byte little-endian length prefix, checks the declared
/// length against `max_frame_size` before allocating the assembly buffer,
/// then accumulates exactly that many payload bytes across as many reads
/// as the stream requires.
///
/// # Errors
///
/// - [`WireError::PeerClosed`] if the stream reports zero bytes read before
///   the frame is complete (including on the very first prefix byte).
/// - [`WireError::FrameTooLarge`] if the declared length exceeds the cap.
/// - [`WireError::Io`] for any other transport failure.
pub async fn read_frame<R>(reader: &mut R, max_frame_size: u32) -> Result<Frame>
where
    R: AsyncRead + Unpin,
{
    let mut prefix = [0u8; LEN_PREFIX_SIZE];
    read_full(reader, &mut prefix).await?;
    let len = decode_len_prefix(&prefix);

    if len > max_frame_size {
        return Err(WireError::FrameTooLarge {
            len: u64::from(len),
            max: u64::from(max_frame_size),
        });
    }

    let mut payload = BytesMut::zeroed(len as usize);
    read_full(reader, &mut payload).await?;

    Ok(Frame::new(payload.freeze()))
}

/// Write one frame: the little-endian length prefix followed by the payload.
///
/// The prefix is always computed from the actual payload length, never
/// echoed from a request, so a non-size-preserving transform cannot corrupt
/// framing. Partial writes are retried until every byte is on the wire,
/// then the stream is flushed.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let len = u32::try_from(payload.len()).map_err(|_| WireError::FrameTooLarge {
        len: payload.len() as u64,
        max: u64::from(u32::MAX),
    })?;

    writer.write_all(&encode_len_prefix(len)).await?;
    writer.write_all(payload).await?;
    writer.flush().await?;
    Ok(())
}

/// Fill `buf` completely, retrying partial reads.
///
/// A zero-byte read before `buf` is full signals peer disconnection.
async fn read_full<R>(reader: &mut R, buf: &mut [u8]) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..]).await?;
        if n == 0 {
            return Err(WireError::PeerClosed);
        }
        filled += n;
    }
    Ok(())
}
