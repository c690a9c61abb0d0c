//! Frame struct with typed accessors.
//!
//! Represents one complete protocol message. Uses `bytes::Bytes` for
//! zero-copy payload sharing. The declared length is derived from the
//! payload, so the length/payload invariant holds by construction.
//!
//! # Example
//!
//! ```
//! use tensorwire::protocol::Frame;
//! use bytes::Bytes;
//!
//! let frame = Frame::new(Bytes::from_static(b"hello"));
//! assert_eq!(frame.len(), 5);
//! assert_eq!(frame.payload(), b"hello");
//! ```

use bytes::Bytes;

use super::wire_format::{encode_len_prefix, LEN_PREFIX_SIZE};

/// A complete protocol frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Payload bytes (zero-copy via `bytes::Bytes`).
    payload: Bytes,
}

impl Frame {
    /// Create a new frame over an existing payload.
    pub fn new(payload: Bytes) -> Self {
        Self { payload }
    }

    /// Create a frame from a raw byte slice (copies data).
    pub fn from_slice(payload: &[u8]) -> Self {
        Self {
            payload: Bytes::copy_from_slice(payload),
        }
    }

    /// Payload length in bytes, as declared on the wire.
    #[inline]
    pub fn len(&self) -> u32 {
        self.payload.len() as u32
    }

    /// Check for an empty payload (a valid frame, not a disconnect).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Get a reference to the payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Get a clone of the payload as Bytes (cheap, zero-copy).
    #[inline]
    pub fn payload_bytes(&self) -> Bytes {
        self.payload.clone()
    }

    /// Consume the frame, yielding the payload.
    #[inline]
    pub fn into_payload(self) -> Bytes {
        self.payload
    }
}

/// Build a complete frame as a single byte vector (prefix + payload).
///
/// Useful for test harnesses and callers that assemble a frame before a
/// single write.
///
/// # Example
///
/// ```
/// use tensorwire::protocol::{build_frame, LEN_PREFIX_SIZE};
///
/// let bytes = build_frame(b"hello");
/// assert_eq!(bytes.len(), LEN_PREFIX_SIZE + 5);
/// assert_eq!(&bytes[..LEN_PREFIX_SIZE], &[5, 0, 0, 0]);
/// ```
pub fn build_frame(payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(LEN_PREFIX_SIZE + payload.len());
    buf.extend_from_slice(&encode_len_prefix(payload.len() as u32));
    buf.extend_from_slice(payload);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_creation() {
        let frame = Frame::new(Bytes::from_static(b"hello"));
        assert_eq!(frame.len(), 5);
        assert_eq!(frame.payload(), b"hello");
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_frame_from_slice() {
        let frame = Frame::from_slice(b"test");
        assert_eq!(frame.payload(), b"test");
        assert_eq!(frame.len(), 4);
    }

    #[test]
    fn test_frame_empty_payload() {
        let frame = Frame::new(Bytes::new());
        assert_eq!(frame.len(), 0);
        assert!(frame.is_empty());
    }

    #[test]
    fn test_payload_bytes_zero_copy() {
        let original = Bytes::from_static(b"test data");
        let frame = Frame::new(original.clone());

        let cloned = frame.payload_bytes();
        assert_eq!(cloned, original);
        assert_eq!(cloned.as_ptr(), original.as_ptr());
    }

    #[test]
    fn test_into_payload() {
        let frame = Frame::from_slice(b"abc");
        let payload = frame.into_payload();
        assert_eq!(&payload[..], b"abc");
    }

    #[test]
    fn test_build_frame() {
        let bytes = build_frame(b"hello");
        assert_eq!(bytes.len(), LEN_PREFIX_SIZE + 5);
        assert_eq!(&bytes[..LEN_PREFIX_SIZE], &[0x05, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[LEN_PREFIX_SIZE..], b"hello");
    }

    #[test]
    fn test_build_frame_empty_payload() {
        let bytes = build_frame(b"");
        assert_eq!(bytes, vec![0, 0, 0, 0]);
    }
}
