//! Wire format encoding and decoding.
//!
//! Implements the frame prefix format:
//! ```text
//! ┌──────────┬─────────────────┐
//! │ Length   │ Payload         │
//! │ 4 bytes  │ `length` bytes  │
//! │ uint32 LE│ opaque          │
//! └──────────┴─────────────────┘
//! ```
//!
//! The length prefix is Little Endian. A prefix of 0 is valid and denotes
//! an empty payload; it is never a disconnection signal (disconnection is
//! a zero-byte *read*, handled in [`crate::codec`]).

/// Length prefix size in bytes (fixed, exactly 4).
pub const LEN_PREFIX_SIZE: usize = 4;

/// Default maximum frame payload size (256 MiB).
///
/// Large enough for the default 40x3x1024x1024 u8 tensor (120 MiB) with
/// headroom, small enough to bound what one frame can make us allocate.
pub const DEFAULT_MAX_FRAME_SIZE: u32 = 268_435_456;

/// Encode a payload length as a wire prefix (Little Endian).
///
/// # Example
///
/// ```
/// use tensorwire::protocol::encode_len_prefix;
///
/// let prefix = encode_len_prefix(4);
/// assert_eq!(prefix, [0x04, 0x00, 0x00, 0x00]);
/// ```
#[inline]
pub fn encode_len_prefix(len: u32) -> [u8; LEN_PREFIX_SIZE] {
    len.to_le_bytes()
}

/// Decode a wire prefix into a payload length (Little Endian).
///
/// Every 4-byte value decodes to *some* length; malformed prefixes are not
/// detectable at this layer. The only enforceable check is the configured
/// maximum, applied by the codec before allocation.
#[inline]
pub fn decode_len_prefix(buf: &[u8; LEN_PREFIX_SIZE]) -> u32 {
    u32::from_le_bytes(*buf)
}
