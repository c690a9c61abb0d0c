//! Protocol module - wire format and frame type.
//!
//! This module implements the binary protocol spoken on the local socket:
//! - 4-byte little-endian length prefix encoding/decoding
//! - Frame struct over `bytes::Bytes` payloads

mod frame;
mod wire_format;

pub use frame::{build_frame, Frame};
pub use wire_format::{
    decode_len_prefix, encode_len_prefix, DEFAULT_MAX_FRAME_SIZE, LEN_PREFIX_SIZE,
};
