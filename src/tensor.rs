//! Tensor shape and the elementwise transform applied to each payload.
//!
//! A payload is interpreted as a flat 4-D array of unsigned 8-bit elements
//! with a fixed, configuration-agreed shape. The transform stands in for
//! "run one inference step": it must be deterministic, size-preserving, and
//! side-effect-free so it composes safely in the serial request loop. Here
//! it adds 1 to every element with wraparound at 256.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WireError};

/// Fixed 4-D shape of the tensor carried in every payload (u8 elements).
///
/// The default, 40x3x1024x1024, is the 120 MiB image batch the offload
/// worker was built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorShape {
    pub batch: u32,
    pub channels: u32,
    pub height: u32,
    pub width: u32,
}

impl TensorShape {
    /// Create a shape from its four dimensions.
    pub const fn new(batch: u32, channels: u32, height: u32, width: u32) -> Self {
        Self {
            batch,
            channels,
            height,
            width,
        }
    }

    /// Total element count, which for u8 elements is also the required
    /// payload byte length.
    pub fn byte_len(&self) -> u64 {
        u64::from(self.batch)
            * u64::from(self.channels)
            * u64::from(self.height)
            * u64::from(self.width)
    }
}

impl Default for TensorShape {
    fn default() -> Self {
        Self::new(40, 3, 1024, 1024)
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{}x{}",
            self.batch, self.channels, self.height, self.width
        )
    }
}

impl FromStr for TensorShape {
    type Err = String;

    /// Parse `"B,C,H,W"` (as accepted on the command line).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let dims: Vec<u32> = s
            .split(',')
            .map(|d| d.trim().parse::<u32>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| format!("invalid shape '{s}': {e}"))?;
        match dims[..] {
            [batch, channels, height, width] => Ok(Self::new(batch, channels, height, width)),
            _ => Err(format!(
                "invalid shape '{s}': expected 4 comma-separated dims, got {}",
                dims.len()
            )),
        }
    }
}

/// Size-preserving elementwise transform over a fixed-shape u8 tensor.
#[derive(Debug, Clone)]
pub struct TensorTransform {
    shape: TensorShape,
}

impl TensorTransform {
    /// Create a transform requiring payloads of exactly `shape` size.
    pub fn new(shape: TensorShape) -> Self {
        Self { shape }
    }

    /// The shape this transform requires.
    #[inline]
    pub fn shape(&self) -> &TensorShape {
        &self.shape
    }

    /// Required payload byte length.
    #[inline]
    pub fn required_len(&self) -> u64 {
        self.shape.byte_len()
    }

    /// Apply the transform: add 1 to every element, modulo 256.
    ///
    /// Wrapping arithmetic, matching fixed-width unsigned overflow; 0xFF
    /// becomes 0x00, never saturates. The output always has the same
    /// length as the input.
    ///
    /// # Errors
    ///
    /// [`WireError::ShapeMismatch`] if `payload` is not exactly the
    /// required tensor size.
    pub fn apply(&self, payload: &[u8]) -> Result<Bytes> {
        let expected = self.required_len();
        if payload.len() as u64 != expected {
            return Err(WireError::ShapeMismatch {
                expected,
                actual: payload.len() as u64,
            });
        }

        let out: Vec<u8> = payload.iter().map(|e| e.wrapping_add(1)).collect();
        Ok(Bytes::from(out))
    }
}
