//! Error types for tensorwire.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for all tensorwire operations.
#[derive(Debug, Error)]
pub enum WireError {
    /// I/O error during socket operations (broken pipe, reset, etc.).
    ///
    /// Fatal to the current connection only; the accept loop continues.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer closed the connection before a frame was fully received.
    ///
    /// This is the normal end-of-session condition, not an operator-facing
    /// error: a zero-byte read result mid-frame means the caller went away.
    #[error("peer closed connection")]
    PeerClosed,

    /// A fully received payload does not match the tensor size the
    /// transform requires. Fatal to the current connection: frame
    /// boundaries cannot be recovered once the stream is misaligned.
    #[error("shape mismatch: expected {expected} payload bytes, got {actual}")]
    ShapeMismatch { expected: u64, actual: u64 },

    /// The declared frame length exceeds the configured maximum.
    ///
    /// Checked before the assembly buffer is allocated, so a buggy or
    /// malicious peer cannot force an unbounded allocation.
    #[error("frame of {len} bytes exceeds maximum {max}")]
    FrameTooLarge { len: u64, max: u64 },

    /// Removing a stale socket artifact at the endpoint path failed for a
    /// reason other than "does not exist". A live process may already be
    /// bound there. Fatal at startup: the server must not start.
    #[error("endpoint {} in use: {source}", .path.display())]
    EndpointInUse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse error.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl WireError {
    /// Check whether this error is the clean end-of-session condition.
    #[inline]
    pub fn is_peer_closed(&self) -> bool {
        matches!(self, WireError::PeerClosed)
    }
}

/// Result type alias using WireError.
pub type Result<T> = std::result::Result<T, WireError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = WireError::ShapeMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "shape mismatch: expected 4 payload bytes, got 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let err: WireError = io.into();
        assert!(matches!(err, WireError::Io(_)));
        assert!(!err.is_peer_closed());
    }

    #[test]
    fn test_peer_closed_predicate() {
        assert!(WireError::PeerClosed.is_peer_closed());
    }
}
