//! Unix Domain Socket listener with stale-endpoint cleanup.
//!
//! The endpoint is a filesystem path. A prior crashed instance leaves its
//! socket file behind, which would make a fresh bind fail with "address in
//! use", so [`SocketListener::bind`] removes a stale file first. A removal
//! failure for any reason other than "does not exist" is treated as the
//! endpoint being genuinely in use and aborts startup.
//!
//! # Example
//!
//! ```ignore
//! use tensorwire::transport::SocketListener;
//!
//! let listener = SocketListener::bind("/tmp/tensorwire.sock")?;
//! let stream = listener.accept().await?;
//! ```

use std::path::{Path, PathBuf};

use tokio::net::{UnixListener, UnixStream};

use crate::error::{Result, WireError};

/// Unix Domain Socket listener bound to a filesystem path.
///
/// Exclusively owned by the server for the process lifetime; the socket
/// file is removed again when the listener is dropped.
#[derive(Debug)]
pub struct SocketListener {
    listener: UnixListener,
    path: PathBuf,
}

impl SocketListener {
    /// Remove any stale socket file at `path`, then bind and listen.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// - [`WireError::EndpointInUse`] if a pre-existing artifact at the
    ///   path could not be removed.
    /// - [`WireError::Io`] if the bind itself fails.
    pub fn bind(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        match std::fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed stale socket file"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(WireError::EndpointInUse { path, source: err });
            }
        }

        let listener = UnixListener::bind(&path)?;
        tracing::info!(path = %path.display(), "listening");

        Ok(Self { listener, path })
    }

    /// Accept a single connection.
    ///
    /// Connections arriving while one is being served queue in the OS
    /// backlog until the next call.
    pub async fn accept(&self) -> Result<UnixStream> {
        let (stream, _addr) = self.listener.accept().await?;
        Ok(stream)
    }

    /// The filesystem path this listener is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SocketListener {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_creates_and_drop_removes_socket_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("worker.sock");

        let listener = SocketListener::bind(&path).unwrap();
        assert!(path.exists());
        assert_eq!(listener.path(), path);

        drop(listener);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_bind_removes_stale_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stale.sock");

        // Simulate a leftover from a crashed instance.
        std::fs::write(&path, b"").unwrap();

        let listener = SocketListener::bind(&path).unwrap();
        assert!(path.exists());
        drop(listener);
    }

    #[tokio::test]
    async fn test_unremovable_artifact_is_endpoint_in_use() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("held.sock");

        // A directory at the endpoint path cannot be unlinked with
        // remove_file, so removal fails with a non-NotFound error.
        std::fs::create_dir(&path).unwrap();

        let err = SocketListener::bind(&path).unwrap_err();
        assert!(matches!(err, WireError::EndpointInUse { .. }));
    }
}
