//! Frame server - listener lifecycle and serial connection dispatch.
//!
//! The server owns the listening endpoint for the process lifetime and
//! accepts exactly one connection at a time: the workload models a
//! long-lived accelerator-offload worker with a single fixed caller, not a
//! multi-tenant service. A second connection attempt queues in the OS
//! backlog until the current session ends.
//!
//! Connection-level failures (shape mismatch, oversized frame, transport
//! errors) are logged and contained; one misbehaving peer never takes down
//! the accept loop. Only startup failures abort.

use crate::config::ServerConfig;
use crate::error::Result;
use crate::handler::ConnectionHandler;
use crate::tensor::TensorTransform;
use crate::transport::SocketListener;

/// Single-connection-at-a-time frame server over a Unix socket.
#[derive(Debug)]
pub struct FrameServer {
    listener: SocketListener,
    handler: ConnectionHandler,
}

impl FrameServer {
    /// Bind the configured endpoint and prepare the connection handler.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// [`crate::WireError::EndpointInUse`] or [`crate::WireError::Io`] if
    /// the endpoint cannot be claimed. Startup errors are fatal: no
    /// connection is accepted.
    pub fn bind(config: &ServerConfig) -> Result<Self> {
        let listener = SocketListener::bind(&config.socket_path)?;
        let transform = TensorTransform::new(config.shape);
        tracing::info!(
            shape = %config.shape,
            max_frame_size = config.max_frame_size,
            "frame server ready"
        );

        Ok(Self {
            listener,
            handler: ConnectionHandler::new(transform, config.max_frame_size),
        })
    }

    /// The endpoint path this server is bound to.
    pub fn path(&self) -> &std::path::Path {
        self.listener.path()
    }

    /// Accept one connection and run its session to completion.
    ///
    /// A failed session is logged here and does not propagate: the error
    /// contract is that per-connection conditions never crash the server.
    pub async fn serve_next(&self) -> Result<()> {
        tracing::info!("waiting for connection");
        let mut stream = self.listener.accept().await?;
        tracing::info!("connection accepted");

        match self.handler.run(&mut stream).await {
            Ok(report) => {
                tracing::info!(frames_served = report.frames_served, "session closed");
            }
            Err(err) => {
                tracing::error!(error = %err, "session failed");
            }
        }
        Ok(())
    }

    /// Run the accept loop forever.
    ///
    /// Returns only if accepting itself fails, which indicates the
    /// listener is unusable (out of scope: process-level termination is a
    /// supervisor concern).
    pub async fn run(self) -> Result<()> {
        loop {
            self.serve_next().await?;
        }
    }
}
