//! Connection handler - drives the request/response cycle for one peer.
//!
//! Per iteration: receive one frame, apply the tensor transform, send the
//! response frame. The loop runs until the peer disconnects (the normal
//! end of a session) or a fatal condition is hit. On a shape mismatch the
//! session is torn down rather than resynchronized: once the stream is
//! misaligned there is no way to recover frame boundaries.

use tokio::io::{AsyncRead, AsyncWrite};

use crate::codec::{read_frame, write_frame};
use crate::error::{Result, WireError};
use crate::tensor::TensorTransform;

/// Summary of a cleanly closed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Number of request/response cycles completed before the peer closed.
    pub frames_served: u64,
}

/// Handles one connected peer until disconnection or fatal error.
#[derive(Debug, Clone)]
pub struct ConnectionHandler {
    transform: TensorTransform,
    max_frame_size: u32,
}

impl ConnectionHandler {
    /// Create a handler applying `transform` to every received payload.
    pub fn new(transform: TensorTransform, max_frame_size: u32) -> Self {
        Self {
            transform,
            max_frame_size,
        }
    }

    /// Run the session loop to completion.
    ///
    /// Returns `Ok` with a [`SessionReport`] when the peer closes the
    /// connection. Any other error (shape mismatch, oversized frame,
    /// transport failure) is fatal to this session and propagates to the
    /// caller; responses are strictly ordered, one per request, never
    /// pipelined.
    pub async fn run<S>(&self, stream: &mut S) -> Result<SessionReport>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut frames_served = 0u64;

        loop {
            let frame = match read_frame(stream, self.max_frame_size).await {
                Ok(frame) => frame,
                Err(WireError::PeerClosed) => {
                    tracing::info!(frames_served, "peer disconnected");
                    return Ok(SessionReport { frames_served });
                }
                Err(err) => return Err(err),
            };

            let response = self.transform.apply(frame.payload())?;
            write_frame(stream, &response).await?;

            frames_served += 1;
            tracing::debug!(len = frame.len(), frames_served, "frame served");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::DEFAULT_MAX_FRAME_SIZE;
    use crate::tensor::TensorShape;

    fn handler() -> ConnectionHandler {
        // 1x1x1x4: payloads are exactly 4 bytes.
        ConnectionHandler::new(
            TensorTransform::new(TensorShape::new(1, 1, 1, 4)),
            DEFAULT_MAX_FRAME_SIZE,
        )
    }

    #[tokio::test]
    async fn test_session_serves_frames_then_closes() {
        let (mut client, mut server) = tokio::io::duplex(4096);
        let handler = handler();

        let session = tokio::spawn(async move { handler.run(&mut server).await });

        write_frame(&mut client, &[0x01, 0x02, 0x03, 0x04])
            .await
            .unwrap();
        let resp = read_frame(&mut client, DEFAULT_MAX_FRAME_SIZE)
            .await
            .unwrap();
        assert_eq!(resp.payload(), &[0x02, 0x03, 0x04, 0x05]);

        write_frame(&mut client, &[0xFF, 0x00, 0x00, 0x00])
            .await
            .unwrap();
        let resp = read_frame(&mut client, DEFAULT_MAX_FRAME_SIZE)
            .await
            .unwrap();
        assert_eq!(resp.payload(), &[0x00, 0x01, 0x01, 0x01]);

        drop(client);
        let report = session.await.unwrap().unwrap();
        assert_eq!(report.frames_served, 2);
    }

    #[tokio::test]
    async fn test_immediate_disconnect_is_clean_close() {
        let (client, mut server) = tokio::io::duplex(64);
        drop(client);

        let report = handler().run(&mut server).await.unwrap();
        assert_eq!(report.frames_served, 0);
    }

    #[tokio::test]
    async fn test_shape_mismatch_fails_session() {
        let (mut client, mut server) = tokio::io::duplex(4096);
        let handler = handler();

        let session = tokio::spawn(async move { handler.run(&mut server).await });

        write_frame(&mut client, &[0x01, 0x02, 0x03]).await.unwrap();

        let err = session.await.unwrap().unwrap_err();
        assert!(matches!(
            err,
            WireError::ShapeMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }
}
