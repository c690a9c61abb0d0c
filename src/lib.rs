//! # tensorwire
//!
//! Local tensor-offload worker speaking a length-prefixed binary frame
//! protocol over a Unix Domain Socket.
//!
//! A single fixed caller connects to the endpoint, sends one fixed-shape
//! u8 tensor per frame, and waits for the transformed tensor before
//! sending the next. The server handles exactly one connection at a time,
//! synchronously and sequentially.
//!
//! ## Wire format
//!
//! ```text
//! Frame := length:u32_le  payload:byte[length]
//! ```
//!
//! Request and response use identical framing; the protocol is symmetric
//! half-duplex with one in-flight frame per direction per turn.
//!
//! ## Example
//!
//! ```ignore
//! use tensorwire::{FrameServer, ServerConfig, TensorShape};
//!
//! #[tokio::main]
//! async fn main() -> tensorwire::Result<()> {
//!     let config = ServerConfig::new("/tmp/tensorwire.sock")
//!         .shape(TensorShape::new(40, 3, 1024, 1024));
//!     FrameServer::bind(&config)?.run().await
//! }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod server;
pub mod tensor;
pub mod transport;

pub use config::ServerConfig;
pub use error::{Result, WireError};
pub use handler::{ConnectionHandler, SessionReport};
pub use server::FrameServer;
pub use tensor::{TensorShape, TensorTransform};
