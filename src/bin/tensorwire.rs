//! Server entrypoint.
//!
//! Configuration precedence: command-line flags override config-file
//! values, which override defaults.

use std::path::PathBuf;

use clap::Parser;
use tensorwire::{FrameServer, ServerConfig, TensorShape};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tensorwire", about = "Local tensor-offload frame server")]
struct Args {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Unix socket path to listen on.
    #[arg(long)]
    socket: Option<PathBuf>,

    /// Tensor shape as B,C,H,W (e.g. 40,3,1024,1024).
    #[arg(long)]
    shape: Option<TensorShape>,

    /// Maximum accepted frame payload size in bytes.
    #[arg(long)]
    max_frame_size: Option<u32>,
}

#[tokio::main]
async fn main() -> tensorwire::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::from_json_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(socket) = args.socket {
        config.socket_path = socket;
    }
    if let Some(shape) = args.shape {
        config.shape = shape;
    }
    if let Some(max) = args.max_frame_size {
        config.max_frame_size = max;
    }

    FrameServer::bind(&config)?.run().await
}
