//! Demo caller: offload one tensor, time the round trip, verify the result.
//!
//! Plays the role the custom node plays in production: connect to the
//! worker's endpoint, send one tensor-shaped frame, wait for the
//! transformed tensor, print timings.
//!
//! ```sh
//! cargo run --example client -- /tmp/tensorwire.sock 125829120
//! ```

use std::time::Instant;

use tensorwire::codec::{read_frame, write_frame};
use tensorwire::protocol::DEFAULT_MAX_FRAME_SIZE;
use tokio::net::UnixStream;

#[tokio::main]
async fn main() -> tensorwire::Result<()> {
    let mut args = std::env::args().skip(1);
    let socket = args
        .next()
        .unwrap_or_else(|| "/tmp/tensorwire.sock".to_string());
    let payload_len: usize = args
        .next()
        .map(|s| s.parse().expect("payload length must be a number"))
        .unwrap_or(40 * 3 * 1024 * 1024);

    let mut stream = UnixStream::connect(&socket).await?;
    println!("connected to worker at {socket}");

    let payload: Vec<u8> = (0..payload_len).map(|i| (i % 251) as u8).collect();

    let started = Instant::now();
    write_frame(&mut stream, &payload).await?;
    println!("sent {payload_len} bytes in {:?}", started.elapsed());

    let recv_started = Instant::now();
    let response = read_frame(&mut stream, DEFAULT_MAX_FRAME_SIZE).await?;
    println!(
        "received {} bytes in {:?} (total {:?})",
        response.len(),
        recv_started.elapsed(),
        started.elapsed()
    );

    let ok = response
        .payload()
        .iter()
        .zip(payload.iter())
        .all(|(out, inp)| *out == inp.wrapping_add(1));
    println!("response verified: {}", if ok { "ok" } else { "MISMATCH" });

    Ok(())
}
