//! WebSocket demo client
//!
//! Opens a single connection to the demo server, logs every inbound
//! message, and sends a greeting on a fixed interval.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ws_demo_client::{Config, Connection, Payload, SendLoop};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    // Load configuration
    let config = Config::load()?;
    info!(url = %config.url(), "starting demo client");

    // Establish the connection; a handshake failure propagates out of main
    // and the process exits non-zero after the error is reported.
    let conn = Connection::establish(&config.url(), Box::new(log_message)).await?;

    // The send loop keeps the process alive from here on.
    SendLoop::new(conn, &config).run().await;

    Ok(())
}

/// Log an inbound payload, tagged by how it arrived on the wire
fn log_message(payload: Payload) {
    match payload {
        Payload::Text(text) => info!(text = %text, "recv text message"),
        Payload::Binary(data) => info!(bytes = data.len(), data = ?data, "recv binary message"),
    }
}
