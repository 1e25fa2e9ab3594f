//! Periodic outbound send loop
//!
//! Driven by a timer outside the receive path; writes go through the
//! connection handle's send capability.

use std::time::Duration;

use tokio::time::{interval_at, Instant};
use tracing::{info, warn};

use super::Connection;
use crate::config::Config;

/// Fixed-interval sender for the outbound greeting
pub struct SendLoop {
    conn: Connection,
    period: Duration,
    payload: String,
}

impl SendLoop {
    /// Create a send loop over an established connection
    pub fn new(conn: Connection, config: &Config) -> Self {
        Self {
            conn,
            period: Duration::from_millis(config.send_interval_ms),
            payload: config.send_payload.clone(),
        }
    }

    /// Run until process exit, one send per elapsed interval.
    ///
    /// The first send lands one full period after startup. A rejected
    /// write is logged and the loop keeps ticking.
    pub async fn run(self) {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);

        loop {
            ticker.tick().await;
            info!(payload = %self.payload, "sending");
            if let Err(e) = self.conn.send_text(self.payload.clone()) {
                warn!(error = %e, "send failed");
            }
        }
    }
}
