//! WebSocket connection for the demo client
//!
//! Handles connection establishment, inbound dispatch, and the outbound
//! path. The event loop is the only reader and writer of the socket;
//! outbound messages travel through a channel so the send path never
//! touches the receive path.

use std::sync::Arc;
use std::time::Instant;

use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::protocol::Message,
    MaybeTlsStream, WebSocketStream,
};
use tracing::{debug, error, info, warn};

use crate::error::{ClientError, Result};
use crate::payload::Payload;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Inbound message callback, invoked once per classified payload
pub type MessageHandler = Box<dyn FnMut(Payload) + Send>;

/// Lifecycle of a connection handle.
///
/// `Connecting -> Open -> Closed`, with `Connecting -> Failed` as the
/// alternate terminal state of a handshake that never opened. There is no
/// transition out of `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
    Failed,
}

/// Handle to one active WebSocket connection.
///
/// Created by [`Connection::establish`]; the message callback is installed
/// before the handle exists, so no payload can be dispatched ahead of
/// registration.
pub struct Connection {
    outbound_tx: mpsc::UnboundedSender<Message>,
    state: Arc<Mutex<ConnectionState>>,
}

impl Connection {
    /// Connect to the endpoint and suspend until the handshake resolves.
    ///
    /// On open, spawns the event loop with `on_message` already wired in
    /// and returns the ready handle. On a handshake failure the state is
    /// terminal and the error carries the underlying transport error.
    pub async fn establish(url: &str, on_message: MessageHandler) -> Result<Self> {
        let state = Arc::new(Mutex::new(ConnectionState::Connecting));

        info!(url = %url, "connecting");
        let started = Instant::now();

        let (ws_stream, response) = match connect_async(url).await {
            Ok(pair) => pair,
            Err(e) => {
                *state.lock() = ConnectionState::Failed;
                return Err(ClientError::Connection(format!(
                    "failed to connect to {}: {}",
                    url, e
                )));
            }
        };

        *state.lock() = ConnectionState::Open;
        info!(
            status = ?response.status(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "websocket open"
        );

        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();

        tokio::spawn(Self::run_event_loop(
            ws_stream,
            outbound_rx,
            on_message,
            Arc::clone(&state),
        ));

        Ok(Self { outbound_tx, state })
    }

    /// Queue a text message for the event loop to write.
    ///
    /// Rejected once the connection has left the open state.
    pub fn send_text(&self, text: impl Into<String>) -> Result<()> {
        if !self.is_open() {
            return Err(ClientError::Closed);
        }
        self.outbound_tx
            .send(Message::Text(text.into()))
            .map_err(|_| ClientError::Closed)
    }

    /// Current lifecycle state
    pub fn state(&self) -> ConnectionState {
        *self.state.lock()
    }

    /// Check if the connection is open
    pub fn is_open(&self) -> bool {
        self.state() == ConnectionState::Open
    }

    /// Event loop that owns both halves of the socket.
    ///
    /// Serializes all transport events; terminates on close, error, or
    /// stream end and marks the state `Closed`.
    async fn run_event_loop(
        ws_stream: WsStream,
        mut outbound_rx: mpsc::UnboundedReceiver<Message>,
        mut on_message: MessageHandler,
        state: Arc<Mutex<ConnectionState>>,
    ) {
        let (mut ws_write, mut ws_read) = ws_stream.split();

        loop {
            tokio::select! {
                message = ws_read.next() => {
                    match message {
                        Some(Ok(Message::Ping(data))) => {
                            debug!("received ping, sending pong");
                            if let Err(e) = ws_write.send(Message::Pong(data)).await {
                                warn!(error = %e, "failed to send pong");
                            }
                        }
                        Some(Ok(Message::Close(frame))) => {
                            info!(frame = ?frame, "websocket closed");
                            break;
                        }
                        Some(Ok(message)) => {
                            if let Some(payload) = Payload::classify(message) {
                                on_message(payload);
                            }
                        }
                        Some(Err(e)) => {
                            error!(error = %e, "websocket error");
                            break;
                        }
                        None => {
                            info!("websocket closed");
                            break;
                        }
                    }
                }

                outbound = outbound_rx.recv() => {
                    match outbound {
                        Some(message) => {
                            if let Err(e) = ws_write.send(message).await {
                                warn!(error = %e, "failed to send message");
                            }
                        }
                        None => {
                            debug!("connection handle dropped");
                            break;
                        }
                    }
                }
            }
        }

        *state.lock() = ConnectionState::Closed;
        debug!("event loop terminated");
    }
}
