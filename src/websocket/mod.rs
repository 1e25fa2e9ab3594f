//! WebSocket module for the demo client connection

mod client;
mod sender;

pub use client::{Connection, ConnectionState, MessageHandler};
pub use sender::SendLoop;
