//! WebSocket demo client library
//!
//! This crate provides a minimal demonstration client: one persistent
//! WebSocket connection to a message-oriented server, inbound payloads
//! classified binary/text and handed to a callback, and a fixed-interval
//! outbound greeting.

pub mod config;
pub mod error;
pub mod payload;
pub mod websocket;

pub use config::Config;
pub use error::{ClientError, Result};
pub use payload::Payload;
pub use websocket::{Connection, ConnectionState, MessageHandler, SendLoop};
