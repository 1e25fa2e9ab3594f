//! Error types for the demo client

use thiserror::Error;

/// Demo client errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("WebSocket connection error: {0}")]
    Connection(String),

    #[error("send on closed connection")]
    Closed,
}

impl From<tokio_tungstenite::tungstenite::Error> for ClientError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        ClientError::Connection(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Connection("handshake refused".to_string());
        assert_eq!(
            err.to_string(),
            "WebSocket connection error: handshake refused"
        );
        assert_eq!(ClientError::Closed.to_string(), "send on closed connection");
    }

    #[test]
    fn test_from_ws_error() {
        let ws_err = tokio_tungstenite::tungstenite::Error::ConnectionClosed;
        let err: ClientError = ws_err.into();
        assert!(matches!(err, ClientError::Connection(_)));
    }
}
