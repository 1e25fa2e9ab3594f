//! Inbound payload classification
//!
//! The transport already distinguishes binary frames from text frames; this
//! module turns that distinction into an explicit sum type so downstream
//! code never has to re-inspect the bytes.

use tokio_tungstenite::tungstenite::protocol::Message;

/// An inbound message, tagged by its wire representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Delivered as a byte sequence
    Binary(Vec<u8>),
    /// Delivered as a character sequence
    Text(String),
}

impl Payload {
    /// Classify a raw WebSocket message.
    ///
    /// Data frames map totally onto the two variants; control frames
    /// (ping, pong, close) carry no payload and yield `None`. Content is
    /// passed through unchanged.
    pub fn classify(message: Message) -> Option<Self> {
        match message {
            Message::Text(text) => Some(Payload::Text(text)),
            Message::Binary(data) => Some(Payload::Binary(data)),
            _ => None,
        }
    }

    /// Whether this payload arrived as a binary frame
    pub fn is_binary(&self) -> bool {
        matches!(self, Payload::Binary(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_frame_classifies_as_text() {
        let msg = Message::Text("hello!".to_string());
        assert_eq!(
            Payload::classify(msg),
            Some(Payload::Text("hello!".to_string()))
        );
    }

    #[test]
    fn test_binary_frame_classifies_as_binary() {
        let msg = Message::Binary(vec![0x01, 0x02, 0x03]);
        let payload = Payload::classify(msg).unwrap();
        assert!(payload.is_binary());
        assert_eq!(payload, Payload::Binary(vec![0x01, 0x02, 0x03]));
    }

    #[test]
    fn test_binary_never_misclassified_as_text() {
        // Valid UTF-8 bytes still classify by frame kind, not content
        let msg = Message::Binary(b"hello!".to_vec());
        assert_eq!(Payload::classify(msg), Some(Payload::Binary(b"hello!".to_vec())));
    }

    #[test]
    fn test_control_frames_yield_no_payload() {
        assert_eq!(Payload::classify(Message::Ping(vec![])), None);
        assert_eq!(Payload::classify(Message::Pong(vec![])), None);
        assert_eq!(Payload::classify(Message::Close(None)), None);
    }
}
