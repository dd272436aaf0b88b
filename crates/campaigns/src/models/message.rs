//! Direct message between two accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Unique identifier for a message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A directed message; immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl Message {
    /// Create an unread message
    pub fn new(
        id: MessageId,
        sender_id: UserId,
        receiver_id: UserId,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            content: content.into(),
            timestamp,
            read: false,
        }
    }

    /// Mark the message as already read
    pub fn read(mut self) -> Self {
        self.read = true;
        self
    }

    pub fn involves(&self, user: &UserId) -> bool {
        self.sender_id == *user || self.receiver_id == *user
    }

    /// The other participant from `viewer`'s point of view.
    ///
    /// Returns `None` when the viewer is neither sender nor receiver. A
    /// message the viewer sent to themselves has the viewer as counterpart.
    pub fn counterpart(&self, viewer: &UserId) -> Option<&UserId> {
        if self.sender_id == *viewer {
            Some(&self.receiver_id)
        } else if self.receiver_id == *viewer {
            Some(&self.sender_id)
        } else {
            None
        }
    }

    /// Unread, addressed to `viewer`, and not written by them
    pub fn is_unread_for(&self, viewer: &UserId) -> bool {
        !self.read && self.receiver_id == *viewer && self.sender_id != *viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(sender: &str, receiver: &str) -> Message {
        Message::new(
            MessageId::new("m1"),
            UserId::new(sender),
            UserId::new(receiver),
            "hello",
            Utc::now(),
        )
    }

    #[test]
    fn test_counterpart() {
        let m = msg("a", "b");
        assert_eq!(m.counterpart(&UserId::new("a")), Some(&UserId::new("b")));
        assert_eq!(m.counterpart(&UserId::new("b")), Some(&UserId::new("a")));
        assert_eq!(m.counterpart(&UserId::new("c")), None);
    }

    #[test]
    fn test_counterpart_of_self_message_is_viewer() {
        let m = msg("a", "a");
        assert_eq!(m.counterpart(&UserId::new("a")), Some(&UserId::new("a")));
    }

    #[test]
    fn test_unread_only_for_receiver() {
        let m = msg("a", "b");
        assert!(m.is_unread_for(&UserId::new("b")));
        assert!(!m.is_unread_for(&UserId::new("a")));
        assert!(!m.read().is_unread_for(&UserId::new("b")));
    }

    #[test]
    fn test_own_note_is_never_unread() {
        let note = msg("a", "a");
        assert!(!note.is_unread_for(&UserId::new("a")));
    }
}
