//! Domain entities: connections, chat messages, the room aggregate, and
//! playlist records.

use serde::{Deserialize, Serialize};

use super::value_object::{DisplayName, Esn, MessageText, SessionId, Timestamp};

/// One live client session.
///
/// Created on connect, removed from the registry on disconnect. The display
/// name starts unset and is only mutated by the `identify` event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub id: SessionId,
    pub name: Option<DisplayName>,
    pub connected_at: Timestamp,
}

impl Connection {
    pub fn new(id: SessionId, connected_at: Timestamp) -> Self {
        Self {
            id,
            name: None,
            connected_at,
        }
    }
}

/// One chat line: the sender's display name at time of send (or unset) and
/// the non-empty text payload. Never mutated or deleted once appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub name: Option<DisplayName>,
    pub text: MessageText,
    pub sent_at: Timestamp,
}

impl ChatMessage {
    pub fn new(name: Option<DisplayName>, text: MessageText, sent_at: Timestamp) -> Self {
        Self {
            name,
            text,
            sent_at,
        }
    }
}

/// The room aggregate: connection registry plus append-only message log.
///
/// Both live in one aggregate so that registry iteration (roster snapshots,
/// broadcast target lists) and mutation never interleave inconsistently —
/// the repository guards the whole aggregate with a single lock.
///
/// The message log grows unboundedly for the life of the process: no cap,
/// no eviction.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub connections: Vec<Connection>,
    pub messages: Vec<ChatMessage>,
    pub created_at: Timestamp,
}

impl Room {
    pub fn new(created_at: Timestamp) -> Self {
        Self {
            connections: Vec::new(),
            messages: Vec::new(),
            created_at,
        }
    }

    /// Add a connection with no name set. No error conditions.
    pub fn register(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Remove a connection by identity. Returns `false` when the connection
    /// was not present (idempotent no-op).
    pub fn unregister(&mut self, id: &SessionId) -> bool {
        let before = self.connections.len();
        self.connections.retain(|c| &c.id != id);
        self.connections.len() < before
    }

    /// Set or overwrite a connection's display name. No validation against
    /// duplicates. Unknown ids are ignored.
    pub fn set_name(&mut self, id: &SessionId, name: DisplayName) {
        if let Some(connection) = self.connections.iter_mut().find(|c| &c.id == id) {
            connection.name = Some(name);
        }
    }

    /// The current display name of a connection, if it has identified.
    pub fn name_of(&self, id: &SessionId) -> Option<DisplayName> {
        self.connections
            .iter()
            .find(|c| &c.id == id)
            .and_then(|c| c.name.clone())
    }

    /// Ordered names of all registered connections, in registration order.
    /// Renames do not reorder; unset names render as `"Anonymous"`.
    pub fn names_snapshot(&self) -> Vec<DisplayName> {
        self.connections
            .iter()
            .map(|c| c.name.clone().unwrap_or_else(DisplayName::anonymous))
            .collect()
    }

    /// Registered session ids in registration order (broadcast target list).
    pub fn session_ids(&self) -> Vec<SessionId> {
        self.connections.iter().map(|c| c.id.clone()).collect()
    }

    /// Append a message to the end of the log. Always succeeds.
    pub fn append_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// One playlist record: arbitrary feed JSON keyed by a unique `esn`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub esn: Esn,
    pub feed: serde_json::Value,
}

impl Playlist {
    pub fn new(esn: Esn, feed: serde_json::Value) -> Self {
        Self { esn, feed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(Timestamp::new(0))
    }

    fn connect(room: &mut Room) -> SessionId {
        let id = SessionId::generate();
        room.register(Connection::new(id.clone(), Timestamp::new(1000)));
        id
    }

    #[test]
    fn test_register_starts_with_no_name() {
        // given:
        let mut room = room();

        // when:
        let id = connect(&mut room);

        // then:
        assert_eq!(room.connections.len(), 1);
        assert_eq!(room.name_of(&id), None);
    }

    #[test]
    fn test_names_snapshot_keeps_registration_order_across_renames() {
        // given: three connections registered in order
        let mut room = room();
        let a = connect(&mut room);
        let b = connect(&mut room);
        let c = connect(&mut room);

        // when: renamed in reverse order
        room.set_name(&c, DisplayName::coerce(Some("Carol".to_string())));
        room.set_name(&a, DisplayName::coerce(Some("Alice".to_string())));
        room.set_name(&b, DisplayName::coerce(Some("Bob".to_string())));

        // then: snapshot order is registration order, not rename order
        let snapshot = room.names_snapshot();
        let names: Vec<&str> = snapshot.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_names_snapshot_renders_unset_names_as_anonymous() {
        // given:
        let mut room = room();
        let a = connect(&mut room);
        let _b = connect(&mut room);
        room.set_name(&a, DisplayName::coerce(Some("Alice".to_string())));

        // when:
        let snapshot = room.names_snapshot();
        let names: Vec<&str> = snapshot.iter().map(|n| n.as_str()).collect();

        // then:
        assert_eq!(names, vec!["Alice", "Anonymous"]);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        // given:
        let mut room = room();
        let id = connect(&mut room);

        // when / then: first removal reports true, second is a no-op
        assert!(room.unregister(&id));
        assert!(!room.unregister(&id));
        assert_eq!(room.connections.len(), 0);
    }

    #[test]
    fn test_set_name_overwrites_previous_name() {
        // given:
        let mut room = room();
        let id = connect(&mut room);
        room.set_name(&id, DisplayName::coerce(Some("Alice".to_string())));

        // when:
        room.set_name(&id, DisplayName::coerce(Some("Alicia".to_string())));

        // then:
        assert_eq!(room.name_of(&id).unwrap().as_str(), "Alicia");
    }

    #[test]
    fn test_message_log_preserves_append_order() {
        // given:
        let mut room = room();

        // when: identical text appended twice is kept independently (no dedup)
        for text in ["one", "two", "two"] {
            let message = ChatMessage::new(
                None,
                MessageText::coerce(Some(text.to_string())).unwrap(),
                Timestamp::new(0),
            );
            room.append_message(message);
        }

        // then:
        let texts: Vec<&str> = room.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "two"]);
    }
}
