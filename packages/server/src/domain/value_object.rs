//! Value objects for the chat and playlist domains.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque session identifier, unique for the lifetime of one connection.
///
/// Generated server-side at connect time. A reconnecting client receives a
/// brand-new `SessionId`; there is no session resumption.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh session identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of a chat client.
///
/// Never validated for uniqueness or content. Empty or absent input coerces
/// to the literal `"Anonymous"` (the registry default rule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    pub const ANONYMOUS: &'static str = "Anonymous";

    /// Coerce raw client input into a display name.
    ///
    /// `None` and `""` both become `"Anonymous"`; anything else is kept
    /// verbatim.
    pub fn coerce(raw: Option<String>) -> Self {
        match raw {
            Some(name) if !name.is_empty() => Self(name),
            _ => Self::anonymous(),
        }
    }

    /// The default name for connections that never identified
    pub fn anonymous() -> Self {
        Self(Self::ANONYMOUS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Non-empty chat message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageText(String);

impl MessageText {
    /// Build message text from raw client input.
    ///
    /// Absent, empty, and whitespace-only input yields `None`: such messages
    /// are silently dropped (not appended to the log, not broadcast). The
    /// original text is kept verbatim otherwise, including surrounding
    /// whitespace.
    pub fn coerce(raw: Option<String>) -> Option<Self> {
        match raw {
            Some(text) if !text.trim().is_empty() => Some(Self(text)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Opaque device identifier, the primary key of playlist records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Esn(String);

impl Esn {
    pub fn new(esn: String) -> Self {
        Self(esn)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Esn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in milliseconds (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique() {
        // given / when:
        let a = SessionId::generate();
        let b = SessionId::generate();

        // then:
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_name_coerce_keeps_non_empty_input() {
        // given:
        let raw = Some("Alice".to_string());

        // when:
        let name = DisplayName::coerce(raw);

        // then:
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_display_name_coerce_defaults_empty_to_anonymous() {
        // given / when:
        let from_empty = DisplayName::coerce(Some(String::new()));
        let from_absent = DisplayName::coerce(None);

        // then:
        assert_eq!(from_empty.as_str(), "Anonymous");
        assert_eq!(from_absent.as_str(), "Anonymous");
    }

    #[test]
    fn test_display_name_coerce_keeps_whitespace_name() {
        // given: whitespace is truthy input for names, unlike message text
        let raw = Some(" ".to_string());

        // when:
        let name = DisplayName::coerce(raw);

        // then:
        assert_eq!(name.as_str(), " ");
    }

    #[test]
    fn test_message_text_coerce_accepts_non_empty_text() {
        // given:
        let raw = Some("hello".to_string());

        // when:
        let text = MessageText::coerce(raw);

        // then:
        assert_eq!(text.unwrap().as_str(), "hello");
    }

    #[test]
    fn test_message_text_coerce_drops_empty_and_whitespace() {
        // given / when / then:
        assert_eq!(MessageText::coerce(None), None);
        assert_eq!(MessageText::coerce(Some(String::new())), None);
        assert_eq!(MessageText::coerce(Some("   \t\n".to_string())), None);
    }

    #[test]
    fn test_message_text_coerce_preserves_surrounding_whitespace() {
        // given:
        let raw = Some("  hi  ".to_string());

        // when:
        let text = MessageText::coerce(raw).unwrap();

        // then: the stored text is verbatim, trimming is only a drop check
        assert_eq!(text.as_str(), "  hi  ");
    }
}
