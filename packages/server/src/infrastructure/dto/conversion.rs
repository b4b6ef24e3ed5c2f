//! Conversion logic between DTOs and domain entities.

use crate::domain::{entity, value_object::DisplayName};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<entity::ChatMessage> for dto::MessageEvent {
    fn from(model: entity::ChatMessage) -> Self {
        Self {
            r#type: dto::EventType::Message,
            name: model.name.map(DisplayName::into_string),
            text: model.text.into_string(),
        }
    }
}

impl From<Vec<DisplayName>> for dto::RosterEvent {
    fn from(names: Vec<DisplayName>) -> Self {
        Self {
            r#type: dto::EventType::Roster,
            names: names.into_iter().map(DisplayName::into_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageText, Timestamp};

    #[test]
    fn test_named_chat_message_to_event() {
        // given:
        let message = entity::ChatMessage::new(
            Some(DisplayName::coerce(Some("Alice".to_string()))),
            MessageText::coerce(Some("hi".to_string())).unwrap(),
            Timestamp::new(1000),
        );

        // when:
        let event: dto::MessageEvent = message.into();

        // then: the wire event carries only name and text
        assert_eq!(event.name.as_deref(), Some("Alice"));
        assert_eq!(event.text, "hi");
        assert_eq!(event.r#type, dto::EventType::Message);
    }

    #[test]
    fn test_unnamed_chat_message_to_event() {
        // given: sender never identified
        let message = entity::ChatMessage::new(
            None,
            MessageText::coerce(Some("hi".to_string())).unwrap(),
            Timestamp::new(1000),
        );

        // when:
        let event: dto::MessageEvent = message.into();

        // then:
        assert_eq!(event.name, None);
    }

    #[test]
    fn test_roster_names_to_event() {
        // given:
        let names = vec![
            DisplayName::coerce(Some("Alice".to_string())),
            DisplayName::anonymous(),
        ];

        // when:
        let event: dto::RosterEvent = names.into();

        // then:
        assert_eq!(event.names, vec!["Alice".to_string(), "Anonymous".to_string()]);
        assert_eq!(event.r#type, dto::EventType::Roster);
    }
}
