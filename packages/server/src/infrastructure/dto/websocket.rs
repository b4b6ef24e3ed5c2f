//! WebSocket event DTOs.
//!
//! Every frame is a JSON object tagged by `type`. Inbound events carry raw,
//! untrusted fields (`Option<String>`), coerced into domain values by the
//! handlers; outbound events are serialized from the domain model.

use serde::{Deserialize, Serialize};

/// Outbound event kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Message,
    Roster,
}

/// Client → server events.
///
/// Absent fields stay `None` so that `{"type":"message"}` coerces the same
/// way as `{"type":"message","text":null}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InboundEvent {
    Identify {
        #[serde(default)]
        name: Option<String>,
    },
    Message {
        #[serde(default)]
        text: Option<String>,
    },
}

/// Server → client chat message event, also used for connect-time replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEvent {
    pub r#type: EventType,
    pub name: Option<String>,
    pub text: String,
}

/// Server → client roster event: display names of every registered
/// connection, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEvent {
    pub r#type: EventType,
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_identify_parses_with_and_without_name() {
        // given / when:
        let named: InboundEvent =
            serde_json::from_str(r#"{"type":"identify","name":"Alice"}"#).unwrap();
        let bare: InboundEvent = serde_json::from_str(r#"{"type":"identify"}"#).unwrap();
        let null: InboundEvent =
            serde_json::from_str(r#"{"type":"identify","name":null}"#).unwrap();

        // then:
        assert_eq!(
            named,
            InboundEvent::Identify {
                name: Some("Alice".to_string())
            }
        );
        assert_eq!(bare, InboundEvent::Identify { name: None });
        assert_eq!(null, InboundEvent::Identify { name: None });
    }

    #[test]
    fn test_inbound_message_parses() {
        // given / when:
        let event: InboundEvent =
            serde_json::from_str(r#"{"type":"message","text":"hi"}"#).unwrap();

        // then:
        assert_eq!(
            event,
            InboundEvent::Message {
                text: Some("hi".to_string())
            }
        );
    }

    #[test]
    fn test_inbound_unknown_type_is_rejected() {
        // given / when:
        let result = serde_json::from_str::<InboundEvent>(r#"{"type":"emote","text":"hi"}"#);

        // then:
        assert!(result.is_err());
    }

    #[test]
    fn test_message_event_serializes_unset_name_as_null() {
        // given:
        let event = MessageEvent {
            r#type: EventType::Message,
            name: None,
            text: "hi".to_string(),
        };

        // when:
        let json = serde_json::to_string(&event).unwrap();

        // then:
        assert_eq!(json, r#"{"type":"message","name":null,"text":"hi"}"#);
    }

    #[test]
    fn test_roster_event_serializes_names_in_order() {
        // given:
        let event = RosterEvent {
            r#type: EventType::Roster,
            names: vec!["Alice".to_string(), "Bob".to_string()],
        };

        // when:
        let json = serde_json::to_string(&event).unwrap();

        // then:
        assert_eq!(json, r#"{"type":"roster","names":["Alice","Bob"]}"#);
    }
}
