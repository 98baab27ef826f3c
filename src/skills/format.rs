use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message the assistant speaks without expecting an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SayMessage {
    pub behavior: String,
}

/// Message the assistant speaks while keeping the conversation open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskMessage {
    pub ask: String,
    pub conversation_data: Value,
}

#[must_use]
pub fn format_to_say(to_say: impl Into<String>) -> SayMessage {
    SayMessage {
        behavior: to_say.into(),
    }
}

/// `data` comes back as `conversationData` on the next turn.
#[must_use]
pub fn format_to_ask(to_ask: impl Into<String>, data: Value) -> AskMessage {
    AskMessage {
        ask: to_ask.into(),
        conversation_data: data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn say_wire_shape() {
        let msg = format_to_say("it is noon");
        assert_eq!(serde_json::to_value(&msg).unwrap(), json!({ "behavior": "it is noon" }));
    }

    #[test]
    fn ask_wire_shape() {
        let msg = format_to_ask("which city ?", json!({ "intent": "weather" }));
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({ "ask": "which city ?", "conversationData": { "intent": "weather" } })
        );
    }
}
