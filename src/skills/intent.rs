//! Skill selection from an NLU payload.
//!
//! A skill runs either because the NLU detected its intent on a fresh turn
//! (`conversationData` present and empty), or because a conversational skill
//! left its intent in `conversationData` on the previous turn.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message payload received from the dialogue flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default)]
    pub nlu: NluResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_data: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NluResult {
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub entities: Vec<NluEntity>,
    #[serde(default)]
    pub entities_number: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NluEntity {
    pub entity: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentMatch {
    pub is_intent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_conversational: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
}

impl IntentMatch {
    fn conversational(skill: Option<String>) -> Self {
        Self {
            is_intent: true,
            is_conversational: Some(true),
            skill,
        }
    }

    fn fresh(skill: Option<String>) -> Self {
        Self {
            is_intent: true,
            is_conversational: Some(false),
            skill,
        }
    }
}

impl Payload {
    /// Intent stored by a conversational skill, when `conversationData` is non-empty.
    fn pending_intent(&self) -> Option<&str> {
        self.conversation_data
            .as_ref()
            .filter(|data| !data.is_empty())
            .and_then(|data| data.get("intent"))
            .and_then(Value::as_str)
    }

    /// A fresh turn carries an explicitly empty `conversationData`.
    fn is_fresh_turn(&self) -> bool {
        self.conversation_data
            .as_ref()
            .is_some_and(|data| data.is_empty())
    }
}

/// Check whether the skill handling `intent` should run.
#[must_use]
pub fn intent_detection(payload: &Payload, intent: &str, is_conversational_skill: bool) -> IntentMatch {
    if is_conversational_skill && payload.pending_intent() == Some(intent) {
        return IntentMatch::conversational(None);
    }
    if payload.is_fresh_turn() && payload.nlu.intent == intent {
        return IntentMatch::fresh(None);
    }
    IntentMatch::default()
}

/// Like [`intent_detection`] for a skill handling several intents. The
/// matched intent is returned in `skill`.
#[must_use]
pub fn multiple_intent_detection<S: AsRef<str>>(
    payload: &Payload,
    intents: &[S],
    is_conversational_skill: bool,
) -> IntentMatch {
    let handles = |candidate: &str| intents.iter().any(|i| i.as_ref() == candidate);

    if is_conversational_skill {
        if let Some(pending) = payload.pending_intent().filter(|&p| handles(p)) {
            return IntentMatch::conversational(Some(pending.to_string()));
        }
    }
    if payload.is_fresh_turn() && handles(&payload.nlu.intent) {
        return IntentMatch::fresh(Some(payload.nlu.intent.clone()));
    }
    IntentMatch::default()
}

/// First entity whose type contains `prefix`.
#[must_use]
pub fn extract_entity_from_prefix<'a>(payload: &'a Payload, prefix: &str) -> Option<&'a NluEntity> {
    payload.nlu.entities.iter().find(|e| e.entity.contains(prefix))
}

/// First entity whose type is exactly `entity_name`.
#[must_use]
pub fn extract_entity_from_type<'a>(payload: &'a Payload, entity_name: &str) -> Option<&'a NluEntity> {
    payload.nlu.entities.iter().find(|e| e.entity == entity_name)
}

/// True when the payload carries exactly `required.len()` entities and every
/// entity type is listed in `required`.
#[must_use]
pub fn check_entities_require(payload: &Payload, required: &[&str]) -> bool {
    payload.nlu.entities_number == required.len()
        && payload
            .nlu
            .entities
            .iter()
            .all(|e| required.contains(&e.entity.as_str()))
}
