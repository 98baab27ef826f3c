use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Prefix applied to application and intent names in the training data.
pub const APP_PREFIX: &str = "app:";

/// A labeled substring of an example sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Entity type name, e.g. `acronyme`
    pub entity: String,
    /// Surface text as it appears in the sentence
    pub value: String,
}

/// One example sentence of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Fully qualified intent, `app:<intent>`
    pub intent: String,
    /// Locale code of the section the sentence was found in
    pub language: String,
    /// Sentence with annotation markers stripped
    pub text: String,
    /// Sentence as written, annotation markers included
    pub origin: String,
    /// Entity spans in left-to-right order
    pub entities: Vec<EntitySpan>,
}

/// Normalized training data for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    /// `app:<application name>`
    pub application_name: String,
    /// Sentences in document order
    pub sentences: Vec<Sentence>,
}

impl ParsedDocument {
    /// Distinct intents, sorted.
    #[must_use]
    pub fn intents(&self) -> BTreeSet<&str> {
        self.sentences.iter().map(|s| s.intent.as_str()).collect()
    }

    /// Distinct languages, sorted.
    #[must_use]
    pub fn languages(&self) -> BTreeSet<&str> {
        self.sentences.iter().map(|s| s.language.as_str()).collect()
    }

    /// Total number of entity spans across all sentences.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.sentences.iter().map(|s| s.entities.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(intent: &str, language: &str, entities: usize) -> Sentence {
        Sentence {
            intent: intent.to_string(),
            language: language.to_string(),
            text: "t".to_string(),
            origin: "t".to_string(),
            entities: (0..entities)
                .map(|i| EntitySpan {
                    entity: "e".to_string(),
                    value: i.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn document_serializes_camel_case() {
        let doc = ParsedDocument {
            application_name: "app:linto".to_string(),
            sentences: vec![sentence("app:a", "en", 1)],
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["applicationName"], "app:linto");
        assert_eq!(json["sentences"][0]["intent"], "app:a");
        assert_eq!(json["sentences"][0]["entities"][0]["entity"], "e");
        assert_eq!(json["sentences"][0]["entities"][0]["value"], "0");
    }

    #[test]
    fn summaries_are_distinct_and_sorted() {
        let doc = ParsedDocument {
            application_name: "app:linto".to_string(),
            sentences: vec![
                sentence("app:b", "fr", 2),
                sentence("app:a", "en", 0),
                sentence("app:b", "en", 1),
            ],
        };
        assert_eq!(doc.intents().into_iter().collect::<Vec<_>>(), ["app:a", "app:b"]);
        assert_eq!(doc.languages().into_iter().collect::<Vec<_>>(), ["en", "fr"]);
        assert_eq!(doc.entity_count(), 3);
    }
}
