use linto_utility::parser::{CorpusParser, EntitySpan};
use linto_utility::MsError;

use super::fixture_path;

const APP_NAME: &str = "linto";

#[test]
fn contains_default_structure_after_parse() {
    let doc = CorpusParser::process(APP_NAME, fixture_path("parser.md")).unwrap();

    assert_eq!(doc.application_name, format!("app:{APP_NAME}"));
    assert_eq!(doc.sentences.len(), 14);
    let first = &doc.sentences[0];
    assert!(!first.intent.is_empty());
    assert!(!first.entities.is_empty());
    assert!(!first.language.is_empty());
    assert!(!first.text.is_empty());
    assert!(!first.origin.is_empty());
}

#[test]
fn first_sentence_matches_corpus() {
    let doc = CorpusParser::process(APP_NAME, fixture_path("parser.md")).unwrap();
    let first = &doc.sentences[0];

    assert_eq!(first.intent, "app:testNameIntent");
    assert_eq!(first.language, "en");
    assert_eq!(first.text, "here is my first input acronyme1");
    assert_eq!(first.origin, "here is my first input [acronyme1](acronyme)");
    assert_eq!(
        first.entities,
        vec![EntitySpan {
            entity: "acronyme".to_string(),
            value: "acronyme1".to_string(),
        }]
    );
}

#[test]
fn last_sentence_matches_corpus() {
    let doc = CorpusParser::process(APP_NAME, fixture_path("parser.md")).unwrap();
    let last = doc.sentences.last().unwrap();

    assert_eq!(last.intent, "app:testNameIntent");
    assert_eq!(last.language, "fr");
    assert_eq!(last.text, "suivit du dernier acronymeEntitie2");
    assert_eq!(last.origin, "suivit du dernier [acronymeEntitie2](acronyme)");
}

#[test]
fn sentences_follow_document_order_across_sections() {
    let doc = CorpusParser::process(APP_NAME, fixture_path("parser.md")).unwrap();
    let sections: Vec<(&str, &str)> = doc
        .sentences
        .iter()
        .map(|s| (s.intent.as_str(), s.language.as_str()))
        .collect();

    assert_eq!(sections[..4], [("app:testNameIntent", "en"); 4]);
    assert_eq!(sections[4..6], [("app:secondIntent", "en"); 2]);
    assert_eq!(sections[6..8], [("app:secondIntent", "fr"); 2]);
    assert_eq!(sections[8..], [("app:testNameIntent", "fr"); 6]);
}

#[test]
fn multiple_and_malformed_annotations() {
    let doc = CorpusParser::process(APP_NAME, fixture_path("parser.md")).unwrap();

    let two = &doc.sentences[3];
    assert_eq!(two.text, "define rtfm and asap");
    let values: Vec<_> = two.entities.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, ["rtfm", "asap"]);

    let malformed = doc
        .sentences
        .iter()
        .find(|s| s.origin.contains("mal formée"))
        .unwrap();
    assert_eq!(malformed.text, malformed.origin);
    assert!(malformed.entities.is_empty());
}

#[test]
fn ignored_section_is_not_attributed() {
    let doc = CorpusParser::process(APP_NAME, fixture_path("parser.md")).unwrap();
    assert!(doc.sentences.iter().all(|s| !s.text.contains("no valid intent")));
}

#[test]
fn throws_when_file_or_arguments_missing() {
    let fixture = fixture_path("parser.md");

    assert!(matches!(
        CorpusParser::process(APP_NAME, "fake/path"),
        Err(MsError::NotFound(_))
    ));
    assert!(matches!(
        CorpusParser::process(APP_NAME, ""),
        Err(MsError::InvalidArgument(_))
    ));
    assert!(matches!(
        CorpusParser::process("", &fixture),
        Err(MsError::InvalidArgument(_))
    ));
    assert!(matches!(
        CorpusParser::process("", "fake/path"),
        Err(MsError::InvalidArgument(_))
    ));
}

#[test]
fn every_parse_builds_a_fresh_document() {
    let a = CorpusParser::process(APP_NAME, fixture_path("parser.md")).unwrap();
    let b = CorpusParser::process("other", fixture_path("parser.md")).unwrap();
    assert_eq!(a.sentences, b.sentences);
    assert_eq!(b.application_name, "app:other");
}
