use proptest::prelude::*;

use linto_utility::parser::{tokenize, CorpusParser};

fn arb_plain() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.?!éà'-]{0,24}"
}

fn arb_surface() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9éà][a-zA-Z0-9 éà'-]{0,12}"
}

fn arb_entity() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,10}"
}

/// Plain segments interleaved with annotations, plus the expected output.
fn arb_line() -> impl Strategy<Value = (String, String, Vec<(String, String)>)> {
    (
        arb_plain(),
        prop::collection::vec((arb_surface(), arb_entity(), arb_plain()), 0..5),
    )
        .prop_map(|(head, parts)| {
            let mut origin = head.clone();
            let mut text = head;
            let mut entities = Vec::new();
            for (surface, entity, tail) in parts {
                origin.push_str(&format!("[{surface}]({entity}){tail}"));
                text.push_str(&surface);
                text.push_str(&tail);
                entities.push((entity, surface));
            }
            (origin, text, entities)
        })
}

proptest! {
    #[test]
    fn tokenize_strips_markers_and_keeps_order((origin, text, entities) in arb_line()) {
        let out = tokenize(&origin);
        prop_assert_eq!(out.text, text);
        let got: Vec<(String, String)> = out
            .entities
            .into_iter()
            .map(|e| (e.entity, e.value))
            .collect();
        prop_assert_eq!(got, entities);
    }

    #[test]
    fn tokenize_without_brackets_is_identity(line in "[^\\[\\]]{0,64}") {
        let out = tokenize(&line);
        prop_assert_eq!(out.text, line);
        prop_assert!(out.entities.is_empty());
    }

    #[test]
    fn one_sentence_per_example_line(
        app in "[a-z]{1,10}",
        lines in prop::collection::vec(arb_line(), 1..12),
    ) {
        let mut corpus = String::from("## intent|prop\n### language|en\n");
        for (origin, _, _) in &lines {
            corpus.push_str("- x ");
            corpus.push_str(origin);
            corpus.push('\n');
        }
        let doc = CorpusParser::parse_str(&app, &corpus).unwrap();
        prop_assert_eq!(doc.application_name, format!("app:{app}"));
        prop_assert_eq!(doc.sentences.len(), lines.len());
        for (sentence, (_, text, entities)) in doc.sentences.iter().zip(&lines) {
            let expected = format!("x {text}");
            prop_assert_eq!(sentence.text.trim_end(), expected.trim_end());
            prop_assert_eq!(sentence.entities.len(), entities.len());
        }
    }
}
