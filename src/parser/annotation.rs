//! Inline entity annotations.
//!
//! Example lines mark entities as `[surface text](entity-type)`. Nested or
//! overlapping markers are not supported: the pattern never spans a `[` or
//! `]` inside the surface text, so the innermost well-formed marker wins and
//! the surrounding characters are kept verbatim.

use std::sync::LazyLock;

use regex::Regex;

use super::types::EntitySpan;

static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]+)\]\(([^()\[\]]+)\)").expect("invalid annotation regex")
});

/// Result of tokenizing one annotated line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotated {
    /// Line with every marker replaced by its surface text
    pub text: String,
    /// One span per marker, left to right
    pub entities: Vec<EntitySpan>,
}

/// Strip annotation markers from `line` and collect the entity spans.
///
/// Characters outside well-formed markers are copied unchanged, so a line
/// without markers comes back as-is with no entities.
#[must_use]
pub fn tokenize(line: &str) -> Annotated {
    let mut text = String::with_capacity(line.len());
    let mut entities = Vec::new();
    let mut last = 0;

    for caps in ANNOTATION.captures_iter(line) {
        let (Some(whole), Some(surface), Some(entity)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        text.push_str(&line[last..whole.start()]);
        text.push_str(surface.as_str());
        entities.push(EntitySpan {
            entity: entity.as_str().to_string(),
            value: surface.as_str().to_string(),
        });
        last = whole.end();
    }
    text.push_str(&line[last..]);

    Annotated { text, entities }
}
