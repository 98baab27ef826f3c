//! Corpus document parser.
//!
//! ```text
//! ## intent|testNameIntent
//! ### language|en
//! - here is my first input [acronyme1](acronyme)
//! ### language|fr
//! - voici ma première entrée
//! ```
//!
//! Intent headers are level-2 headings, language headers level-3 headings,
//! examples are list items. `:` is accepted in place of `|`. Everything else
//! is ignored.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{MsError, Result};

use super::annotation::tokenize;
use super::types::{ParsedDocument, Sentence, APP_PREFIX};

const INTENT_KEYWORD: &str = "intent";
const LANGUAGE_KEYWORD: &str = "language";

pub struct CorpusParser;

impl CorpusParser {
    /// Parse the corpus at `file_path` for `application_name`.
    ///
    /// Arguments are validated before the file is touched: a blank name or
    /// path fails with [`MsError::InvalidArgument`], a path that is not an
    /// existing file fails with [`MsError::NotFound`].
    pub fn process(application_name: &str, file_path: impl AsRef<Path>) -> Result<ParsedDocument> {
        let path = file_path.as_ref();
        require_application_name(application_name)?;
        if path.as_os_str().is_empty() {
            return Err(MsError::InvalidArgument(
                "corpus file path is required".to_string(),
            ));
        }
        if !path.is_file() {
            return Err(MsError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let doc = Self::parse_str(application_name, &content)?;
        debug!(
            path = %path.display(),
            sentences = doc.sentences.len(),
            "parsed corpus"
        );
        Ok(doc)
    }

    /// Parse corpus `content` already held in memory.
    pub fn parse_str(application_name: &str, content: &str) -> Result<ParsedDocument> {
        require_application_name(application_name)?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut intent: Option<&str> = None;
        let mut language: Option<&str> = None;
        let mut sentences = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            match classify(raw.trim()) {
                Line::Intent(Some(name)) => {
                    intent = Some(name);
                    language = None;
                }
                Line::Intent(None) => {
                    warn!(line = line_no, header = raw.trim(), "malformed intent header, skipping section");
                    intent = None;
                    language = None;
                }
                Line::Language(Some(code)) => language = Some(code),
                Line::Language(None) => {
                    warn!(line = line_no, header = raw.trim(), "malformed language header, skipping section");
                    language = None;
                }
                Line::Example(origin) => {
                    let (Some(intent), Some(language)) = (intent, language) else {
                        debug!(line = line_no, "example outside an intent/language section, ignored");
                        continue;
                    };
                    let annotated = tokenize(origin);
                    sentences.push(Sentence {
                        intent: format!("{APP_PREFIX}{intent}"),
                        language: language.to_string(),
                        text: annotated.text,
                        origin: origin.to_string(),
                        entities: annotated.entities,
                    });
                }
                Line::Other => {}
            }
        }

        Ok(ParsedDocument {
            application_name: format!("{APP_PREFIX}{application_name}"),
            sentences,
        })
    }
}

fn require_application_name(application_name: &str) -> Result<()> {
    if application_name.trim().is_empty() {
        return Err(MsError::InvalidArgument(
            "application name is required".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// `## intent|name`; `None` when the header is malformed
    Intent(Option<&'a str>),
    /// `### language|code`; `None` when the header is malformed
    Language(Option<&'a str>),
    Example(&'a str),
    Other,
}

fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix("###") {
        return Line::Language(header_value(rest, LANGUAGE_KEYWORD));
    }
    if let Some(rest) = line.strip_prefix("##") {
        return Line::Intent(header_value(rest, INTENT_KEYWORD));
    }
    if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        let item = item.trim();
        if !item.is_empty() {
            return Line::Example(item);
        }
    }
    Line::Other
}

fn header_value<'a>(rest: &'a str, keyword: &str) -> Option<&'a str> {
    let value = rest
        .trim()
        .strip_prefix(keyword)?
        .strip_prefix(['|', ':'])?
        .trim();
    (!value.is_empty()).then_some(value)
}
