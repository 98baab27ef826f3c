//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
///
/// Falls back to [`ErrorCode::suggestion`] when the context carries nothing
/// more specific.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::CorpusNotFound => suggest_corpus_not_found(context),
        ErrorCode::LocaleNotFound => suggest_locale_not_found(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_corpus_not_found(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("path")).and_then(Value::as_str) {
        Some(path) => format!(
            "Corpus '{path}' was not found. Check the path is relative to the working directory and points to a file"
        ),
        None => ErrorCode::CorpusNotFound.suggestion().to_string(),
    }
}

fn suggest_locale_not_found(context: Option<&Value>) -> String {
    let language = context
        .and_then(|c| c.get("language"))
        .and_then(Value::as_str);
    let node = context.and_then(|c| c.get("node")).and_then(Value::as_str);
    match (language, node) {
        (Some(language), Some(node)) => format!(
            "No locale registered for node '{node}' in language '{language}'. Register it with `LocaleRegistry::register_json`"
        ),
        _ => ErrorCode::LocaleNotFound.suggestion().to_string(),
    }
}
