//! Training data upload to the NLU and LM admin services.
//!
//! Both targets receive the same payload: the corpus is parsed into a
//! [`ParsedDocument`], written to a temporary JSON file, and POSTed as the
//! multipart field `data`. The temporary file lives exactly as long as the
//! upload call.
//!
//! A target whose configuration lacks the required fields is disabled:
//! the call returns `Ok(false)` and nothing is parsed or sent.

mod http;

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{LmConfig, NluConfig};
use crate::error::Result;
use crate::parser::{CorpusParser, ParsedDocument};

pub use http::HttpUploader;

/// Multipart field carrying the serialized document.
pub const UPLOAD_FIELD: &str = "data";

/// One file upload.
#[derive(Debug, Clone)]
pub struct UploadRequest<'a> {
    pub url: &'a str,
    pub authorization: Option<&'a str>,
    pub field: &'static str,
    pub file_name: &'a str,
    pub file: &'a Path,
}

/// Transport seam for the upload step.
pub trait Uploader {
    /// Send `request.file` to `request.url`. Any failure is fatal.
    fn upload(&self, request: &UploadRequest<'_>) -> Result<()>;
}

/// Upload the corpus at `data_path` to the NLU admin service.
///
/// Returns `Ok(false)` without any network call when `url` or
/// `auth_token` is missing.
pub fn inject_nlu(
    config: &NluConfig,
    application_name: &str,
    data_path: impl AsRef<Path>,
) -> Result<bool> {
    if nlu_target(config).is_none() {
        debug!("nlu upload disabled: url or auth_token not configured");
        return Ok(false);
    }
    let uploader = HttpUploader::new(config.timeout_secs)?;
    inject_nlu_with(&uploader, config, application_name, data_path)
}

/// [`inject_nlu`] with an explicit transport.
pub fn inject_nlu_with<U: Uploader + ?Sized>(
    uploader: &U,
    config: &NluConfig,
    application_name: &str,
    data_path: impl AsRef<Path>,
) -> Result<bool> {
    let Some((url, token)) = nlu_target(config) else {
        debug!("nlu upload disabled: url or auth_token not configured");
        return Ok(false);
    };
    let authorization = format!("Basic {token}");
    let doc = CorpusParser::process(application_name, data_path)?;
    send_document(uploader, url, Some(&authorization), &doc)?;
    info!(
        target_url = url,
        application = %doc.application_name,
        sentences = doc.sentences.len(),
        "nlu training data uploaded"
    );
    Ok(true)
}

/// Upload the corpus at `data_path` to the LM admin service.
///
/// Returns `Ok(false)` without any network call when `url` is missing.
pub fn inject_lm(
    config: &LmConfig,
    application_name: &str,
    data_path: impl AsRef<Path>,
) -> Result<bool> {
    if lm_target(config).is_none() {
        debug!("lm upload disabled: url not configured");
        return Ok(false);
    }
    let uploader = HttpUploader::new(config.timeout_secs)?;
    inject_lm_with(&uploader, config, application_name, data_path)
}

/// [`inject_lm`] with an explicit transport.
pub fn inject_lm_with<U: Uploader + ?Sized>(
    uploader: &U,
    config: &LmConfig,
    application_name: &str,
    data_path: impl AsRef<Path>,
) -> Result<bool> {
    let Some(url) = lm_target(config) else {
        debug!("lm upload disabled: url not configured");
        return Ok(false);
    };
    let doc = CorpusParser::process(application_name, data_path)?;
    send_document(uploader, url, None, &doc)?;
    info!(
        target_url = url,
        application = %doc.application_name,
        sentences = doc.sentences.len(),
        "lm training data uploaded"
    );
    Ok(true)
}

fn nlu_target(config: &NluConfig) -> Option<(&str, &str)> {
    let url = present(config.url.as_deref())?;
    let token = present(config.auth_token.as_deref())?;
    Some((url, token))
}

fn lm_target(config: &LmConfig) -> Option<&str> {
    present(config.url.as_deref())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn send_document<U: Uploader + ?Sized>(
    uploader: &U,
    url: &str,
    authorization: Option<&str>,
    doc: &ParsedDocument,
) -> Result<()> {
    let mut file = tempfile::Builder::new()
        .prefix("linto-training-")
        .suffix(".json")
        .tempfile()?;
    serde_json::to_writer(&mut file, doc)?;
    file.flush()?;

    let file_name = format!("{}.json", doc.application_name.replace(':', "_"));
    debug!(path = %file.path().display(), "wrote training data to temporary file");

    uploader.upload(&UploadRequest {
        url,
        authorization,
        field: UPLOAD_FIELD,
        file_name: &file_name,
        file: file.path(),
    })
}
