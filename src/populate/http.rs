use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use tracing::warn;

use crate::error::{MsError, Result};

use super::{UploadRequest, Uploader};

const USER_AGENT: &str = concat!("linto-utility/", env!("CARGO_PKG_VERSION"));
const MAX_ERROR_BODY: usize = 512;

/// Multipart uploader backed by a blocking reqwest client.
#[derive(Debug)]
pub struct HttpUploader {
    client: reqwest::blocking::Client,
}

impl HttpUploader {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| MsError::Config(format!("upload http client: {err}")))?;
        Ok(Self { client })
    }
}

impl Uploader for HttpUploader {
    fn upload(&self, request: &UploadRequest<'_>) -> Result<()> {
        if request.authorization.is_some() && request.url.starts_with("http://") {
            warn!(url = request.url, "upload endpoint uses unencrypted HTTP; credentials are sent in plain text");
        }

        let bytes = std::fs::read(request.file)?;
        let part = Part::bytes(bytes)
            .file_name(request.file_name.to_string())
            .mime_str("application/json")
            .map_err(|err| MsError::Transport(format!("build multipart body: {err}")))?;
        let form = Form::new().part(request.field, part);

        let mut builder = self.client.post(request.url).multipart(form);
        if let Some(authorization) = request.authorization {
            builder = builder.header(reqwest::header::AUTHORIZATION, authorization);
        }

        let response = builder
            .send()
            .map_err(|err| MsError::Transport(format!("POST {}: {err}", request.url)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(MsError::Transport(format!(
                "POST {} failed: HTTP {status} {body}",
                request.url
            )));
        }
        Ok(())
    }
}
