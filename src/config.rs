use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MsError, Result};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub nlu: NluConfig,
    #[serde(default)]
    pub lm: LmConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
}

impl Config {
    /// Load configuration from `explicit_path`, `LINTO_CONFIG`, or the global
    /// config file, then apply `LINTO_*` environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("LINTO_CONFIG").ok().map(PathBuf::from));

        let patch = match explicit {
            Some(path) => Self::load_patch(&path)?,
            None => Self::load_global()?,
        };
        if let Some(patch) = patch {
            config.merge_patch(patch);
        }

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("linto/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| MsError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| MsError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.nlu {
            self.nlu.merge(patch);
        }
        if let Some(patch) = patch.lm {
            self.lm.merge(patch);
        }
        if let Some(patch) = patch.locale {
            self.locale.merge(patch);
        }
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("LINTO_NLU_URL") {
            self.nlu.url = non_blank(value);
        }
        if let Some(value) = lookup("LINTO_NLU_AUTH_TOKEN") {
            self.nlu.auth_token = non_blank(value);
        }
        if let Some(value) = parse_u64(&lookup, "LINTO_NLU_TIMEOUT_SECS")? {
            self.nlu.timeout_secs = value;
        }
        if let Some(value) = lookup("LINTO_LM_URL") {
            self.lm.url = non_blank(value);
        }
        if let Some(value) = parse_u64(&lookup, "LINTO_LM_TIMEOUT_SECS")? {
            self.lm.timeout_secs = value;
        }
        if let Some(value) = lookup("LINTO_DEFAULT_LANGUAGE").and_then(non_blank) {
            self.locale.default_language = value;
        }
        Ok(())
    }
}

/// NLU admin service target. Uploads are skipped unless both `url` and
/// `auth_token` are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NluConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NluConfig {
    fn default() -> Self {
        Self {
            url: None,
            auth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl NluConfig {
    fn merge(&mut self, patch: NluPatch) {
        if let Some(value) = patch.url {
            self.url = non_blank(value);
        }
        if let Some(value) = patch.auth_token {
            self.auth_token = non_blank(value);
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
    }
}

/// LM admin service target. Uploads are skipped unless `url` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LmConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LmConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LmConfig {
    fn merge(&mut self, patch: LmPatch) {
        if let Some(value) = patch.url {
            self.url = non_blank(value);
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl LocaleConfig {
    fn merge(&mut self, patch: LocalePatch) {
        if let Some(value) = patch.default_language.and_then(non_blank) {
            self.default_language = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub nlu: Option<NluPatch>,
    pub lm: Option<LmPatch>,
    pub locale: Option<LocalePatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct NluPatch {
    pub url: Option<String>,
    pub auth_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LmPatch {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LocalePatch {
    pub default_language: Option<String>,
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_u64<F>(lookup: &F, key: &str) -> Result<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.trim().parse::<u64>().map(Some).map_err(|err| {
            MsError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        None => Ok(None),
    }
}
