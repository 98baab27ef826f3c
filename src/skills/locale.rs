//! Localized skill responses.
//!
//! Responses are resolved through explicit `(language, node)` registrations
//! instead of building module paths at lookup time. The fallback language is
//! part of the registry, set once from [`LocaleConfig`].
//!
//! Locale data has the shape `{ "<node>": { "response": ... } }`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::LocaleConfig;
use crate::error::{MsError, Result};

type Loader = Box<dyn Fn() -> Result<Value> + Send + Sync>;

pub struct LocaleRegistry {
    default_language: String,
    loaders: HashMap<(String, String), Loader>,
}

impl std::fmt::Debug for LocaleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.loaders.keys().collect();
        keys.sort();
        f.debug_struct("LocaleRegistry")
            .field("default_language", &self.default_language)
            .field("entries", &keys)
            .finish()
    }
}

impl LocaleRegistry {
    #[must_use]
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            loaders: HashMap::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &LocaleConfig) -> Self {
        Self::new(config.default_language.clone())
    }

    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Register `loader` as the source for `node` in `language`, replacing
    /// any previous registration.
    pub fn register<F>(&mut self, language: impl Into<String>, node: impl Into<String>, loader: F)
    where
        F: Fn() -> Result<Value> + Send + Sync + 'static,
    {
        self.loaders
            .insert((language.into(), node.into()), Box::new(loader));
    }

    /// Register a JSON file. The file is read on every lookup.
    pub fn register_json(
        &mut self,
        language: impl Into<String>,
        node: impl Into<String>,
        path: impl Into<PathBuf>,
    ) {
        let path = path.into();
        self.register(language, node, move || read_json(&path));
    }

    /// Register every `locales/<language>/<node>.json` under `skill_dir`.
    ///
    /// Returns the number of registrations. A skill without a `locales`
    /// directory registers nothing.
    pub fn register_skill_dir(&mut self, skill_dir: &Path) -> Result<usize> {
        let root = skill_dir.join("locales");
        if !root.is_dir() {
            return Ok(0);
        }

        let mut count = 0;
        for lang_entry in std::fs::read_dir(&root)? {
            let lang_path = lang_entry?.path();
            if !lang_path.is_dir() {
                continue;
            }
            let Some(language) = lang_path.file_name().and_then(|n| n.to_str()).map(str::to_string)
            else {
                continue;
            };
            for node_entry in std::fs::read_dir(&lang_path)? {
                let node_path = node_entry?.path();
                if node_path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(node) = node_path.file_stem().and_then(|n| n.to_str()).map(str::to_string)
                else {
                    continue;
                };
                debug!(language = %language, node = %node, path = %node_path.display(), "registered locale");
                self.register_json(language.clone(), node, node_path);
                count += 1;
            }
        }
        Ok(count)
    }

    /// Load the `response` object of `node` in `language`, or in the
    /// default language when `language` is `None`.
    pub fn load_language(&self, node: &str, language: Option<&str>) -> Result<Value> {
        let language = language.unwrap_or(&self.default_language);
        let loader = self
            .loaders
            .get(&(language.to_string(), node.to_string()))
            .ok_or_else(|| MsError::LocaleNotFound {
                language: language.to_string(),
                node: node.to_string(),
            })?;

        let data = loader()?;
        data.get(node)
            .and_then(|entry| entry.get("response"))
            .cloned()
            .ok_or_else(|| MsError::InvalidLocale {
                node: node.to_string(),
                reason: format!("missing `{node}.response`"),
            })
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
