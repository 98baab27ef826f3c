//! Helpers used by skills at runtime: message envelopes, intent selection,
//! localized responses, and training data population.

pub mod format;
pub mod intent;
pub mod locale;

use std::path::Path;

use crate::config::{Config, LmConfig, NluConfig};
use crate::error::Result;
use crate::populate;

pub use format::{format_to_ask, format_to_say, AskMessage, SayMessage};
pub use intent::{
    check_entities_require, extract_entity_from_prefix, extract_entity_from_type,
    intent_detection, multiple_intent_detection, IntentMatch, NluEntity, NluResult, Payload,
};
pub use locale::LocaleRegistry;

/// Bundles the per-process state a skill needs: upload targets and the
/// locale registry.
#[derive(Debug)]
pub struct Utility {
    nlu: NluConfig,
    lm: LmConfig,
    locales: LocaleRegistry,
}

impl Utility {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            nlu: config.nlu.clone(),
            lm: config.lm.clone(),
            locales: LocaleRegistry::from_config(&config.locale),
        }
    }

    #[must_use]
    pub const fn locales(&self) -> &LocaleRegistry {
        &self.locales
    }

    pub fn locales_mut(&mut self) -> &mut LocaleRegistry {
        &mut self.locales
    }

    /// Upload `skills_data_path` to the NLU. `Ok(false)` when the NLU target
    /// is not configured.
    pub fn populate_nlu_skills(&self, application_name: &str, skills_data_path: &Path) -> Result<bool> {
        populate::inject_nlu(&self.nlu, application_name, skills_data_path)
    }

    /// Upload `skills_data_path` to the LM. `Ok(false)` when the LM target
    /// is not configured.
    pub fn populate_lm_skills(&self, application_name: &str, skills_data_path: &Path) -> Result<bool> {
        populate::inject_lm(&self.lm, application_name, skills_data_path)
    }
}
