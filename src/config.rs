//! Service connection configuration

use serde::Deserialize;

/// Configuration for the dialogue service connection
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// API key for the dialogue service
    pub api_key: String,
    /// Character/persona the service should speak as
    pub character_id: String,
    /// Whether voice interaction is enabled at all
    pub enable_audio: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            character_id: String::new(),
            enable_audio: true,
        }
    }
}

impl ServiceConfig {
    /// Populate from `CONFAB_API_KEY` / `CONFAB_CHARACTER_ID` environment
    /// variables, leaving defaults for anything unset
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("CONFAB_API_KEY") {
            config.api_key = key;
        }
        if let Ok(id) = std::env::var("CONFAB_CHARACTER_ID") {
            config.character_id = id;
        }
        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn with_character(mut self, id: impl Into<String>) -> Self {
        self.character_id = id.into();
        self
    }

    pub fn without_audio(mut self) -> Self {
        self.enable_audio = false;
        self
    }

    /// Check that the config is complete enough to open a connection
    pub fn validate(&self) -> crate::Result<()> {
        if self.api_key.is_empty() {
            return Err(crate::ConfabError::ConfigError(
                "missing API key".to_string(),
            ));
        }
        if self.character_id.is_empty() {
            return Err(crate::ConfabError::ConfigError(
                "missing character id".to_string(),
            ));
        }
        Ok(())
    }
}
