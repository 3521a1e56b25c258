//! Inference provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Inference provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<SecretString>,

    /// Anthropic API key
    pub anthropic_api_key: Option<SecretString>,

    /// Provider the assistant talks to
    #[serde(default)]
    pub primary_provider: AiProvider,

    /// Model override; each provider has its own default
    pub model: Option<String>,

    /// API base URL override (proxies, self-hosted gateways)
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens per reply
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// Inference provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    OpenAI,
    Anthropic,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_openai(&self) -> bool {
        has_key(&self.openai_api_key)
    }

    pub fn has_anthropic(&self) -> bool {
        has_key(&self.anthropic_api_key)
    }

    /// API key of the primary provider, if set
    pub fn primary_api_key(&self) -> Option<&SecretString> {
        match self.primary_provider {
            AiProvider::OpenAI => self.openai_api_key.as_ref(),
            AiProvider::Anthropic => self.anthropic_api_key.as_ref(),
        }
    }

    /// Validate inference configuration
    ///
    /// The primary provider's key is only checked when `require_key` is set,
    /// i.e. when the assistant is enabled.
    pub fn validate(&self, require_key: bool) -> Result<(), ValidationError> {
        if require_key {
            match self.primary_provider {
                AiProvider::OpenAI if !self.has_openai() => {
                    return Err(ValidationError::MissingRequired("AI__OPENAI_API_KEY"));
                }
                AiProvider::Anthropic if !self.has_anthropic() => {
                    return Err(ValidationError::MissingRequired("AI__ANTHROPIC_API_KEY"));
                }
                _ => {}
            }
        }

        if !(1..=120).contains(&self.timeout_secs) {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }

        Ok(())
    }
}

fn has_key(key: &Option<SecretString>) -> bool {
    key.as_ref().is_some_and(|k| !k.expose_secret().trim().is_empty())
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            anthropic_api_key: None,
            primary_provider: AiProvider::default(),
            model: None,
            base_url: None,
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> u32 {
    1024
}
