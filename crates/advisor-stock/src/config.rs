//! Advisor configuration
//!
//! Collects the two provider credentials and the model settings for one
//! advisor instance. Credentials are redacted from debug output.

use advisor_runtime::executor::DEFAULT_MODEL;
use advisor_utils::redact;

use crate::error::{Result, StockError};

/// Configuration for a [`crate::StockAdvisor`]
#[derive(Clone)]
pub struct AdvisorConfig {
    /// API key for the model provider (OpenAI)
    pub openai_api_key: String,
    /// API key for the market-data provider (Alpha Vantage)
    pub alpha_vantage_api_key: String,
    /// Model identifier passed to the provider
    pub model: String,
    /// Sampling temperature for the reasoning model
    pub temperature: f32,
    /// Maximum tokens per completion
    pub max_tokens: usize,
    /// Language the final verdict should be written in (e.g. "English")
    pub language: String,
}

impl std::fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("alpha_vantage_api_key", &redact(&self.alpha_vantage_api_key))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("language", &self.language)
            .finish()
    }
}

impl AdvisorConfig {
    /// Start building a configuration
    pub fn builder() -> AdvisorConfigBuilder {
        AdvisorConfigBuilder::default()
    }

    /// Check that both provider credentials are present
    pub fn validate(&self) -> Result<()> {
        if self.openai_api_key.is_empty() {
            return Err(StockError::ConfigError(
                "OpenAI API key is required".to_string(),
            ));
        }
        if self.alpha_vantage_api_key.is_empty() {
            return Err(StockError::ConfigError(
                "Alpha Vantage API key is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`AdvisorConfig`]
#[derive(Debug, Default)]
pub struct AdvisorConfigBuilder {
    openai_api_key: Option<String>,
    alpha_vantage_api_key: Option<String>,
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<usize>,
    language: Option<String>,
}

impl AdvisorConfigBuilder {
    /// Set the model-provider API key
    pub fn openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    /// Set the market-data provider API key
    pub fn alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Override the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Override the completion token limit
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the verdict language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AdvisorConfig> {
        let config = AdvisorConfig {
            openai_api_key: self.openai_api_key.unwrap_or_default(),
            alpha_vantage_api_key: self.alpha_vantage_api_key.unwrap_or_default(),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: self.temperature.unwrap_or(0.7),
            max_tokens: self.max_tokens.unwrap_or(4096),
            language: self.language.unwrap_or_else(|| "English".to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}
