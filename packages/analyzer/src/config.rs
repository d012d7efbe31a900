//! Analyzer configuration.

use std::fmt;

use crate::error::{AnalyzerError, Result};

/// Default Gemini endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for contracts below the long-contract threshold.
pub const DEFAULT_FAST_MODEL: &str = "gemini-3-flash-preview";

/// Model used for contracts at or above the long-contract threshold.
pub const DEFAULT_CAPABLE_MODEL: &str = "gemini-3-pro-preview";

/// Word count at which the capable tier takes over.
pub const DEFAULT_LONG_CONTRACT_THRESHOLD: usize = 3500;

/// Maximum accepted contract length in words.
pub const DEFAULT_MAX_WORDS: usize = 5000;

/// Configuration for contract analysis.
///
/// Constructed explicitly and passed to the analyzer and client; nothing in
/// the crate reads ambient state after construction.
#[derive(Clone)]
pub struct AnalyzerConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub fast_model: String,
    pub capable_model: String,
    /// Overrides the model identifier for both tiers.
    pub pinned_model: Option<String>,
    pub long_contract_threshold: usize,
    pub max_words: usize,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Per-HTTP-request timeout.
    pub timeout_secs: u64,
    pub max_retries: u32,
    /// Upper bound on one model call, retries included.
    pub call_timeout_secs: u64,
}

// api_key must never reach logs.
impl fmt::Debug for AnalyzerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("fast_model", &self.fast_model)
            .field("capable_model", &self.capable_model)
            .field("pinned_model", &self.pinned_model)
            .field("long_contract_threshold", &self.long_contract_threshold)
            .field("max_words", &self.max_words)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("call_timeout_secs", &self.call_timeout_secs)
            .finish()
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl AnalyzerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AnalyzerError::Config("GOOGLE_API_KEY not set".into()))?;
        Self::from_env_with_key(api_key)
    }

    /// Load configuration for operations that never call the model.
    ///
    /// Same as [`from_env`](Self::from_env) but the API key is optional.
    pub fn offline_from_env() -> Result<Self> {
        Self::from_env_with_key(std::env::var("GOOGLE_API_KEY").unwrap_or_default())
    }

    fn from_env_with_key(api_key: String) -> Result<Self> {
        let api_base_url =
            std::env::var("LLM_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());

        let fast_model =
            std::env::var("LLM_FAST_MODEL").unwrap_or_else(|_| DEFAULT_FAST_MODEL.into());

        let capable_model =
            std::env::var("LLM_CAPABLE_MODEL").unwrap_or_else(|_| DEFAULT_CAPABLE_MODEL.into());

        let pinned_model = std::env::var("LLM_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty());

        let config = Self {
            api_key,
            api_base_url,
            fast_model,
            capable_model,
            pinned_model,
            long_contract_threshold: env_parsed(
                "CONTRACT_LONG_THRESHOLD",
                DEFAULT_LONG_CONTRACT_THRESHOLD,
            ),
            max_words: env_parsed("CONTRACT_MAX_WORDS", DEFAULT_MAX_WORDS),
            temperature: env_parsed("LLM_TEMPERATURE", 0.0),
            max_tokens: env_parsed("LLM_MAX_TOKENS", 8192),
            timeout_secs: env_parsed("LLM_TIMEOUT_SECS", 120),
            max_retries: env_parsed("LLM_MAX_RETRIES", 3),
            call_timeout_secs: env_parsed("LLM_CALL_TIMEOUT_SECS", 600),
        };
        config.check()?;
        Ok(config)
    }

    /// Create a config builder with default values.
    pub fn builder(api_key: impl Into<String>) -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder {
            config: AnalyzerConfig {
                api_key: api_key.into(),
                api_base_url: DEFAULT_API_BASE_URL.into(),
                fast_model: DEFAULT_FAST_MODEL.into(),
                capable_model: DEFAULT_CAPABLE_MODEL.into(),
                pinned_model: None,
                long_contract_threshold: DEFAULT_LONG_CONTRACT_THRESHOLD,
                max_words: DEFAULT_MAX_WORDS,
                temperature: 0.0,
                max_tokens: 8192,
                timeout_secs: 120,
                max_retries: 3,
                call_timeout_secs: 600,
            },
        }
    }

    fn check(&self) -> Result<()> {
        if self.max_words == 0 {
            return Err(AnalyzerError::Config("max_words must be positive".into()));
        }
        if self.timeout_secs == 0 || self.call_timeout_secs == 0 {
            return Err(AnalyzerError::Config("timeouts must be positive".into()));
        }
        Ok(())
    }
}

/// Builder for constructing `AnalyzerConfig` in tests and embedding code.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.config.api_base_url = api_base_url.into();
        self
    }

    pub fn fast_model(mut self, model: impl Into<String>) -> Self {
        self.config.fast_model = model.into();
        self
    }

    pub fn capable_model(mut self, model: impl Into<String>) -> Self {
        self.config.capable_model = model.into();
        self
    }

    pub fn pinned_model(mut self, model: impl Into<String>) -> Self {
        self.config.pinned_model = Some(model.into());
        self
    }

    pub fn long_contract_threshold(mut self, threshold: usize) -> Self {
        self.config.long_contract_threshold = threshold;
        self
    }

    pub fn max_words(mut self, max_words: usize) -> Self {
        self.config.max_words = max_words;
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.config.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.config.max_tokens = max_tokens;
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    pub fn call_timeout_secs(mut self, call_timeout_secs: u64) -> Self {
        self.config.call_timeout_secs = call_timeout_secs;
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}
