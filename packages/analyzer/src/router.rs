//! Length-based model tier selection.

use crate::config::AnalyzerConfig;
use crate::types::{ModelConfig, ModelTier};
use crate::validator::ContractText;

/// Picks the model configuration for a request from the contract's word count.
///
/// Below `threshold` words the fast tier is used; at or above it, the capable
/// tier. There is no fallback: an unavailable tier surfaces as a model error.
#[derive(Debug, Clone)]
pub struct ModelRouter {
    threshold: usize,
    fast_model: String,
    capable_model: String,
    pinned_model: Option<String>,
}

impl ModelRouter {
    pub fn new(
        threshold: usize,
        fast_model: impl Into<String>,
        capable_model: impl Into<String>,
    ) -> Self {
        Self {
            threshold,
            fast_model: fast_model.into(),
            capable_model: capable_model.into(),
            pinned_model: None,
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            threshold: config.long_contract_threshold,
            fast_model: config.fast_model.clone(),
            capable_model: config.capable_model.clone(),
            pinned_model: config.pinned_model.clone(),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn tier_for(&self, word_count: usize) -> ModelTier {
        if word_count >= self.threshold {
            ModelTier::Capable
        } else {
            ModelTier::Fast
        }
    }

    /// Model configuration for a raw word count.
    pub fn select_for_count(&self, word_count: usize) -> ModelConfig {
        let tier = self.tier_for(word_count);
        let model = match (&self.pinned_model, tier) {
            (Some(pinned), _) => pinned.clone(),
            (None, ModelTier::Fast) => self.fast_model.clone(),
            (None, ModelTier::Capable) => self.capable_model.clone(),
        };
        ModelConfig { tier, model }
    }

    pub fn select(&self, text: &ContractText) -> ModelConfig {
        self.select_for_count(text.word_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::InputValidator;

    fn router() -> ModelRouter {
        ModelRouter::from_config(&AnalyzerConfig::builder("k").build())
    }

    #[test]
    fn test_threshold_boundary() {
        let router = router();
        assert_eq!(router.select_for_count(3499).tier, ModelTier::Fast);
        assert_eq!(router.select_for_count(3500).tier, ModelTier::Capable);
        assert_eq!(router.select_for_count(3501).tier, ModelTier::Capable);
    }

    #[test]
    fn test_select_uses_validated_word_count() {
        let text = InputValidator::new(5000)
            .validate(&vec!["clause"; 3500].join(" "))
            .expect("valid");
        let selected = router().select(&text);
        assert_eq!(selected.tier, ModelTier::Capable);
        assert_eq!(selected.model, "gemini-3-pro-preview");
    }

    #[test]
    fn test_tier_models_are_configurable() {
        let router = ModelRouter::new(10, "small", "large");
        assert_eq!(router.select_for_count(9).model, "small");
        assert_eq!(router.select_for_count(10).model, "large");
    }

    #[test]
    fn test_pinned_model_keeps_tier() {
        let config = AnalyzerConfig::builder("k").pinned_model("custom").build();
        let router = ModelRouter::from_config(&config);
        let short = router.select_for_count(10);
        let long = router.select_for_count(4000);
        assert_eq!(short.model, "custom");
        assert_eq!(short.tier, ModelTier::Fast);
        assert_eq!(long.model, "custom");
        assert_eq!(long.tier, ModelTier::Capable);
    }
}
