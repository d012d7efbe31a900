use std::time::Duration;

use tracing::{debug, info, warn};

use crate::client::{LlmClient, LlmRequest, LlmResponse};
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use crate::normalizer::normalize;
use crate::parser::{parse_response, ParsedRecord, ResponseShape};
use crate::prompt;
use crate::router::ModelRouter;
use crate::types::{
    Analysis, ContractInfo, ModelConfig, ModelTier, PartialResultWarning, Section, TokenUsage,
};
use crate::validator::{word_count, ContractText, InputValidator};

fn inspect(raw: &str, validator: &InputValidator, router: &ModelRouter) -> ContractInfo {
    let count = word_count(raw);
    let model = router.select_for_count(count);
    ContractInfo {
        word_count: count,
        max_words: validator.max_words(),
        is_valid: count > 0 && count <= validator.max_words(),
        is_long_context: model.tier == ModelTier::Capable,
        model_to_use: model.model,
    }
}

/// Pre-flight report for a contract using only configuration.
pub fn contract_info(config: &AnalyzerConfig, raw: &str) -> ContractInfo {
    inspect(
        raw,
        &InputValidator::new(config.max_words),
        &ModelRouter::from_config(config),
    )
}

/// Result of one section call in three-call mode.
///
/// Transport failures never reach this type; they abort the analysis.
struct SectionOutcome {
    section: Section,
    usage: TokenUsage,
    parsed: Result<ParsedRecord>,
}

/// Contract analysis orchestrator.
///
/// Validates the contract, routes it to a model tier, prompts the model,
/// parses the response and normalizes it. Two modes are offered:
///
/// - [`analyze`](Self::analyze): one call per section. A section whose
///   response cannot be parsed is reported as a [`PartialResultWarning`]
///   and the other sections are still returned.
/// - [`analyze_efficient`](Self::analyze_efficient): one combined call. A
///   parse failure fails the whole analysis since one response backs every
///   section.
///
/// In both modes a validation error is returned before any model call and
/// model transport errors propagate unchanged.
pub struct ContractAnalyzer<C: LlmClient> {
    client: C,
    validator: InputValidator,
    router: ModelRouter,
    max_tokens: u32,
    temperature: f64,
    call_timeout: Duration,
}

impl<C: LlmClient> ContractAnalyzer<C> {
    pub fn new(client: C, config: &AnalyzerConfig) -> Self {
        Self {
            client,
            validator: InputValidator::new(config.max_words),
            router: ModelRouter::from_config(config),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            call_timeout: Duration::from_secs(config.call_timeout_secs),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn router(&self) -> &ModelRouter {
        &self.router
    }

    /// Word count, validity and routing for a contract, without calling the model.
    pub fn contract_info(&self, raw: &str) -> ContractInfo {
        inspect(raw, &self.validator, &self.router)
    }

    fn prepare(&self, raw: &str, mode: &'static str) -> Result<(ContractText, ModelConfig)> {
        let text = self.validator.validate(raw)?;
        let model = self.router.select(&text);
        info!(
            mode,
            word_count = text.word_count(),
            tier = %model.tier,
            model = %model.model,
            "analyzing contract"
        );
        Ok((text, model))
    }

    fn info_for(&self, text: &ContractText, model: &ModelConfig) -> ContractInfo {
        ContractInfo {
            word_count: text.word_count(),
            max_words: self.validator.max_words(),
            is_valid: true,
            model_to_use: model.model.clone(),
            is_long_context: model.tier == ModelTier::Capable,
        }
    }

    async fn call(&self, model: &ModelConfig, prompt: String) -> Result<LlmResponse> {
        let request = LlmRequest {
            model: model.model.clone(),
            system: prompt::build_system_prompt().to_string(),
            prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        match tokio::time::timeout(self.call_timeout, self.client.complete(&request)).await {
            Ok(response) => response,
            Err(_) => Err(AnalyzerError::ModelTimeout {
                secs: self.call_timeout.as_secs(),
            }),
        }
    }

    async fn run_section(
        &self,
        model: &ModelConfig,
        section: Section,
        prompt: String,
        shape: ResponseShape,
    ) -> Result<SectionOutcome> {
        debug!(%section, "requesting section");
        let response = self.call(model, prompt).await?;
        Ok(SectionOutcome {
            section,
            usage: response.usage(),
            parsed: parse_response(&response.content, shape),
        })
    }

    /// Analyze a contract with one model call per section.
    ///
    /// The three calls run concurrently. If every section fails to parse,
    /// the first [`AnalyzerError::ResponseParse`] is returned rather than an
    /// empty result.
    pub async fn analyze(&self, raw: &str) -> Result<Analysis> {
        let (text, model) = self.prepare(raw, "full")?;

        let (summary, clauses, risks) = tokio::join!(
            self.run_section(
                &model,
                Section::Summary,
                prompt::build_summary_prompt(&text),
                ResponseShape::Summary,
            ),
            self.run_section(
                &model,
                Section::Clauses,
                prompt::build_clause_prompt(&text),
                ResponseShape::Clauses,
            ),
            self.run_section(
                &model,
                Section::RiskyClauses,
                prompt::build_risk_prompt(&text),
                ResponseShape::RiskyClauses,
            ),
        );
        let outcomes = [summary?, clauses?, risks?];

        let mut record = ParsedRecord::default();
        let mut usage = TokenUsage::default();
        let mut warnings = Vec::new();
        let mut first_failure: Option<AnalyzerError> = None;

        for outcome in outcomes {
            usage.add(&outcome.usage);
            match outcome.parsed {
                Ok(parsed) => match outcome.section {
                    Section::Summary => record.summary = parsed.summary,
                    Section::Clauses => record.clauses = parsed.clauses,
                    Section::RiskyClauses => record.risky_clauses = parsed.risky_clauses,
                },
                Err(e) => {
                    warn!(section = %outcome.section, error = %e, "section failed, continuing with partial result");
                    warnings.push(PartialResultWarning {
                        section: outcome.section,
                        message: e.to_string(),
                    });
                    first_failure.get_or_insert(e);
                }
            }
        }

        if warnings.len() == 3 {
            if let Some(e) = first_failure {
                return Err(e);
            }
        }

        Ok(Analysis {
            result: normalize(record),
            warnings,
            info: self.info_for(&text, &model),
            token_usage: usage,
        })
    }

    /// Analyze a contract with a single combined model call.
    pub async fn analyze_efficient(&self, raw: &str) -> Result<Analysis> {
        let (text, model) = self.prepare(raw, "efficient")?;

        let response = self
            .call(&model, prompt::build_combined_prompt(&text))
            .await?;
        let parsed = parse_response(&response.content, ResponseShape::Combined)?;

        Ok(Analysis {
            result: normalize(parsed),
            warnings: Vec::new(),
            info: self.info_for(&text, &model),
            token_usage: response.usage(),
        })
    }
}
