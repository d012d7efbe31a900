use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use crate::types::TokenUsage;

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("contractlens/", env!("CARGO_PKG_VERSION"));

/// First backoff delay; doubles on every further attempt.
const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

/// Upper bound for a single backoff delay.
const RETRY_MAX_DELAY: Duration = Duration::from_secs(8);

/// Request to the LLM.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Response from the LLM.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl LlmResponse {
    pub fn usage(&self) -> TokenUsage {
        TokenUsage {
            input_tokens: self.input_tokens,
            output_tokens: self.output_tokens,
        }
    }
}

/// Trait for LLM clients, enabling mocking in tests.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse>;
}

#[async_trait]
impl<T: LlmClient + ?Sized> LlmClient for Arc<T> {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse> {
        (**self).complete(request).await
    }
}

/// Gemini `generateContent` client.
///
/// Do not derive `Debug` here: it would expose `api_key`.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    api_base_url: String,
    max_retries: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: Option<GeminiErrorDetail>,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

fn backoff(attempt: u32) -> Duration {
    let factor = 1u32 << attempt.saturating_sub(1).min(8);
    (RETRY_BASE_DELAY * factor).min(RETRY_MAX_DELAY)
}

impl GeminiClient {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(AnalyzerError::ModelRequest)?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.api_base_url)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse> {
        let url = self.endpoint(&request.model);

        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: [Part {
                    text: &request.system,
                }],
            },
            contents: [Content {
                role: Some("user"),
                parts: [Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            },
        };

        let max_attempts = self.max_retries + 1;
        let mut last_error: Option<AnalyzerError> = None;
        let mut next_delay = Duration::ZERO;

        for attempt in 0..max_attempts {
            if attempt > 0 {
                debug!(attempt, model = %request.model, "retrying model request after {:?}", next_delay);
                tokio::time::sleep(next_delay).await;
            }

            next_delay = backoff(attempt + 1);

            let resp = self
                .http
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await;

            let resp = match resp {
                Ok(r) => r,
                Err(e) if e.is_connect() || e.is_timeout() => {
                    warn!(attempt, error = %e, "model request failed");
                    last_error = Some(AnalyzerError::ModelRequest(e));
                    continue;
                }
                Err(e) => return Err(AnalyzerError::ModelRequest(e)),
            };

            let status = resp.status().as_u16();

            if status == 429 {
                let retry_after = resp
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                warn!(attempt, retry_after, "model rate limited");
                next_delay = Duration::from_secs(retry_after).max(next_delay);
                last_error = Some(AnalyzerError::ModelRateLimited {
                    retry_after_secs: retry_after,
                });
                continue;
            }

            if status >= 500 {
                let body_text = resp.text().await.unwrap_or_default();
                warn!(attempt, status, body = %body_text, "model server error");
                last_error = Some(AnalyzerError::ModelApi {
                    status,
                    message: body_text,
                });
                continue;
            }

            if status != 200 {
                let body_text = resp.text().await.unwrap_or_default();
                let message = serde_json::from_str::<GeminiErrorResponse>(&body_text)
                    .ok()
                    .and_then(|r| r.error)
                    .map(|e| e.message)
                    .unwrap_or(body_text);
                return Err(AnalyzerError::ModelApi { status, message });
            }

            let api_response: GenerateContentResponse = resp.json().await?;

            let content = api_response
                .candidates
                .into_iter()
                .next()
                .and_then(|c| c.content)
                .map(|c| {
                    c.parts
                        .into_iter()
                        .filter_map(|p| p.text)
                        .collect::<Vec<_>>()
                        .join("")
                })
                .unwrap_or_default();

            if content.trim().is_empty() {
                warn!(attempt, "model returned empty response");
                last_error = Some(AnalyzerError::ModelEmptyResponse);
                continue;
            }

            let usage = api_response.usage_metadata;
            return Ok(LlmResponse {
                content,
                input_tokens: usage.as_ref().map_or(0, |u| u.prompt_token_count),
                output_tokens: usage.as_ref().map_or(0, |u| u.candidates_token_count),
            });
        }

        Err(last_error.unwrap_or(AnalyzerError::ModelEmptyResponse))
    }
}

/// Test utilities for the LLM client.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Mock LLM client for testing. Returns pre-configured responses in order
    /// and records every request it receives.
    pub struct MockLlmClient {
        responses: Mutex<Vec<Result<LlmResponse>>>,
        requests: Mutex<Vec<LlmRequest>>,
        delay: Option<Duration>,
    }

    impl MockLlmClient {
        pub fn new(responses: Vec<Result<LlmResponse>>) -> Self {
            // Reverse so we can pop from the end
            let mut responses = responses;
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
                delay: None,
            }
        }

        pub fn with_response(content: &str) -> Self {
            Self::with_responses(vec![content])
        }

        pub fn with_responses(contents: Vec<&str>) -> Self {
            Self::new(
                contents
                    .into_iter()
                    .map(|c| {
                        Ok(LlmResponse {
                            content: c.to_string(),
                            input_tokens: 100,
                            output_tokens: 200,
                        })
                    })
                    .collect(),
            )
        }

        /// Delay every response, for timeout tests.
        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// Requests received so far, in call order.
        pub fn requests(&self) -> Vec<LlmRequest> {
            self.requests
                .lock()
                .map(|r| r.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse> {
            let next = {
                if let Ok(mut requests) = self.requests.lock() {
                    requests.push(request.clone());
                }
                let mut responses = self.responses.lock().map_err(|e| {
                    AnalyzerError::Config(format!("mock lock poisoned: {e}"))
                })?;
                responses.pop().unwrap_or(Err(AnalyzerError::ModelEmptyResponse))
            };
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        assert_eq!(backoff(1), Duration::from_secs(1));
        assert_eq!(backoff(2), Duration::from_secs(2));
        assert_eq!(backoff(3), Duration::from_secs(4));
        assert_eq!(backoff(5), RETRY_MAX_DELAY);
        assert_eq!(backoff(40), RETRY_MAX_DELAY);
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = AnalyzerConfig::builder("k")
            .api_base_url("http://localhost:1234/")
            .build();
        let client = GeminiClient::new(&config).expect("client");
        assert_eq!(
            client.endpoint("gemini-3-flash-preview"),
            "http://localhost:1234/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn test_mock_returns_in_order_and_records() {
        let mock = test_support::MockLlmClient::with_responses(vec!["one", "two"]);
        let request = LlmRequest {
            model: "m".into(),
            system: "s".into(),
            prompt: "p".into(),
            max_tokens: 10,
            temperature: 0.0,
        };
        assert_eq!(mock.complete(&request).await.expect("first").content, "one");
        assert_eq!(mock.complete(&request).await.expect("second").content, "two");
        assert!(mock.complete(&request).await.is_err());
        assert_eq!(mock.requests().len(), 3);
    }
}
