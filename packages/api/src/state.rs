use std::sync::Arc;

use contractlens_analyzer::{AnalyzerConfig, ContractAnalyzer, LlmClient};

pub type SharedClient = Arc<dyn LlmClient>;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<ContractAnalyzer<SharedClient>>,
    pub api_key_configured: bool,
}

impl AppState {
    pub fn new(client: SharedClient, config: &AnalyzerConfig) -> Self {
        Self {
            analyzer: Arc::new(ContractAnalyzer::new(client, config)),
            api_key_configured: !config.api_key.trim().is_empty(),
        }
    }
}
