//! Stock advisor orchestrator
//!
//! Wires an LLM provider, the three market-data tools, and the reasoning
//! loop into one reusable advisor. The provider and tool registry are built
//! once at construction; every `analyze` call gets a fresh transcript, so
//! runs never see each other's conversation.

use std::sync::Arc;

use advisor_core::{Agent, Context};
use advisor_llm::LLMProvider;
use advisor_llm::providers::OpenAIProvider;
use advisor_runtime::{AgentExecutorBuilder, Transcript};
use advisor_tools::ToolRegistry;
use async_trait::async_trait;
use tracing::info;

use crate::api::AlphaVantageClient;
use crate::config::AdvisorConfig;
use crate::error::{Result, StockError};
use crate::prompts::{advisor_system_prompt, language_name, verdict_instruction};
use crate::tools::{CompanyOverviewTool, IncomeStatementTool, StockPerformanceTool};

/// LLM-backed stock analysis agent
pub struct StockAdvisor {
    provider: Arc<dyn LLMProvider>,
    tools: Arc<ToolRegistry>,
    config: AdvisorConfig,
}

impl StockAdvisor {
    /// Create an advisor backed by the OpenAI chat completions API
    ///
    /// Credential problems surface here, not on the first analysis: an
    /// empty or missing key fails construction.
    pub fn new(config: AdvisorConfig) -> Result<Self> {
        config.validate()?;
        let provider = OpenAIProvider::new(config.openai_api_key.clone())?;
        Ok(Self::assemble(Arc::new(provider), config))
    }

    /// Create an advisor with an externally supplied reasoning engine
    ///
    /// Used to run the full pipeline against a stub or alternate provider.
    /// The market-data key is still required; the model-provider key in the
    /// config is ignored.
    pub fn with_provider(config: AdvisorConfig, provider: Arc<dyn LLMProvider>) -> Result<Self> {
        if config.alpha_vantage_api_key.is_empty() {
            return Err(StockError::ConfigError(
                "Alpha Vantage API key is required".to_string(),
            ));
        }
        Ok(Self::assemble(provider, config))
    }

    fn assemble(provider: Arc<dyn LLMProvider>, config: AdvisorConfig) -> Self {
        let client = AlphaVantageClient::new(config.alpha_vantage_api_key.clone());

        let tools = ToolRegistry::new();
        tools.register(Arc::new(CompanyOverviewTool::new(client.clone())));
        tools.register(Arc::new(IncomeStatementTool::new(client.clone())));
        tools.register(Arc::new(StockPerformanceTool::new(client)));

        Self {
            provider,
            tools: Arc::new(tools),
            config,
        }
    }

    /// Number of tools the reasoning agent may call
    pub fn capability_count(&self) -> usize {
        self.tools.len()
    }

    /// Analyze one stock and return the verdict text
    ///
    /// Runs the full reasoning loop on a fresh transcript. Malformed tool
    /// invocations are recovered inside the loop; data-provider network
    /// failures, model-provider failures, and a non-converging loop come
    /// back as errors with no partial result.
    pub async fn analyze(&self, symbol: &str) -> Result<String> {
        self.analyze_in(symbol, &self.config.language).await
    }

    /// Analyze one stock with the verdict written in the given language
    pub async fn analyze_in(&self, symbol: &str, language: &str) -> Result<String> {
        if symbol.trim().is_empty() {
            return Err(StockError::InvalidSymbol(
                "symbol must not be empty".to_string(),
            ));
        }

        let executor = AgentExecutorBuilder::new()
            .provider(Arc::clone(&self.provider))
            .tool_registry(Arc::clone(&self.tools))
            .model(&self.config.model)
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_tokens)
            .system_prompt(advisor_system_prompt())
            .build()?;

        let mut transcript = Transcript::new();
        info!(
            symbol,
            conversation_id = %transcript.conversation_id(),
            "Starting stock analysis"
        );

        let instruction = verdict_instruction(symbol, language_name(language));
        let verdict = executor.run(instruction, &mut transcript).await?;

        info!(
            symbol,
            turns = transcript.len(),
            verdict_length = verdict.len(),
            "Stock analysis finished"
        );

        Ok(verdict)
    }
}

#[async_trait]
impl Agent for StockAdvisor {
    async fn process(&self, input: String, context: &mut Context) -> advisor_core::Result<String> {
        let language = context
            .language()
            .unwrap_or(&self.config.language)
            .to_string();
        self.analyze_in(input.trim(), &language)
            .await
            .map_err(Into::into)
    }

    fn name(&self) -> &str {
        "stock-advisor"
    }
}
