//! Agent executor for running the reasoning loop
//!
//! The AgentExecutor implements the tool-use loop:
//! 1. Call the LLM with the transcript and available tools
//! 2. Check the stop reason
//! 3. If tool use was requested, execute tools sequentially and loop back
//! 4. If completed, return the final response
//!
//! Recovery contract: malformed tool invocations (unknown tool names, tool
//! inputs that fail to parse) become error tool-results handed back to the
//! model so it can retry. Genuine tool failures, such as a network error
//! while fetching data, propagate and abort the run, as do provider
//! failures (auth, quota, transport).

use advisor_core::Result;
use advisor_llm::{
    CompletionRequest, ContentBlock, LLMProvider, Message, StopReason, ToolDefinition,
};
use advisor_tools::ToolRegistry;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::Transcript;

/// Default model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Configuration for agent execution
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Maximum number of iterations (prevents infinite loops)
    pub max_iterations: usize,

    /// Model to use
    pub model: String,

    /// System prompt
    pub system_prompt: Option<String>,

    /// Max tokens per completion
    pub max_tokens: usize,

    /// Sampling temperature; non-zero means runs are not deterministic
    pub temperature: Option<f32>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
            max_tokens: 4096,
            temperature: Some(0.7),
        }
    }
}

/// Executes the reasoning loop: LLM → tool calls → execution → loop back
pub struct AgentExecutor {
    provider: Arc<dyn LLMProvider>,
    tool_registry: Arc<ToolRegistry>,
    config: ExecutorConfig,
}

impl AgentExecutor {
    /// Create a new agent executor
    pub fn new(
        provider: Arc<dyn LLMProvider>,
        tool_registry: Arc<ToolRegistry>,
        config: ExecutorConfig,
    ) -> Self {
        Self {
            provider,
            tool_registry,
            config,
        }
    }

    /// Run the reasoning loop for one instruction
    ///
    /// The instruction and every subsequent turn are appended to the given
    /// transcript, which the caller owns for the duration of the run.
    pub async fn run(&self, instruction: String, transcript: &mut Transcript) -> Result<String> {
        transcript.push(Message::user(instruction));

        let mut iteration = 0;

        loop {
            iteration += 1;
            if iteration > self.config.max_iterations {
                warn!(
                    max_iterations = self.config.max_iterations,
                    "Reasoning loop did not converge"
                );
                return Err(advisor_core::Error::ProcessingFailed(format!(
                    "no final answer after {} iterations",
                    self.config.max_iterations
                )));
            }

            let tools = self.build_tool_definitions();
            info!(
                iteration = iteration,
                model = %self.config.model,
                tool_count = tools.len(),
                conversation_id = %transcript.conversation_id(),
                "Sending request to LLM"
            );

            let mut request_builder = CompletionRequest::builder(&self.config.model)
                .messages(transcript.messages().to_vec())
                .system(
                    self.config
                        .system_prompt
                        .clone()
                        .unwrap_or_else(|| "You are a helpful assistant.".to_string()),
                )
                .max_tokens(self.config.max_tokens)
                .temperature(self.config.temperature.unwrap_or(0.7));

            if !tools.is_empty() {
                request_builder = request_builder.tools(tools);
            }

            let response = self
                .provider
                .complete(request_builder.build())
                .await
                .map_err(|e| advisor_core::Error::ProcessingFailed(e.to_string()))?;

            info!(
                stop_reason = ?response.stop_reason,
                input_tokens = response.usage.input_tokens,
                output_tokens = response.usage.output_tokens,
                "LLM response received"
            );

            transcript.push(response.message.clone());

            match response.stop_reason {
                StopReason::EndTurn => {
                    let text = response.message.text().unwrap_or("No response").to_string();
                    info!(
                        iteration = iteration,
                        response_length = text.len(),
                        "Reasoning loop completed"
                    );
                    return Ok(text);
                }

                StopReason::ToolUse => {
                    let tool_results = self.execute_tools(&response.message).await?;

                    if tool_results.is_empty() {
                        warn!("No tool results despite ToolUse stop reason");
                        return Err(advisor_core::Error::ProcessingFailed(
                            "model requested tool use but named no tools".to_string(),
                        ));
                    }

                    debug!(
                        result_count = tool_results.len(),
                        "Tool execution finished, continuing loop"
                    );

                    for result in tool_results {
                        transcript.push(result);
                    }
                }

                StopReason::MaxTokens => {
                    warn!("Hit max tokens in LLM response");
                    let text = response.message.text().unwrap_or("").to_string();
                    return Ok(text);
                }
            }
        }
    }

    /// Build tool definitions from the registry
    fn build_tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tool_registry
            .list_tools()
            .iter()
            .map(|tool| ToolDefinition::new(tool.name(), tool.description(), tool.input_schema()))
            .collect()
    }

    /// Execute the tool calls of an assistant message, sequentially
    ///
    /// Malformed invocations become error tool-results for the model to
    /// retry. A tool that fails while doing its work aborts the run.
    async fn execute_tools(&self, message: &Message) -> Result<Vec<Message>> {
        let mut results = Vec::new();

        for tool_use in message.tool_uses() {
            if let ContentBlock::ToolUse { id, name, input } = tool_use {
                info!(tool_name = %name, tool_id = %id, "Executing tool");

                let Some(tool) = self.tool_registry.get(name) else {
                    warn!(tool_name = %name, "Model named an unknown tool");
                    results.push(Message::tool_error(
                        id.clone(),
                        format!("Error: no tool named '{name}' exists"),
                    ));
                    continue;
                };

                let start_time = std::time::Instant::now();
                match tool.execute(input.clone()).await {
                    Ok(result) => {
                        let duration_ms = start_time.elapsed().as_millis() as u64;
                        let result_str = match result {
                            Value::String(s) => s,
                            other => other.to_string(),
                        };

                        info!(
                            tool_name = %name,
                            duration_ms = duration_ms,
                            result_length = result_str.len(),
                            "Tool execution succeeded"
                        );

                        results.push(Message::tool_result(id.clone(), result_str));
                    }
                    Err(advisor_core::Error::InvalidInput(reason)) => {
                        warn!(
                            tool_name = %name,
                            reason = %reason,
                            "Tool rejected its input, handing the problem back to the model"
                        );

                        results.push(Message::tool_error(id.clone(), format!("Error: {reason}")));
                    }
                    Err(e) => {
                        let duration_ms = start_time.elapsed().as_millis() as u64;
                        warn!(
                            tool_name = %name,
                            duration_ms = duration_ms,
                            error = %e,
                            "Tool execution failed, aborting the run"
                        );

                        return Err(e);
                    }
                }
            }
        }

        Ok(results)
    }
}

/// Builder for AgentExecutor
pub struct AgentExecutorBuilder {
    provider: Option<Arc<dyn LLMProvider>>,
    tool_registry: Arc<ToolRegistry>,
    config: ExecutorConfig,
}

impl AgentExecutorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            provider: None,
            tool_registry: Arc::new(ToolRegistry::new()),
            config: ExecutorConfig::default(),
        }
    }

    /// Set the LLM provider
    pub fn provider(mut self, provider: Arc<dyn LLMProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the tool registry
    pub fn tool_registry(mut self, registry: Arc<ToolRegistry>) -> Self {
        self.tool_registry = registry;
        self
    }

    /// Set the full configuration
    pub fn config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set maximum iterations
    pub fn max_iterations(mut self, max: usize) -> Self {
        self.config.max_iterations = max;
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the system prompt
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = Some(prompt.into());
        self
    }

    /// Set max tokens
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.config.max_tokens = max_tokens;
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    /// Build the executor
    pub fn build(self) -> Result<AgentExecutor> {
        let provider = self.provider.ok_or_else(|| {
            advisor_core::Error::InitializationFailed("Provider not set".to_string())
        })?;

        Ok(AgentExecutor::new(
            provider,
            self.tool_registry,
            self.config,
        ))
    }
}

impl Default for AgentExecutorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_llm::{CompletionResponse, MessageContent, Role, TokenUsage};
    use advisor_tools::Tool;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Provider that replays a fixed script of responses
    struct ScriptedProvider {
        responses: Mutex<Vec<CompletionResponse>>,
    }

    impl ScriptedProvider {
        fn new(mut responses: Vec<CompletionResponse>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl LLMProvider for ScriptedProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> advisor_llm::Result<CompletionResponse> {
            self.responses
                .lock()
                .expect("script lock")
                .pop()
                .ok_or_else(|| advisor_llm::LLMError::RequestFailed("script exhausted".into()))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn end_turn(text: &str) -> CompletionResponse {
        CompletionResponse {
            message: Message::assistant(text),
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 5,
            },
        }
    }

    fn tool_call(id: &str, name: &str, input: Value) -> CompletionResponse {
        CompletionResponse {
            message: Message {
                role: Role::Assistant,
                content: Some(MessageContent::Blocks(vec![ContentBlock::ToolUse {
                    id: id.to_string(),
                    name: name.to_string(),
                    input,
                }])),
            },
            stop_reason: StopReason::ToolUse,
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 5,
            },
        }
    }

    /// Tool that insists on an object with a "symbol" key
    struct SymbolTool;

    #[async_trait]
    impl Tool for SymbolTool {
        async fn execute(&self, params: Value) -> advisor_core::Result<Value> {
            let symbol = params
                .get("symbol")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    advisor_core::Error::InvalidInput("missing 'symbol' parameter".to_string())
                })?;
            Ok(Value::String(format!("data for {symbol}")))
        }

        fn name(&self) -> &str {
            "symbol_data"
        }

        fn description(&self) -> &str {
            "Fetch data for a ticker symbol"
        }

        fn input_schema(&self) -> Value {
            json!({"type": "object", "properties": {"symbol": {"type": "string"}}, "required": ["symbol"]})
        }
    }

    /// Tool that fails mid-execution, like a dropped connection would
    struct BrokenFetchTool;

    #[async_trait]
    impl Tool for BrokenFetchTool {
        async fn execute(&self, _params: Value) -> advisor_core::Result<Value> {
            Err(advisor_core::Error::ProcessingFailed(
                "connection reset by peer".to_string(),
            ))
        }

        fn name(&self) -> &str {
            "broken_fetch"
        }

        fn description(&self) -> &str {
            "Fetch data over a broken connection"
        }

        fn input_schema(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }
    }

    fn executor_with(
        responses: Vec<CompletionResponse>,
        registry: Arc<ToolRegistry>,
    ) -> AgentExecutor {
        AgentExecutorBuilder::new()
            .provider(Arc::new(ScriptedProvider::new(responses)))
            .tool_registry(registry)
            .max_iterations(5)
            .build()
            .expect("executor")
    }

    #[tokio::test]
    async fn test_direct_answer_without_tools() {
        let executor = executor_with(vec![end_turn("TSLA is a buy")], Arc::new(ToolRegistry::new()));
        let mut transcript = Transcript::new();

        let answer = executor
            .run("Evaluate TSLA".to_string(), &mut transcript)
            .await
            .expect("run");

        assert_eq!(answer, "TSLA is a buy");
        // instruction + assistant answer
        assert_eq!(transcript.len(), 2);
    }

    #[tokio::test]
    async fn test_tool_use_round_trip() {
        let registry = Arc::new(ToolRegistry::new());
        registry.register(Arc::new(SymbolTool));

        let executor = executor_with(
            vec![
                tool_call("call_1", "symbol_data", json!({"symbol": "TSLA"})),
                end_turn("Based on the data, TSLA is a buy"),
            ],
            registry,
        );
        let mut transcript = Transcript::new();

        let answer = executor
            .run("Evaluate TSLA".to_string(), &mut transcript)
            .await
            .expect("run");

        assert!(!answer.is_empty());
        // instruction, tool-use turn, tool result, final answer
        assert_eq!(transcript.len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_recovered() {
        let executor = executor_with(
            vec![
                tool_call("call_1", "nonexistent", json!({})),
                end_turn("Recovered and answered anyway"),
            ],
            Arc::new(ToolRegistry::new()),
        );
        let mut transcript = Transcript::new();

        let answer = executor
            .run("Evaluate TSLA".to_string(), &mut transcript)
            .await
            .expect("unknown tool must not abort the run");

        assert_eq!(answer, "Recovered and answered anyway");
    }

    #[tokio::test]
    async fn test_malformed_tool_input_is_recovered() {
        let registry = Arc::new(ToolRegistry::new());
        registry.register(Arc::new(SymbolTool));

        // Raw-string input stands in for arguments that failed to parse
        let executor = executor_with(
            vec![
                tool_call("call_1", "symbol_data", Value::String("{\"symbol\": TSLA".into())),
                end_turn("Second attempt worked"),
            ],
            registry,
        );
        let mut transcript = Transcript::new();

        let answer = executor
            .run("Evaluate TSLA".to_string(), &mut transcript)
            .await
            .expect("parse failure must not abort the run");

        assert_eq!(answer, "Second attempt worked");
    }

    #[tokio::test]
    async fn test_tool_failure_aborts_the_run() {
        let registry = Arc::new(ToolRegistry::new());
        registry.register(Arc::new(BrokenFetchTool));

        let executor = executor_with(
            vec![
                tool_call("call_1", "broken_fetch", json!({})),
                end_turn("never reached"),
            ],
            registry,
        );
        let mut transcript = Transcript::new();

        let result = executor
            .run("Evaluate TSLA".to_string(), &mut transcript)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_max_iterations_guard() {
        let mut responses = Vec::new();
        for i in 0..6 {
            responses.push(tool_call(&format!("call_{i}"), "nonexistent", json!({})));
        }

        let executor = executor_with(responses, Arc::new(ToolRegistry::new()));
        let mut transcript = Transcript::new();

        let result = executor
            .run("Evaluate TSLA".to_string(), &mut transcript)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        // Empty script: first completion call fails like an auth error would
        let executor = executor_with(vec![], Arc::new(ToolRegistry::new()));
        let mut transcript = Transcript::new();

        let result = executor
            .run("Evaluate TSLA".to_string(), &mut transcript)
            .await;

        assert!(result.is_err());
    }

    #[test]
    fn test_default_config() {
        let config = ExecutorConfig::default();
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, Some(0.7));
    }

    #[test]
    fn test_builder() {
        let builder = AgentExecutorBuilder::new()
            .model("gpt-4o")
            .max_iterations(5)
            .system_prompt("You are a hedge fund manager");

        assert_eq!(builder.config.model, "gpt-4o");
        assert_eq!(builder.config.max_iterations, 5);
        assert_eq!(
            builder.config.system_prompt,
            Some("You are a hedge fund manager".to_string())
        );
    }
}
