//! AI backend abstraction.
//!
//! Supports multiple vision-capable backends:
//! - Local: Ollama (default)
//! - Remote: Anthropic (feature-flagged)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::AgentError;

/// AI backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "backend")]
pub enum AiBackendConfig {
    /// Local Ollama instance
    #[serde(rename = "ollama")]
    Ollama {
        base_url: String,
        model: String,
        #[serde(default = "default_timeout")]
        timeout_seconds: u64,
    },

    /// Anthropic API (requires feature flag)
    #[cfg(feature = "remote-ai")]
    #[serde(rename = "anthropic")]
    Anthropic {
        api_key_env: String,
        model: String,
        #[serde(default = "default_timeout")]
        timeout_seconds: u64,
    },
}

fn default_timeout() -> u64 {
    120
}

impl Default for AiBackendConfig {
    fn default() -> Self {
        AiBackendConfig::Ollama {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2-vision".to_string(),
            timeout_seconds: 120,
        }
    }
}

/// An inline image sent alongside a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    /// e.g. "image/png"
    pub mime_type: String,
    /// Base64 without a data-URL prefix
    pub data: String,
}

/// A message in a conversation with the AI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageAttachment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
            images: Vec::new(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            images: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            images: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<ImageAttachment>) -> Self {
        self.images = images;
        self
    }
}

/// Request to the AI backend.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub json_mode: bool,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: None,
            max_tokens: None,
            json_mode: false,
        }
    }

    pub fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// Response from the AI backend.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub model: String,
    pub tokens_used: Option<TokenUsage>,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Trait for AI backends.
#[async_trait]
pub trait AiBackend: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &'static str;

    /// Send a chat completion request.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, AgentError>;

    /// Check if the backend is available.
    async fn health_check(&self) -> Result<bool, AgentError>;
}

/// Ollama backend implementation.
pub struct OllamaBackend {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout_seconds: u64,
}

fn http_client(timeout_seconds: u64) -> Result<reqwest::Client, AgentError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| AgentError::BackendUnavailable(format!("Failed to build HTTP client: {}", e)))
}

fn send_error(error: reqwest::Error, timeout_seconds: u64) -> AgentError {
    if error.is_timeout() {
        AgentError::Timeout(timeout_seconds)
    } else {
        AgentError::BackendUnavailable(error.to_string())
    }
}

impl OllamaBackend {
    pub fn new(base_url: String, model: String, timeout_seconds: u64) -> Result<Self, AgentError> {
        Ok(Self {
            client: http_client(timeout_seconds)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            timeout_seconds,
        })
    }
}

/// Ollama API request format.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaMessage {
    role: String,
    content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<String>,
}

#[derive(Debug, Serialize, Default)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Ollama API response format.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaResponseMessage,
    model: String,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

#[async_trait]
impl AiBackend for OllamaBackend {
    fn name(&self) -> &'static str {
        "ollama"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, AgentError> {
        let url = format!("{}/api/chat", self.base_url);

        let messages: Vec<OllamaMessage> = request
            .messages
            .into_iter()
            .map(|m| OllamaMessage {
                role: match m.role {
                    MessageRole::System => "system".to_string(),
                    MessageRole::User => "user".to_string(),
                    MessageRole::Assistant => "assistant".to_string(),
                },
                content: m.content,
                images: m.images.into_iter().map(|i| i.data).collect(),
            })
            .collect();

        let ollama_request = OllamaRequest {
            model: self.model.clone(),
            messages,
            stream: false,
            format: if request.json_mode {
                Some("json".to_string())
            } else {
                None
            },
            options: OllamaOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            },
        };

        debug!("Sending request to Ollama: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&ollama_request)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout_seconds))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::BackendUnavailable(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| AgentError::ResponseParseError(e.to_string()))?;

        let tokens_used = match (
            ollama_response.prompt_eval_count,
            ollama_response.eval_count,
        ) {
            (Some(prompt), Some(completion)) => Some(TokenUsage {
                prompt_tokens: prompt,
                completion_tokens: completion,
                total_tokens: prompt + completion,
            }),
            _ => None,
        };

        Ok(ChatResponse {
            content: ollama_response.message.content,
            model: ollama_response.model,
            tokens_used,
        })
    }

    async fn health_check(&self) -> Result<bool, AgentError> {
        let url = format!("{}/api/tags", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                warn!("Ollama health check failed: {}", e);
                Ok(false)
            }
        }
    }
}

// --- Anthropic backend ---

#[cfg(feature = "remote-ai")]
#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[cfg(feature = "remote-ai")]
#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: Vec<AnthropicBlock>,
}

#[cfg(feature = "remote-ai")]
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AnthropicBlock {
    Text { text: String },
    Image { source: AnthropicImageSource },
}

#[cfg(feature = "remote-ai")]
#[derive(Debug, Serialize)]
struct AnthropicImageSource {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: String,
    data: String,
}

#[cfg(feature = "remote-ai")]
impl AnthropicMessage {
    fn from_chat(role: &str, message: ChatMessage) -> Self {
        let mut content: Vec<AnthropicBlock> = message
            .images
            .into_iter()
            .map(|image| AnthropicBlock::Image {
                source: AnthropicImageSource {
                    kind: "base64",
                    media_type: image.mime_type,
                    data: image.data,
                },
            })
            .collect();
        content.push(AnthropicBlock::Text {
            text: message.content,
        });

        Self {
            role: role.to_string(),
            content,
        }
    }
}

#[cfg(feature = "remote-ai")]
#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContent>,
    model: String,
    #[serde(default)]
    usage: Option<AnthropicUsage>,
}

#[cfg(feature = "remote-ai")]
#[derive(Debug, Deserialize)]
struct AnthropicContent {
    #[serde(default)]
    text: String,
}

#[cfg(feature = "remote-ai")]
#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

/// Anthropic API backend implementation.
#[cfg(feature = "remote-ai")]
pub struct AnthropicBackend {
    client: reqwest::Client,
    model: String,
    api_key: String,
    timeout_seconds: u64,
}

#[cfg(feature = "remote-ai")]
impl AnthropicBackend {
    pub fn new(api_key: String, model: String, timeout_seconds: u64) -> Result<Self, AgentError> {
        Ok(Self {
            client: http_client(timeout_seconds)?,
            model,
            api_key,
            timeout_seconds,
        })
    }

    pub fn from_env(api_key_env: &str, model: String, timeout_seconds: u64) -> Result<Self, AgentError> {
        let api_key = std::env::var(api_key_env).map_err(|_| {
            AgentError::BackendUnavailable(format!("{} env var not set", api_key_env))
        })?;
        Self::new(api_key, model, timeout_seconds)
    }
}

#[cfg(feature = "remote-ai")]
#[async_trait]
impl AiBackend for AnthropicBackend {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, AgentError> {
        let url = "https://api.anthropic.com/v1/messages";

        // Extract system messages into top-level system field
        let mut system_parts: Vec<String> = Vec::new();
        let mut messages: Vec<AnthropicMessage> = Vec::new();

        for msg in request.messages {
            match msg.role {
                MessageRole::System => {
                    system_parts.push(msg.content);
                }
                MessageRole::User => {
                    messages.push(AnthropicMessage::from_chat("user", msg));
                }
                MessageRole::Assistant => {
                    messages.push(AnthropicMessage::from_chat("assistant", msg));
                }
            }
        }

        // For json_mode, append instruction since Anthropic has no native JSON mode flag
        if request.json_mode {
            system_parts.push(
                "IMPORTANT: You must respond with valid JSON only. No other text.".to_string(),
            );
        }

        let system = if system_parts.is_empty() {
            None
        } else {
            Some(system_parts.join("\n\n"))
        };

        let max_tokens = request.max_tokens.unwrap_or(4096);

        let anthropic_request = AnthropicRequest {
            model: self.model.clone(),
            max_tokens,
            messages,
            system,
            temperature: request.temperature,
        };

        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout_seconds))?;

        // The agent retry loop waits out the retry-after delay
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let wait_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(30);
            return Err(AgentError::RateLimited(wait_secs));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::BackendUnavailable(format!(
                "Anthropic API returned {}: {}",
                status, body
            )));
        }

        let body_text = response
            .text()
            .await
            .map_err(|e| AgentError::ResponseParseError(e.to_string()))?;

        let anthropic_response: AnthropicResponse =
            serde_json::from_str(&body_text).map_err(|e| {
                warn!(
                    "Failed to parse Anthropic response: {}. Body: {}",
                    e,
                    super::truncate_chars(&body_text, 500)
                );
                AgentError::ResponseParseError(format!("Invalid JSON from Anthropic: {}", e))
            })?;

        let content = anthropic_response
            .content
            .into_iter()
            .map(|c| c.text)
            .collect::<Vec<_>>()
            .join("");

        let tokens_used = anthropic_response.usage.map(|u| TokenUsage {
            prompt_tokens: u.input_tokens,
            completion_tokens: u.output_tokens,
            total_tokens: u.input_tokens + u.output_tokens,
        });

        Ok(ChatResponse {
            content,
            model: anthropic_response.model,
            tokens_used,
        })
    }

    async fn health_check(&self) -> Result<bool, AgentError> {
        // Anthropic has no health endpoint; assume available if key is set
        Ok(true)
    }
}

/// Create an AI backend from configuration.
pub fn create_backend(config: &AiBackendConfig) -> Result<Box<dyn AiBackend>, AgentError> {
    match config {
        AiBackendConfig::Ollama {
            base_url,
            model,
            timeout_seconds,
        } => Ok(Box::new(OllamaBackend::new(
            base_url.clone(),
            model.clone(),
            *timeout_seconds,
        )?)),
        #[cfg(feature = "remote-ai")]
        AiBackendConfig::Anthropic {
            api_key_env,
            model,
            timeout_seconds,
        } => Ok(Box::new(AnthropicBackend::from_env(
            api_key_env,
            model.clone(),
            *timeout_seconds,
        )?)),
    }
}

/// Mock backend for testing. Replays one canned response and records the
/// requests it receives.
#[cfg(test)]
pub struct MockBackend {
    response: String,
    requests: std::sync::Mutex<Vec<ChatRequest>>,
}

#[cfg(test)]
impl MockBackend {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl AiBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, AgentError> {
        self.requests.lock().unwrap().push(request);
        Ok(ChatResponse {
            content: self.response.clone(),
            model: "mock".to_string(),
            tokens_used: None,
        })
    }

    async fn health_check(&self) -> Result<bool, AgentError> {
        Ok(true)
    }
}
