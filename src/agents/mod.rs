//! AI-powered extraction agents.
//!
//! Agents turn unstructured input (card screenshots) into structured player
//! data using a vision-capable model. All agents implement the `Agent` trait.

pub mod backend;
pub mod card_scanner;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::models::Confidence;

/// Errors that can occur during agent execution.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("AI backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("AI response unparseable: {0}")]
    ResponseParseError(String),

    #[error("AI refused to extract (content unclear): {0}")]
    ExtractionRefused(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgentError {
    /// Whether trying the same request again could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AgentError::BackendUnavailable(_)
                | AgentError::ResponseParseError(_)
                | AgentError::Timeout(_)
                | AgentError::RateLimited(_)
        )
    }
}

/// Retry policy for agents.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (0-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = self.backoff_multiplier.powi(attempt as i32);
        Duration::from_millis((self.initial_delay_ms as f64 * factor) as u64)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 1000,
            backoff_multiplier: 2.0,
        }
    }
}

/// Output wrapper with confidence and metadata.
#[derive(Debug, Clone)]
pub struct AgentOutput<T> {
    pub data: T,
    pub confidence: Confidence,
    pub extraction_notes: Vec<String>,
}

impl<T> AgentOutput<T> {
    pub fn new(data: T, confidence: Confidence) -> Self {
        Self {
            data,
            confidence,
            extraction_notes: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.extraction_notes = notes;
        self
    }
}

/// Core trait for all AI agents.
#[async_trait]
pub trait Agent {
    type Input;
    type Output;

    /// Agent identifier for logging and metrics.
    fn name(&self) -> &'static str;

    /// Execute the agent's task.
    async fn execute(&self, input: Self::Input) -> Result<Self::Output, AgentError>;

    /// Retry policy for this agent.
    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
    }
}

/// Run an agent, retrying retryable failures with exponential backoff.
pub async fn execute_with_retry<A>(agent: &A, input: A::Input) -> Result<A::Output, AgentError>
where
    A: Agent + Sync,
    A::Input: Clone + Send,
{
    let policy = agent.retry_policy();
    retry(&policy, agent.name(), || agent.execute(input.clone())).await
}

async fn retry<T, F, Fut>(policy: &RetryPolicy, name: &str, mut op: F) -> Result<T, AgentError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AgentError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < policy.max_retries => {
                let delay = match e {
                    AgentError::RateLimited(secs) => {
                        Duration::from_secs(secs).max(policy.delay_for(attempt))
                    }
                    _ => policy.delay_for(attempt),
                };
                warn!(
                    "{} failed (attempt {}/{}): {}. Retrying in {:?}",
                    name,
                    attempt + 1,
                    policy.max_retries + 1,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Strip markdown fences or surrounding prose from a model reply, leaving the
/// outermost JSON object.
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// At most `max_chars` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
