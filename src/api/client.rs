use async_trait::async_trait;
use colored::*;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

use crate::api::models::{AssistantReply, ChatResponse, RequestBody};
use crate::api::response::parse_reply;
use crate::config::Config;
use crate::error::{MapChatError, Result};
use crate::models::Message;

/// The LLM boundary: one ordered message list plus tool declarations in,
/// exactly one assistant reply out. The orchestrator only depends on this
/// trait, so tests drive it with a scripted implementation.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, messages: &[Message], tools: &[Value]) -> Result<AssistantReply>;
}

/// Production client for an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    verbose: bool,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.openai_api_key)).map_err(|e| {
                MapChatError::ConfigError(format!("Invalid authorization header: {}", e))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint.clone(),
            model: config.model.clone(),
            verbose: config.verbose,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, messages: &[Message], tools: &[Value]) -> Result<AssistantReply> {
        let request_body = RequestBody {
            model: self.model.clone(),
            messages: messages.to_vec(),
            tools: if tools.is_empty() {
                None
            } else {
                Some(tools.to_vec())
            },
        };

        if self.verbose {
            eprintln!(
                "{}",
                format!(
                    "[llm] Requesting completion ({} messages, model {})",
                    messages.len(),
                    self.model
                )
                .dimmed()
            );
        }

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MapChatError::ApiError { status, message });
        }

        let parsed: ChatResponse = response.json().await?;
        parse_reply(parsed)
    }
}
