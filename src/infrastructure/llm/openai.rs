use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use super::http_client::HttpClientTrait;
use super::sse::fragment_stream;
use crate::domain::llm::{
    CompletionChoice, CompletionProvider, CompletionResponse, FinishReason, LlmStream, Message,
    RequestOptions, Usage,
};
use crate::domain::DomainError;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Client for the OpenAI chat completions API
pub struct OpenAiClient<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    model: String,
    base_url: String,
}

impl<C: HttpClientTrait> fmt::Debug for OpenAiClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("client", &self.client)
            .field("auth_header", &"Bearer [REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl<C: HttpClientTrait> OpenAiClient<C> {
    pub fn new(client: C, api_key: impl AsRef<str>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_OPENAI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl AsRef<str>,
        base_url: impl Into<String>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_key.as_ref());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            auth_header,
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_request(
        &self,
        messages: &[Message],
        options: &RequestOptions,
        stream: bool,
    ) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": options.effective_temperature(),
            "top_p": options.effective_top_p(),
            "frequency_penalty": options.effective_frequency_penalty(),
            "presence_penalty": options.effective_presence_penalty(),
        });

        if let Some(max_tokens) = options.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        if stream {
            body["stream"] = serde_json::json!(true);
        }

        body
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    /// Send a conversation and return the whole decoded reply, usage included
    pub async fn generate(
        &self,
        messages: &[Message],
        options: &RequestOptions,
    ) -> Result<CompletionResponse, DomainError> {
        let url = self.chat_completions_url();
        let body = self.build_request(messages, options, false);

        debug!(model = %self.model, messages = messages.len(), "Sending completion request");

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        parse_response(response)
    }
}

#[async_trait]
impl<C: HttpClientTrait> CompletionProvider for OpenAiClient<C> {
    async fn complete(
        &self,
        messages: Vec<Message>,
        options: RequestOptions,
    ) -> Result<String, DomainError> {
        let response = self.generate(&messages, &options).await?;

        if let Some(usage) = response.usage {
            debug!(
                response_id = %response.id,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Completion usage"
            );
        }

        response.into_content()
    }

    async fn stream_complete(
        &self,
        messages: Vec<Message>,
        options: RequestOptions,
    ) -> Result<LlmStream, DomainError> {
        let url = self.chat_completions_url();
        let body = self.build_request(&messages, &options, true);

        info!(model = %self.model, messages = messages.len(), "Starting streaming completion");

        let byte_stream = self
            .client
            .post_json_stream(&url, self.headers(), &body)
            .await?;

        Ok(fragment_stream(byte_stream))
    }
}

fn parse_response(json: serde_json::Value) -> Result<CompletionResponse, DomainError> {
    let response: OpenAiResponse = serde_json::from_value(json)
        .map_err(|e| DomainError::parse(format!("Unexpected response shape: {}", e)))?;

    let choices = response
        .choices
        .into_iter()
        .enumerate()
        .map(|(position, choice)| CompletionChoice {
            index: choice.index.unwrap_or(position as u32),
            content: choice.message.content,
            finish_reason: choice.finish_reason.as_deref().map(FinishReason::parse),
        })
        .collect();

    Ok(CompletionResponse {
        id: response.id,
        model: response.model,
        choices,
        usage: response.usage.and_then(parse_usage),
    })
}

/// Usage is informational; a block that does not decode is dropped.
fn parse_usage(value: serde_json::Value) -> Option<Usage> {
    let usage: OpenAiUsage = serde_json::from_value(value).ok()?;

    let prompt_tokens = usage.prompt_tokens.unwrap_or_default();
    let completion_tokens = usage.completion_tokens.unwrap_or_default();

    Some(match usage.total_tokens {
        Some(total_tokens) => Usage {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        },
        None => Usage::new(prompt_tokens, completion_tokens),
    })
}

// OpenAI API types

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    model: String,
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    index: Option<u32>,
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(default)]
    prompt_tokens: Option<u32>,
    #[serde(default)]
    completion_tokens: Option<u32>,
    #[serde(default)]
    total_tokens: Option<u32>,
}
