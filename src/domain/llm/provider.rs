use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
#[cfg(test)]
use mockall::automock;

use super::{Message, RequestOptions};
use crate::domain::rephrase;
use crate::domain::DomainError;

/// Stream of text fragments produced by a streaming completion
pub type LlmStream = Pin<Box<dyn Stream<Item = Result<String, DomainError>> + Send>>;

/// Trait for completion backends (the OpenAI wrapper, or a mock in tests)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a conversation and return the text of the first choice
    async fn complete(
        &self,
        messages: Vec<Message>,
        options: RequestOptions,
    ) -> Result<String, DomainError>;

    /// Send a conversation and return its reply as incremental fragments
    async fn stream_complete(
        &self,
        messages: Vec<Message>,
        options: RequestOptions,
    ) -> Result<LlmStream, DomainError>;
}

/// Convenience calls layered on [`CompletionProvider::complete`]
#[async_trait]
pub trait CompletionProviderExt: CompletionProvider {
    /// Complete a single prompt sent as one user message
    async fn simple_completion(
        &self,
        prompt: &str,
        options: RequestOptions,
    ) -> Result<String, DomainError> {
        self.complete(vec![Message::user(prompt)], options).await
    }

    /// Complete a system + user conversation
    async fn chat_with_system(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: RequestOptions,
    ) -> Result<String, DomainError> {
        let messages = vec![Message::system(system_prompt), Message::user(user_prompt)];
        self.complete(messages, options).await
    }

    /// Rephrase `text` in the given style (see [`rephrase::DEFAULT_STYLE`])
    async fn rephrase(
        &self,
        text: &str,
        style: &str,
        options: RequestOptions,
    ) -> Result<String, DomainError> {
        let system_prompt = rephrase::style_system_prompt(style);
        let user_prompt = rephrase::user_prompt(text);

        self.chat_with_system(&system_prompt, &user_prompt, options)
            .await
    }
}

impl<T: CompletionProvider + ?Sized> CompletionProviderExt for T {}
