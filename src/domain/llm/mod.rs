//! Completion domain models and traits

mod message;
mod provider;
mod request;
mod response;

pub use message::{Message, MessageRole};
pub use provider::{CompletionProvider, CompletionProviderExt, LlmStream};
pub use request::{
    RequestOptions, DEFAULT_FREQUENCY_PENALTY, DEFAULT_PRESENCE_PENALTY, DEFAULT_TEMPERATURE,
    DEFAULT_TOP_P,
};
pub use response::{CompletionChoice, CompletionResponse, FinishReason, Usage};

#[cfg(test)]
pub use provider::MockCompletionProvider;
