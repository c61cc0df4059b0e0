//! Domain layer - completion models, prompts and errors

pub mod error;
pub mod llm;
pub mod rephrase;

pub use error::DomainError;
pub use llm::{
    CompletionProvider, CompletionProviderExt, CompletionResponse, LlmStream, Message,
    MessageRole, RequestOptions, Usage,
};
