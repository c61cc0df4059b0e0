//! Rephrasing prompts and input validation

use thiserror::Error;

use super::llm::Message;
use super::DomainError;

/// Style used when the caller does not pick one
pub const DEFAULT_STYLE: &str = "professional";

/// System instruction used by the HTTP rephrase endpoints
pub const CLARITY_SYSTEM_PROMPT: &str = "You are a helpful assistant that rephrases text \
    while maintaining its meaning. Make the text more clear and professional.";

/// Errors raised for rejected rephrase input
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RephraseValidationError {
    #[error("Text is required")]
    MissingText,
}

impl From<RephraseValidationError> for DomainError {
    fn from(err: RephraseValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Validate the text submitted for rephrasing
///
/// Missing, empty, and whitespace-only text are all rejected. The text is
/// returned untouched otherwise.
pub fn validate_text(text: Option<&str>) -> Result<&str, RephraseValidationError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(RephraseValidationError::MissingText),
    }
}

pub fn style_system_prompt(style: &str) -> String {
    format!(
        "You are a skilled writer that rephrases text in a {} style \
         while maintaining the original meaning.",
        style
    )
}

pub fn user_prompt(text: &str) -> String {
    format!("Please rephrase the following text: {}", text)
}

/// Two-message conversation asking for a clearer, more professional version of `text`
pub fn clarity_conversation(text: &str) -> Vec<Message> {
    vec![
        Message::system(CLARITY_SYSTEM_PROMPT),
        Message::user(user_prompt(text)),
    ]
}
