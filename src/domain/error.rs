use thiserror::Error;

/// Core domain errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("GPT API request failed ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to parse completion response: {message}")]
    Parse { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Whether the error originates from user input rather than the completion service
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
