//! Rephrase endpoint request/response bodies

use serde::{Deserialize, Serialize};

/// Body of `POST /api/rephrase` and `POST /api/rephrase/stream`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephraseRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RephraseRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Successful reply of `POST /api/rephrase`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephraseResponse {
    pub rephrased: String,
}

/// Data of one fragment event on `POST /api/rephrase/stream`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephraseDelta {
    pub delta: String,
}
