//! Client for a running rephrase server

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::api::types::{ApiErrorResponse, RephraseRequest, RephraseResponse, REPHRASE_FAILED};

/// Failure of a rephrase call, as shown to the user
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered with an error status
    #[error("{0}")]
    Rejected(String),

    /// The server could not be reached or answered with an unreadable body
    #[error("{0}")]
    Transport(String),
}

/// The server call made by the rephrase form
#[async_trait]
pub trait RephraseApi: Send + Sync {
    async fn rephrase(&self, text: &str) -> Result<String, ClientError>;
}

/// [`RephraseApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpRephraseApi {
    client: Client,
    endpoint: String,
}

impl HttpRephraseApi {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/rephrase", api_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl RephraseApi for HttpRephraseApi {
    async fn rephrase(&self, text: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RephraseRequest::new(text))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let message = response
                .json::<ApiErrorResponse>()
                .await
                .ok()
                .map(|body| body.error)
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| REPHRASE_FAILED.to_string());

            return Err(ClientError::Rejected(message));
        }

        response
            .json::<RephraseResponse>()
            .await
            .map(|body| body.rephrased)
            .map_err(|e| ClientError::Transport(e.to_string()))
    }
}
