//! Rephrase form state machine
//!
//! Holds the same four pieces of state as the browser page: input, result,
//! error and a loading flag that blocks re-submission.

use thiserror::Error;

use super::client::{ClientError, RephraseApi};

pub const EMPTY_INPUT_ERROR: &str = "Please enter some text to rephrase";

/// What the form currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState<'a> {
    Idle,
    Loading,
    Error(&'a str),
    Success(&'a str),
}

/// Reasons a submit did not reach the server
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a rephrase request is already in progress")]
    Busy,

    #[error("{}", EMPTY_INPUT_ERROR)]
    EmptyInput,
}

#[derive(Debug, Default)]
pub struct RephraseForm {
    input: String,
    result: String,
    error: String,
    loading: bool,
}

impl RephraseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn state(&self) -> FormState<'_> {
        if self.loading {
            FormState::Loading
        } else if !self.error.is_empty() {
            FormState::Error(&self.error)
        } else if !self.result.is_empty() {
            FormState::Success(&self.result)
        } else {
            FormState::Idle
        }
    }

    /// Start a submission, returning the trimmed text to send
    ///
    /// Empty input sets the validation error locally. On success the
    /// previous error is cleared and the form enters the loading state.
    pub fn begin_submit(&mut self) -> Result<String, SubmitRejected> {
        if self.loading {
            return Err(SubmitRejected::Busy);
        }

        let text = self.input.trim();

        if text.is_empty() {
            self.error = EMPTY_INPUT_ERROR.to_string();
            return Err(SubmitRejected::EmptyInput);
        }

        let text = text.to_string();
        self.error.clear();
        self.loading = true;

        Ok(text)
    }

    /// Record the outcome of the server call and leave the loading state
    pub fn finish_submit(&mut self, outcome: Result<String, ClientError>) {
        match outcome {
            Ok(rephrased) => self.result = rephrased,
            Err(e) => self.error = e.to_string(),
        }

        self.loading = false;
    }

    /// Run a whole submission against `api`
    pub async fn submit<A>(&mut self, api: &A) -> Result<(), SubmitRejected>
    where
        A: RephraseApi + ?Sized,
    {
        let text = self.begin_submit()?;
        let outcome = api.rephrase(&text).await;
        self.finish_submit(outcome);

        Ok(())
    }
}
