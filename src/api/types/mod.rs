//! HTTP API types

pub mod error;
pub mod json;
pub mod rephrase;

pub use error::{ApiError, ApiErrorResponse, REPHRASE_FAILED};
pub use json::Json;
pub use rephrase::{RephraseDelta, RephraseRequest, RephraseResponse};
