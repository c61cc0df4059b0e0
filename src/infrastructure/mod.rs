//! Infrastructure layer - outbound HTTP clients and process setup

pub mod llm;
pub mod logging;
