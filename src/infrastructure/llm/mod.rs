//! Completion service client implementations

mod http_client;
mod openai;
mod sse;

pub use http_client::{
    upstream_error_message, ByteStream, HttpClient, HttpClientTrait, GENERIC_UPSTREAM_ERROR,
};
pub use openai::{OpenAiClient, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
pub use sse::{decode_fragment, fragment_stream, Frame, FrameDecoder};
