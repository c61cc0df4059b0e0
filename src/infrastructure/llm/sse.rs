//! Decoding of `data:`-framed event streams into completion fragments

use std::collections::VecDeque;

use futures::{stream, StreamExt};
use serde::Deserialize;
use tracing::{debug, warn};

use super::http_client::ByteStream;
use crate::domain::{DomainError, LlmStream};

const DONE_SENTINEL: &str = "[DONE]";

/// One decoded event-stream line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Data(String),
    Done,
}

/// Splits a byte stream into frames, carrying partial lines across chunks
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: Vec<u8>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a transport chunk and return every frame it completes
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Frame> {
        self.buffer.extend_from_slice(chunk);

        let mut frames = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(frame) = parse_line(&line) {
                frames.push(frame);
            }
        }

        frames
    }

    /// Flush a trailing line that was not newline-terminated
    pub fn finish(&mut self) -> Option<Frame> {
        let line = std::mem::take(&mut self.buffer);
        parse_line(&line)
    }
}

fn parse_line(raw: &[u8]) -> Option<Frame> {
    let line = String::from_utf8_lossy(raw);
    let line = line.trim_end_matches(['\n', '\r']);

    let data = line.strip_prefix("data:")?;
    let data = data.strip_prefix(' ').unwrap_or(data);

    if data.trim() == DONE_SENTINEL {
        Some(Frame::Done)
    } else {
        Some(Frame::Data(data.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
}

#[derive(Debug, Deserialize)]
struct StreamDelta {
    content: Option<String>,
}

/// Decode the text fragment carried by one data frame
///
/// Returns `Ok(None)` for frames that are well formed but carry no text,
/// such as the initial role-only delta or a usage-only chunk.
pub fn decode_fragment(data: &str) -> Result<Option<String>, DomainError> {
    let chunk: StreamChunk = serde_json::from_str(data)
        .map_err(|e| DomainError::parse(format!("Invalid stream chunk: {}", e)))?;

    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content)
        .filter(|content| !content.is_empty()))
}

struct FragmentState {
    bytes: ByteStream,
    decoder: FrameDecoder,
    pending: VecDeque<Frame>,
    eof: bool,
    finished: bool,
}

/// Turn a raw event-stream body into a stream of text fragments
///
/// The stream ends on the `[DONE]` sentinel or when the body ends. Frames
/// that fail to decode are logged and skipped. A transport error is yielded
/// once and ends the stream. Dropping the stream drops the body.
pub fn fragment_stream(bytes: ByteStream) -> LlmStream {
    let state = FragmentState {
        bytes,
        decoder: FrameDecoder::new(),
        pending: VecDeque::new(),
        eof: false,
        finished: false,
    };

    let fragments = stream::unfold(state, |mut state| async move {
        loop {
            if state.finished {
                return None;
            }

            while let Some(frame) = state.pending.pop_front() {
                match frame {
                    Frame::Done => {
                        debug!("Completion stream finished");
                        state.finished = true;
                        return None;
                    }
                    Frame::Data(data) => match decode_fragment(&data) {
                        Ok(Some(fragment)) => return Some((Ok(fragment), state)),
                        Ok(None) => {}
                        Err(e) => {
                            warn!(error = %e, frame = %data, "Skipping malformed stream frame")
                        }
                    },
                }
            }

            if state.eof {
                state.finished = true;
                return None;
            }

            match state.bytes.next().await {
                Some(Ok(chunk)) => {
                    let frames = state.decoder.push(&chunk);
                    state.pending.extend(frames);
                }
                Some(Err(e)) => {
                    state.finished = true;
                    return Some((Err(e), state));
                }
                None => {
                    state.eof = true;
                    state.pending.extend(state.decoder.finish());
                }
            }
        }
    });

    Box::pin(fragments)
}
