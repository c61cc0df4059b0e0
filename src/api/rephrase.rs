//! Rephrase endpoint handlers

use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
};
use futures::stream::{self, StreamExt};
use tracing::{error, info};

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, ApiErrorResponse, Json, RephraseDelta, RephraseRequest, RephraseResponse,
    REPHRASE_FAILED,
};
use crate::domain::rephrase::{clarity_conversation, validate_text};
use crate::domain::{DomainError, RequestOptions};

/// Terminates the fragment event stream
const STREAM_DONE: &str = "[DONE]";

/// POST /api/rephrase
pub async fn rephrase(
    State(state): State<AppState>,
    Json(request): Json<RephraseRequest>,
) -> Result<Json<RephraseResponse>, ApiError> {
    let text = validate_text(request.text.as_deref()).map_err(DomainError::from)?;

    info!(chars = text.chars().count(), "Processing rephrase request");

    let rephrased = state
        .completion
        .complete(clarity_conversation(text), RequestOptions::default())
        .await
        .map_err(|e| {
            error!(error = %e, "Rephrasing error");
            ApiError::from(e)
        })?;

    info!(chars = rephrased.chars().count(), "Rephrase completed");

    Ok(Json(RephraseResponse { rephrased }))
}

/// POST /api/rephrase/stream
///
/// Answers with `text/event-stream`: one `{"delta": ...}` event per
/// fragment, an `error` event if the completion fails midway, and a final
/// `[DONE]` event.
pub async fn rephrase_stream(
    State(state): State<AppState>,
    Json(request): Json<RephraseRequest>,
) -> Result<Response, ApiError> {
    let text = validate_text(request.text.as_deref()).map_err(DomainError::from)?;

    info!(chars = text.chars().count(), "Processing streaming rephrase request");

    let fragments = state
        .completion
        .stream_complete(clarity_conversation(text), RequestOptions::default())
        .await
        .map_err(|e| {
            error!(error = %e, "Streaming rephrase error");
            ApiError::from(e)
        })?;

    let events = fragments
        .map(fragment_event)
        .chain(stream::once(async {
            Ok::<_, axum::Error>(Event::default().data(STREAM_DONE))
        }));

    Ok(Sse::new(events)
        .keep_alive(KeepAlive::default())
        .into_response())
}

fn fragment_event(item: Result<String, DomainError>) -> Result<Event, axum::Error> {
    match item {
        Ok(delta) => Event::default().json_data(RephraseDelta { delta }),
        Err(e) => {
            error!(error = %e, "Streaming rephrase failed midway");
            Event::default()
                .event("error")
                .json_data(ApiErrorResponse {
                    error: REPHRASE_FAILED.to_string(),
                })
        }
    }
}
