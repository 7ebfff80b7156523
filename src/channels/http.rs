//! HTTP channel — JSON API over one shared conversation.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::dialogue::{Choice, DialogueController, Event, View, render};
use crate::error::TransitionError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<DialogueController>>,
}

/// Body of `POST /api/events`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRequest {
    Button { choice: Choice },
    Submit { text: String },
    Reset,
}

impl From<EventRequest> for Event {
    fn from(req: EventRequest) -> Self {
        match req {
            EventRequest::Button { choice } => Event::ButtonClicked(choice),
            EventRequest::Submit { text } => Event::FormSubmitted(text),
            EventRequest::Reset => Event::ResetRequested,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PhotoQuery {
    name: String,
}

type ApiResult = Result<Json<View>, (StatusCode, Json<serde_json::Value>)>;

/// Build the Axum router with the dialogue REST routes.
pub fn dialogue_routes(controller: Arc<Mutex<DialogueController>>, max_photo_bytes: usize) -> Router {
    let state = AppState { controller };

    Router::new()
        .route("/health", get(health))
        .route("/api/session", get(get_session))
        .route("/api/events", post(post_event))
        .route("/api/photo", post(post_photo))
        .layer(DefaultBodyLimit::max(max_photo_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "lifeline-assist"
    }))
}

// ── Dialogue ────────────────────────────────────────────────────────────

/// GET /api/session
///
/// A render pass: greets on first open, then returns the full view.
async fn get_session(State(state): State<AppState>) -> Json<View> {
    let mut controller = state.controller.lock().await;
    controller.open();
    Json(render(controller.session()))
}

/// POST /api/events
async fn post_event(State(state): State<AppState>, Json(req): Json<EventRequest>) -> ApiResult {
    let event = Event::from(req);
    debug!(event = %event.describe(), "Event received over HTTP");
    apply(&state, event).await
}

/// POST /api/photo?name=<file>
///
/// The request body is the raw image bytes.
async fn post_photo(
    State(state): State<AppState>,
    Query(query): Query<PhotoQuery>,
    body: Bytes,
) -> ApiResult {
    info!(name = %query.name, size = body.len(), "Photo received over HTTP");
    apply(
        &state,
        Event::FileUploaded {
            name: query.name,
            data: body.to_vec(),
        },
    )
    .await
}

async fn apply(state: &AppState, event: Event) -> ApiResult {
    let mut controller = state.controller.lock().await;
    // Every interaction is a render pass; greet before handling
    controller.open();
    let result = match event {
        Event::ResetRequested => Ok(controller.reset()),
        event => controller.handle(event),
    };
    match result {
        Ok(_) => Ok(Json(render(controller.session()))),
        Err(e) => Err(rejection(&e)),
    }
}

fn rejection(error: &TransitionError) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({"error": error.to_string()})),
    )
}
