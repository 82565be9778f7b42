use std::path::Path;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path as UrlPath, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

use archive_core::{ArchiveSession, TagIndex};
use archive_types::ThreadRecord;
use archive_types::api::{SearchQuery, ThreadDetail, ThreadSummary};

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<ArchiveSession>,
}

pub fn router(state: AppState, data_dir: &Path) -> Router {
    Router::new()
        .route("/threads", get(list_threads))
        .route("/threads/{thread_id}", get(get_thread))
        .route("/channel", get(get_channel))
        .route("/status", get(get_status))
        .route("/health", get(health))
        .nest_service("/data", ServeDir::new(data_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn summarize(record: &ThreadRecord, tags: &TagIndex<'_>) -> ThreadSummary {
    let thread = &record.thread;
    ThreadSummary {
        id: thread.id.clone(),
        name: thread.name.clone(),
        created_at: record.created_at(),
        message_count: thread.message_count,
        archived: thread.thread_metadata.archived,
        locked: thread.thread_metadata.locked,
        tags: tags.resolve(thread).into_iter().map(|t| t.name.clone()).collect(),
    }
}

// ── Handlers ────────────────────────────────────────────────────────────

/// GET /threads?q=: newest first, filtered when `q` is not blank.
pub async fn list_threads(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let hits = state.session.search(&query.q);
    debug!(query = %query.q, hits = hits.len(), "Thread search");

    let tags = state.session.tag_index();
    let summaries: Vec<ThreadSummary> = hits.iter().map(|r| summarize(r, &tags)).collect();
    Json(summaries)
}

/// GET /threads/{thread_id}: one thread with all messages and its tags.
pub async fn get_thread(
    State(state): State<AppState>,
    UrlPath(thread_id): UrlPath<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let record = state.session.thread(&thread_id).ok_or(StatusCode::NOT_FOUND)?;

    let tags = state
        .session
        .tag_index()
        .resolve(&record.thread)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ThreadDetail {
        record: ThreadRecord::clone(&record),
        tags,
    }))
}

pub async fn get_channel(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let channel = state.session.channel().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(channel.clone()))
}

pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.session.status())
}

pub async fn health() -> &'static str {
    "ok"
}
