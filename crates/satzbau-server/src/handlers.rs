use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use satzbau_synth::{RngSource, SentenceKind, batch_size, generate_many};
use satzbau_types::{GeneratedSentence, VocabularyEntry};
use satzbau_vocab::{parse, require_vocabulary};

#[derive(Clone)]
pub struct AppState {
    /// Vocabulary loaded at startup; served by `GET /v1/exercises/{kind}`.
    pub vocabulary: Arc<Vec<VocabularyEntry>>,
    pub max_count: usize,
    /// Fixed seed for reproducible responses.
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct ExercisesQuery {
    pub count: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SentenceView {
    pub source: String,
    pub target: String,
}

impl From<GeneratedSentence> for SentenceView {
    fn from(sentence: GeneratedSentence) -> Self {
        Self {
            source: sentence.source,
            target: sentence.target,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExercisesResponse {
    kind: String,
    count: usize,
    items: Vec<SentenceView>,
}

#[derive(Debug, Serialize)]
pub struct EntryView {
    source: String,
    target: String,
    target_plural: Option<String>,
    gender: Option<String>,
    attributes: Vec<String>,
}

impl From<&VocabularyEntry> for EntryView {
    fn from(entry: &VocabularyEntry) -> Self {
        Self {
            source: entry.source.clone(),
            target: entry.target.clone(),
            target_plural: entry.target_plural.clone(),
            gender: entry.gender.map(|g| g.to_string()),
            attributes: entry.attributes.labels(),
        }
    }
}

#[derive(Serialize)]
struct ParseResponse {
    total: usize,
    items: Vec<EntryView>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/parse", post(parse_vocabulary))
        .route(
            "/v1/exercises/{kind}",
            get(stored_exercises).post(posted_exercises),
        )
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn parse_vocabulary(body: String) -> Result<Json<ParseResponse>, ApiError> {
    let text = require_vocabulary(&body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let items: Vec<EntryView> = parse(text).iter().map(EntryView::from).collect();
    Ok(Json(ParseResponse {
        total: items.len(),
        items,
    }))
}

async fn stored_exercises(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<ExercisesQuery>,
) -> Result<Response, ApiError> {
    let kind = parse_kind(&kind)?;
    if state.vocabulary.is_empty() {
        return Err(ApiError::bad_request(
            "no vocabulary loaded; POST a vocabulary list instead",
        ));
    }
    let response = exercises(&state, kind, &state.vocabulary, params.count);
    Ok(no_store(response))
}

async fn posted_exercises(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<ExercisesQuery>,
    body: String,
) -> Result<Response, ApiError> {
    let kind = parse_kind(&kind)?;
    let text = require_vocabulary(&body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let entries = parse(text);
    let response = exercises(&state, kind, &entries, params.count);
    Ok(no_store(response))
}

fn parse_kind(raw: &str) -> Result<SentenceKind, ApiError> {
    raw.parse::<SentenceKind>()
        .map_err(|e| ApiError::bad_request(e.to_string()))
}

fn exercises(
    state: &AppState,
    kind: SentenceKind,
    entries: &[VocabularyEntry],
    requested: Option<i64>,
) -> ExercisesResponse {
    let count = batch_size(requested).min(state.max_count);
    debug!("generating {count} {kind} sentences from {} entries", entries.len());
    let sentences = match state.seed {
        Some(seed) => generate_many(kind, entries, count, &mut RngSource::seeded(seed)),
        None => generate_many(kind, entries, count, &mut RngSource::thread()),
    };
    ExercisesResponse {
        kind: kind.to_string(),
        count: sentences.len(),
        items: sentences.into_iter().map(SentenceView::from).collect(),
    }
}

fn no_store(response: ExercisesResponse) -> Response {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(response),
    )
        .into_response()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
