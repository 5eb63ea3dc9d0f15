//! JSON API Routes
//!
//! Catalog lookups and a JSON front end to the selector.
//!
//! # Endpoints
//!
//! - `GET /catalog` - branch→subjects and subject→samples tables
//! - `GET /branches/:branch/subjects` - subjects of one branch
//! - `GET /subjects/:subject/samples` - sample doubts of one subject
//! - `POST /explain` - select and render an explanation

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::catalog::{catalog, CatalogView, Template};
use crate::observability::Event;
use crate::selector::{self, Selection};

/// API routes with shared state
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/catalog", get(catalog_handler))
        .route("/branches/:branch/subjects", get(subjects_handler))
        .route("/subjects/:subject/samples", get(samples_handler))
        .route("/explain", post(explain_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize, Deserialize)]
pub struct SubjectsResponse {
    pub branch: String,
    pub subjects: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SamplesResponse {
    pub subject: String,
    pub samples: Vec<String>,
}

/// Explain request; omitted branch/subject use the configured defaults
#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub branch: Option<String>,
    pub subject: Option<String>,
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub html: String,
    pub selection: Selection,
    pub template: Template,
}

// ==================
// Handlers
// ==================

async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<CatalogView> {
    state.metrics.increment_api_requests();
    Json(catalog().view())
}

async fn subjects_handler(
    State(state): State<Arc<AppState>>,
    Path(branch): Path<String>,
) -> ApiResult<Json<SubjectsResponse>> {
    state.metrics.increment_api_requests();

    let Some(entry) = catalog().branch(&branch) else {
        state.metrics.increment_catalog_misses();
        tracing::debug!(event = %Event::CatalogMiss, branch = %branch);
        return Err(ApiError::BranchNotFound(branch));
    };

    Ok(Json(SubjectsResponse {
        subjects: entry.subject_names().map(str::to_string).collect(),
        branch,
    }))
}

async fn samples_handler(
    State(state): State<Arc<AppState>>,
    Path(subject): Path<String>,
) -> ApiResult<Json<SamplesResponse>> {
    state.metrics.increment_api_requests();

    let Some(samples) = catalog().sample_doubts(&subject) else {
        state.metrics.increment_catalog_misses();
        tracing::debug!(event = %Event::CatalogMiss, subject = %subject);
        return Err(ApiError::SubjectNotFound(subject));
    };

    Ok(Json(SamplesResponse {
        samples: samples.iter().map(|s| s.to_string()).collect(),
        subject,
    }))
}

/// Unknown branch or subject is not an error; it yields generic content
async fn explain_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExplainRequest>,
) -> Json<ExplainResponse> {
    state.metrics.increment_api_requests();

    let branch = request
        .branch
        .unwrap_or_else(|| state.config.default_branch.clone());
    let subject = request
        .subject
        .unwrap_or_else(|| state.config.default_subject.clone());

    let explanation = selector::select(&branch, &subject, &request.question);
    state.metrics.record_selection(explanation.selection);
    tracing::info!(
        event = %Event::ExplainComplete,
        branch = %branch,
        subject = %subject,
        selection = explanation.selection.label(),
        "api explanation served"
    );

    Json(ExplainResponse {
        html: selector::render(&explanation),
        selection: explanation.selection,
        template: explanation.template,
    })
}
