//! Doubt Form Routes
//!
//! `GET /` renders the empty form. `POST /` forwards the form fields to the
//! selector and embeds its output in the page unmodified.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use super::page::{render_page, PageContext};
use super::state::AppState;
use crate::observability::Event;
use crate::selector;

/// Form routes with shared state
pub fn doubt_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .with_state(state)
}

/// Submitted form fields; missing fields fall back to configured defaults
#[derive(Debug, Default, Deserialize)]
pub struct DoubtForm {
    pub branch: Option<String>,
    pub subject: Option<String>,
    pub doubt: Option<String>,
}

/// Empty form with the default branch and subject preselected
async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    state.metrics.increment_page_views();

    Html(render_page(&PageContext {
        branch: &state.config.default_branch,
        subject: &state.config.default_subject,
        response: "",
    }))
}

/// Explain the submitted doubt and re-render the form
async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DoubtForm>,
) -> Html<String> {
    state.metrics.increment_page_views();

    let branch = form
        .branch
        .unwrap_or_else(|| state.config.default_branch.clone());
    let subject = form
        .subject
        .unwrap_or_else(|| state.config.default_subject.clone());
    let doubt = form.doubt.unwrap_or_default();

    let explanation = selector::select(&branch, &subject, &doubt);
    state.metrics.record_selection(explanation.selection);
    tracing::info!(
        event = %Event::ExplainComplete,
        branch = %branch,
        subject = %subject,
        selection = explanation.selection.label(),
        question_len = explanation.question.len(),
        "explanation served"
    );
    let response = selector::render(&explanation);

    Html(render_page(&PageContext {
        branch: &branch,
        subject: &subject,
        response: &response,
    }))
}
