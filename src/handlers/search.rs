use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::helpers::{render_template, run_search};
use crate::models::AppState;
use crate::presenter::{EmptyQueryPolicy, ResultsKind, StalePolicy};
use crate::templates::SearchPageTemplate;

#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// `GET /`: the search page. With `?query=` the results are rendered
/// server-side into the container before the page is sent.
pub async fn search_page(State(state): State<AppState>, Query(params): Query<SearchParams>) -> impl IntoResponse {
    let results_html = match params.query.as_deref() {
        Some(q) => run_search(&state, q).await.html(),
        None => String::new(),
    };
    render_template(SearchPageTemplate {
        base_url: &state.public_base_url,
        backend_hostname: state.backend_hostname(),
        mock_mode: state.backend.is_mock(),
        query: params.query.as_deref().unwrap_or_default(),
        results_html: &results_html,
        discard_stale: state.stale == StalePolicy::Discard,
        ignore_empty: state.empty_query == EmptyQueryPolicy::Ignore,
    })
}

/// `GET /results?query=`: just the container's inner HTML, or 204 when the
/// search was ignored and the container must keep what it shows.
pub async fn results_fragment(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = params.query.unwrap_or_default();
    let container = run_search(&state, &query).await;
    if container.kind() == ResultsKind::Blank {
        return StatusCode::NO_CONTENT.into_response();
    }
    Html(container.html()).into_response()
}
