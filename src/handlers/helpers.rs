use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::models::AppState;
use crate::presenter::{HtmlResultsContainer, SearchPresenter};

/// A presenter bound to the shared backend and a fresh results container.
pub fn presenter_for(state: &AppState) -> SearchPresenter<std::sync::Arc<crate::api::Backend>, HtmlResultsContainer> {
    SearchPresenter::new(state.backend.clone(), HtmlResultsContainer::new())
        .with_tracker(state.tracker.clone())
        .with_diagnostics(state.diagnostics.clone())
        .with_empty_query_policy(state.empty_query)
        .with_stale_policy(state.stale)
}

/// Run one search and hand back the container it rendered into.
pub async fn run_search(state: &AppState, query: &str) -> HtmlResultsContainer {
    let presenter = presenter_for(state);
    presenter.search(query).await;
    presenter.view().clone()
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
