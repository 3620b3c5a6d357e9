use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::diagnostics::DiagnosticsPage;
use crate::models::AppState;

#[derive(Deserialize, Debug)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default)]
    pub per_page: usize,
}

fn default_page() -> usize {
    1
}

/// `GET /diagnostics`: recorded search failures, newest first.
pub async fn diagnostics_get(State(state): State<AppState>, Query(p): Query<PageParams>) -> Json<DiagnosticsPage> {
    Json(state.diagnostics.list(p.page, p.per_page))
}
