use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::models::{AppState, ProductId};
use crate::render::GENERIC_ERROR_TEXT;

#[derive(Deserialize, Debug, Default)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /suggest?q=`: autocomplete names from the backend.
pub async fn suggest_get(State(state): State<AppState>, Query(params): Query<SuggestParams>) -> Response {
    match state.backend.suggest(&params.q).await {
        Ok(s) => Json(s).into_response(),
        Err(e) => {
            tracing::error!(error = %e, q = %params.q, "Error fetching autocomplete suggestions");
            (StatusCode::BAD_GATEWAY, Json(json!({"suggestions": []}))).into_response()
        }
    }
}

/// `GET /history/:product_id`: recorded prices, oldest first.
pub async fn history_get(State(state): State<AppState>, Path(product_id): Path<String>) -> Response {
    let id = ProductId::from(product_id.as_str());
    match state.backend.price_history(&id).await {
        Ok(h) => Json(h).into_response(),
        Err(e) => {
            tracing::error!(error = %e, product_id = %id, "Error fetching price history");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"success": false, "error": GENERIC_ERROR_TEXT})),
            )
                .into_response()
        }
    }
}
