use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::helpers::presenter_for;
use crate::events::{ClickTarget, UiEvent};
use crate::models::{AppState, ProductId};

/// `POST /track/:product_id`: the "Track Price" button.
pub async fn track_post(State(state): State<AppState>, Path(product_id): Path<String>) -> impl IntoResponse {
    let event = UiEvent::ResultsClicked {
        target: ClickTarget::TrackButton,
        card_product_id: Some(ProductId::from(product_id.as_str())),
    };
    match presenter_for(&state).dispatch(&event).await {
        Some(confirmation) => (StatusCode::OK, confirmation),
        None => (StatusCode::BAD_REQUEST, "Nothing to track".to_string()),
    }
}
