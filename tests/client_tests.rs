//! SearchClient against a throwaway backend on an ephemeral port
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;

use pricescout::api::{set_silent, ProductSource, SearchClient};
use pricescout::error::ApiError;
use pricescout::models::{ProductId, SearchQuery};
use pricescout::presenter::{HtmlResultsContainer, ResultsKind, SearchPresenter};
use pricescout::render::GENERIC_ERROR_TEXT;

async fn search(Query(q): Query<HashMap<String, String>>) -> impl IntoResponse {
    let query = q.get("query").cloned().unwrap_or_default();
    match query.as_str() {
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false, "error": "database unavailable"})),
        )
            .into_response(),
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "refused" => Json(json!({"success": false, "error": "query rejected"})).into_response(),
        "none" => Json(json!({"success": true, "products": []})).into_response(),
        // Echo the decoded query back as the product name
        _ => Json(json!({
            "success": true,
            "products": [{
                "id": 1,
                "name": query,
                "image_url": null,
                "current_price": 12.5,
                "price_change": 2.0,
                "price_change_pct": 19.047,
                "price_history_count": 2
            }]
        }))
        .into_response(),
    }
}

async fn autocomplete(Query(q): Query<HashMap<String, String>>) -> impl IntoResponse {
    let prefix = q.get("q").cloned().unwrap_or_default();
    Json(json!({"suggestions": [format!("{} one", prefix), format!("{} two", prefix)]}))
}

async fn history(Path(id): Path<i64>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "history": [
            {"price": 10.5, "date": "2024-01-01"},
            {"price": 12.5, "date": "2024-02-01"}
        ],
        "id": id
    }))
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/search", get(search))
        .route("/autocomplete", get(autocomplete))
        .route("/product/:id/history", get(history));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client() -> SearchClient {
    set_silent(true);
    SearchClient::from_base_url(spawn_backend().await).unwrap()
}

#[tokio::test]
async fn test_search_decodes_products() {
    let c = client().await;
    let r = c.search(&SearchQuery::new("kettle")).await.unwrap();
    assert!(r.success);
    assert_eq!(r.products.len(), 1);
    assert_eq!(r.products[0].name, "kettle");
    assert_eq!(r.products[0].id, Some(ProductId::Int(1)));
    assert_eq!(r.products[0].image_url, None);
}

#[tokio::test]
async fn test_reserved_characters_reach_backend_intact() {
    let c = client().await;
    let raw = "a&b=c?d#e/f%g+h ü";
    let r = c.search(&SearchQuery::new(raw)).await.unwrap();
    assert_eq!(r.products[0].name, raw);
}

#[tokio::test]
async fn test_application_failure_is_ok_response() {
    let c = client().await;
    let r = c.search(&SearchQuery::new("refused")).await.unwrap();
    assert!(!r.success);
    assert_eq!(r.error.as_deref(), Some("query rejected"));
}

#[tokio::test]
async fn test_non_ok_status_is_transport_failure() {
    let c = client().await;
    match c.search(&SearchQuery::new("boom")).await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("database unavailable"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let c = client().await;
    assert!(matches!(c.search(&SearchQuery::new("garbage")).await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    set_silent(true);
    // Bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let c = SearchClient::from_base_url(format!("http://{}", addr)).unwrap();
    assert!(matches!(c.search(&SearchQuery::new("x")).await, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_suggest_and_history() {
    let c = client().await;
    let s = c.suggest("smart").await.unwrap();
    assert_eq!(s.suggestions, vec!["smart one".to_string(), "smart two".to_string()]);

    let h = c.price_history(&ProductId::Int(4)).await.unwrap();
    assert!(h.success);
    assert_eq!(h.history.len(), 2);
    assert_eq!(h.history[1].price, 12.5);
}

#[tokio::test]
async fn test_presenter_end_to_end() {
    let c = client().await;
    let view = HtmlResultsContainer::new();
    let presenter = SearchPresenter::new(c, view.clone());

    presenter.search("kettle").await;
    assert_eq!(view.kind(), ResultsKind::Products(1));
    assert!(view.html().contains("$12.50"));
    assert!(view.html().contains("▲19.05%"));
    assert!(view.html().contains("price-increase"));
    assert!(view.html().contains("placeholder.jpg"));

    presenter.search("none").await;
    assert_eq!(view.kind(), ResultsKind::Empty);

    presenter.search("refused").await;
    assert!(view.html().contains("Error: query rejected"));

    presenter.search("boom").await;
    assert!(view.html().contains(GENERIC_ERROR_TEXT));
    assert_eq!(presenter.diagnostics().len(), 1);
}
