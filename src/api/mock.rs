use super::ProductSource;
use crate::error::ApiError;
use crate::models::{PriceHistoryResponse, Product, ProductId, SearchQuery, SearchResponse, Suggestions};

const MOCK_IMAGE: &str = "/api/placeholder/300/200";

/// Hardcoded catalog used when no backend is available.
///
/// Every query gets the same three products, in the same order.
#[derive(Clone, Debug, Default)]
pub struct MockCatalog;

impl MockCatalog {
    pub fn new() -> Self {
        MockCatalog
    }

    pub fn products(&self) -> Vec<Product> {
        vec![
            mock_product(1, "Wireless Headphones", 79.99, 129.99, 38.0, "TechStore"),
            mock_product(2, "Smart Watch", 199.99, 249.99, 20.0, "ElectroHub"),
            mock_product(3, "Bluetooth Speaker", 49.99, 69.99, 28.0, "AudioMart"),
        ]
    }

    /// Case-insensitive substring match on the product names.
    pub fn suggest(&self, q: &str) -> Suggestions {
        let needle = q.trim().to_lowercase();
        Suggestions {
            suggestions: self
                .products()
                .into_iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .map(|p| p.name)
                .collect(),
        }
    }

    /// The mock catalog records no history; known ids get an empty series.
    pub fn price_history(&self, id: &ProductId) -> PriceHistoryResponse {
        if self.products().iter().any(|p| p.id.as_ref() == Some(id)) {
            PriceHistoryResponse {
                success: true,
                history: vec![],
                error: None,
            }
        } else {
            PriceHistoryResponse {
                success: false,
                history: vec![],
                error: Some(format!("Unknown product {}", id)),
            }
        }
    }
}

fn mock_product(id: i64, name: &str, current: f64, original: f64, discount: f64, store: &str) -> Product {
    Product {
        id: Some(ProductId::Int(id)),
        name: name.to_string(),
        image_url: Some(MOCK_IMAGE.to_string()),
        current_price: Some(current),
        original_price: Some(original),
        discount: Some(discount),
        store: Some(store.to_string()),
        ..Product::default()
    }
}

impl ProductSource for MockCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        tracing::debug!(query = %query, "Serving mock catalog");
        Ok(SearchResponse::ok(self.products()))
    }
}
