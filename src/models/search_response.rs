use serde::{Deserialize, Serialize};

use super::Product;

/// Envelope returned by `GET /search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn ok(products: Vec<Product>) -> Self {
        SearchResponse { success: true, products, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        SearchResponse { success: false, products: vec![], error: Some(error.into()) }
    }
}
