use serde::{Deserialize, Serialize};

/// One recorded price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub date: String,
}

/// Envelope returned by `GET /product/<id>/history`, oldest point first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub history: Vec<PricePoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
