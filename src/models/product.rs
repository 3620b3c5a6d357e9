use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier as sent by the backend. The live backend uses integer
/// keys; anything else is kept verbatim as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Int(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Int(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(n) => ProductId::Int(n),
            Err(_) => ProductId::Text(s.to_string()),
        }
    }
}

/// One priced catalog item as returned by `/search`.
///
/// Everything except `name` may be missing; the renderer substitutes
/// placeholders instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_history_count: Option<i64>,
    // Mock catalog extras
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_backend_product() {
        let p: Product = serde_json::from_value(json!({
            "id": 7,
            "name": "Kettle",
            "category": "Kitchen",
            "product_url": "https://shop.example/kettle",
            "image_url": null,
            "current_price": 24.5,
            "price_change": -1.5,
            "price_change_pct": -5.769,
            "price_history_count": 3
        }))
        .unwrap();
        assert_eq!(p.id, Some(ProductId::Int(7)));
        assert_eq!(p.image_url, None);
        assert_eq!(p.current_price, Some(24.5));
        assert_eq!(p.price_history_count, Some(3));
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let p: Product = serde_json::from_value(json!({"name": "Bare"})).unwrap();
        assert_eq!(p.name, "Bare");
        assert!(p.id.is_none());
        assert!(p.current_price.is_none());
        assert!(p.price_change_pct.is_none());
    }

    #[test]
    fn test_text_id_kept_verbatim() {
        let p: Product = serde_json::from_value(json!({"id": "sku-42", "name": "x"})).unwrap();
        assert_eq!(p.id, Some(ProductId::Text("sku-42".into())));
        assert_eq!(p.id.unwrap().to_string(), "sku-42");
    }

    #[test]
    fn test_product_id_from_str() {
        assert_eq!(ProductId::from("12"), ProductId::Int(12));
        assert_eq!(ProductId::from("abc"), ProductId::Text("abc".into()));
    }
}
