//! HTML for the results container.
//!
//! Every [`ResultsState`] maps to exactly one fragment; the container's old
//! content is always replaced wholesale.

use askama::Template;

use crate::models::Product;
use crate::presenter::ResultsState;
use crate::templates::{CardView, ProductListTemplate, ResultsMessageTemplate};

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_RESULTS_TEXT: &str = "No products found.";
pub const GENERIC_ERROR_TEXT: &str = "An error occurred while searching.";
pub const UNKNOWN_ERROR_TEXT: &str = "Unknown error";
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";
pub const MISSING_PRICE_TEXT: &str = "N/A";

/// `$12.34`, or `N/A` when the backend sent no price.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:.2}", p),
        None => MISSING_PRICE_TEXT.to_string(),
    }
}

pub fn change_glyph(change: Option<f64>) -> &'static str {
    match change {
        Some(c) if c > 0.0 => "▲",
        Some(c) if c < 0.0 => "▼",
        _ => "",
    }
}

pub fn change_class(change: Option<f64>) -> &'static str {
    match change {
        Some(c) if c > 0.0 => "price-increase",
        Some(c) if c < 0.0 => "price-decrease",
        _ => "",
    }
}

/// Absolute percentage with two decimals, e.g. `3.46%`. Nothing when absent.
pub fn format_change_pct(pct: Option<f64>) -> String {
    pct.map(|p| format!("{:.2}%", p.abs())).unwrap_or_default()
}

/// Glyph and percentage as shown on the card, e.g. `▼3.46%`.
pub fn format_change(change: Option<f64>, pct: Option<f64>) -> String {
    format!("{}{}", change_glyph(change), format_change_pct(pct))
}

pub fn card_view(product: &Product) -> CardView {
    let data_id = product.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
    let image_src = product
        .image_url
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string();
    let product_url = product.product_url.clone().unwrap_or_default();
    let store = product.store.clone().unwrap_or_default();

    CardView {
        has_id: product.id.is_some(),
        data_id,
        name: product.name.clone(),
        image_src,
        has_link: !product_url.is_empty(),
        product_url,
        price_text: format_price(product.current_price),
        change_class: change_class(product.price_change),
        change_text: format_change(product.price_change, product.price_change_pct),
        has_badge: product.discount.is_some(),
        badge_text: product.discount.map(|d| format!("{:.0}% OFF", d)).unwrap_or_default(),
        has_original: product.original_price.is_some(),
        original_text: product.original_price.map(|p| format!("${:.2}", p)).unwrap_or_default(),
        has_store: !store.is_empty(),
        store,
    }
}

fn message(class: &str, text: &str) -> Result<String, askama::Error> {
    ResultsMessageTemplate { class, text }.render()
}

/// Render the container content for `state`.
pub fn render_state(state: &ResultsState) -> Result<String, askama::Error> {
    match state {
        ResultsState::Loading => message("results-loading", LOADING_TEXT),
        ResultsState::Empty => message("results-empty", NO_RESULTS_TEXT),
        ResultsState::Failed(error) => {
            let error = if error.trim().is_empty() { UNKNOWN_ERROR_TEXT } else { error.as_str() };
            message("results-error", &format!("Error: {}", error))
        }
        ResultsState::Unavailable => message("results-error", GENERIC_ERROR_TEXT),
        ResultsState::Products(products) if products.is_empty() => message("results-empty", NO_RESULTS_TEXT),
        ResultsState::Products(products) => {
            let cards: Vec<CardView> = products.iter().map(card_view).collect();
            ProductListTemplate { cards: &cards }.render()
        }
    }
}

/// Like [`render_state`], but a template failure degrades to the generic
/// error line so the container is never left half-written.
pub fn render_state_or_fallback(state: &ResultsState) -> String {
    render_state(state).unwrap_or_else(|e| {
        tracing::error!(%e, "Template render error");
        format!(r#"<p class="results-error">{}</p>"#, GENERIC_ERROR_TEXT)
    })
}
