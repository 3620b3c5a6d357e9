use crate::models::ProductId;

pub const TRACK_CONFIRMATION: &str = "Product added to price tracking!";

/// Hook for the "Track Price" button.
pub trait PriceTracker: Send + Sync {
    /// Register interest in `id` and return the confirmation shown to the user.
    fn track(&self, id: &ProductId) -> String;
}

/// Stub tracker: logs the request and confirms. Nothing is persisted.
#[derive(Clone, Debug, Default)]
pub struct LoggingTracker;

impl PriceTracker for LoggingTracker {
    fn track(&self, id: &ProductId) -> String {
        tracing::info!(product_id = %id, "Tracking price for product");
        TRACK_CONFIRMATION.to_string()
    }
}
