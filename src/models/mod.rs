pub mod product;
pub mod search_query;
pub mod search_response;
pub mod price_history;
pub mod suggestions;

pub use product::{Product, ProductId};
pub use search_query::SearchQuery;
pub use search_response::SearchResponse;
pub use price_history::{PricePoint, PriceHistoryResponse};
pub use suggestions::Suggestions;
pub mod app_state;
pub use app_state::AppState;
