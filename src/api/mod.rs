// Product sources the presenter can be wired to
pub mod client;
pub mod mock;

use std::future::Future;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{PriceHistoryResponse, ProductId, SearchQuery, SearchResponse, Suggestions};

pub use client::{set_silent, SearchClient};
pub use mock::MockCatalog;

/// Something that answers a search with a `SearchResponse` envelope.
///
/// `Err` means the request itself failed (transport, status, decoding);
/// a backend-reported failure is `Ok` with `success: false`.
pub trait ProductSource: Send + Sync {
    fn search(&self, query: &SearchQuery) -> impl Future<Output = Result<SearchResponse, ApiError>> + Send;
}

impl<T: ProductSource + ?Sized> ProductSource for Arc<T> {
    fn search(&self, query: &SearchQuery) -> impl Future<Output = Result<SearchResponse, ApiError>> + Send {
        (**self).search(query)
    }
}

/// The source chosen at startup: the live backend or the built-in mock data.
#[derive(Clone, Debug)]
pub enum Backend {
    Remote(SearchClient),
    Mock(MockCatalog),
}

impl Backend {
    pub fn is_mock(&self) -> bool {
        matches!(self, Backend::Mock(_))
    }

    pub async fn suggest(&self, q: &str) -> Result<Suggestions, ApiError> {
        match self {
            Backend::Remote(c) => c.suggest(q).await,
            Backend::Mock(m) => Ok(m.suggest(q)),
        }
    }

    pub async fn price_history(&self, id: &ProductId) -> Result<PriceHistoryResponse, ApiError> {
        match self {
            Backend::Remote(c) => c.price_history(id).await,
            Backend::Mock(m) => Ok(m.price_history(id)),
        }
    }
}

impl ProductSource for Backend {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        match self {
            Backend::Remote(c) => c.search(query).await,
            Backend::Mock(m) => m.search(query).await,
        }
    }
}
