//! The search widget: query in, one rendered container state out.

mod state;
mod terminal;
mod view;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub use state::{ResultsKind, ResultsState};
pub use terminal::TerminalView;
pub use view::{HtmlResultsContainer, ResultsView};

use crate::api::ProductSource;
use crate::diagnostics::DiagnosticLog;
use crate::events::{map_event, Action, UiEvent};
use crate::models::{ProductId, SearchQuery};
use crate::tracking::{LoggingTracker, PriceTracker};

/// What to do when the trimmed query is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyQueryPolicy {
    /// Send it; the backend lists every product.
    #[default]
    Forward,
    /// Do nothing: no request, container untouched.
    Ignore,
}

/// What to do with a response whose search has been superseded by a newer one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Render it anyway; the response that resolves last wins.
    #[default]
    Keep,
    /// Drop it; the most recently issued search wins.
    Discard,
}

/// Wires a product source to a results container.
///
/// Each [`search`](Self::search) shows the loading placeholder, issues exactly
/// one request and then shows exactly one terminal state. There is no retry,
/// timeout or cancellation.
pub struct SearchPresenter<S, V> {
    source: S,
    view: V,
    tracker: Arc<dyn PriceTracker>,
    diagnostics: DiagnosticLog,
    generation: AtomicU64,
    empty_query: EmptyQueryPolicy,
    stale: StalePolicy,
}

impl<S: ProductSource, V: ResultsView> SearchPresenter<S, V> {
    pub fn new(source: S, view: V) -> Self {
        Self {
            source,
            view,
            tracker: Arc::new(LoggingTracker),
            diagnostics: DiagnosticLog::new(),
            generation: AtomicU64::new(0),
            empty_query: EmptyQueryPolicy::default(),
            stale: StalePolicy::default(),
        }
    }

    pub fn with_tracker(mut self, tracker: Arc<dyn PriceTracker>) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: DiagnosticLog) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_empty_query_policy(mut self, policy: EmptyQueryPolicy) -> Self {
        self.empty_query = policy;
        self
    }

    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale = policy;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    pub async fn search(&self, raw: &str) {
        let query = SearchQuery::new(raw);
        if query.is_empty() && self.empty_query == EmptyQueryPolicy::Ignore {
            tracing::debug!("Ignoring empty query");
            return;
        }

        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.show(ResultsState::Loading);

        let result = self.source.search(&query).await;

        if self.stale == StalePolicy::Discard && self.generation.load(Ordering::SeqCst) != token {
            tracing::debug!(query = %query, token, "Dropping response of superseded search");
            return;
        }

        let state = match result {
            Ok(resp) if resp.success => {
                if resp.products.is_empty() {
                    ResultsState::Empty
                } else {
                    ResultsState::Products(resp.products)
                }
            }
            Ok(resp) => ResultsState::Failed(resp.error.unwrap_or_default()),
            Err(e) => {
                tracing::error!(query = %query, error = %e, "Search error");
                self.diagnostics.record(query.as_str(), &e.to_string());
                ResultsState::Unavailable
            }
        };
        self.view.show(state);
    }

    /// Returns the tracker's confirmation message.
    pub fn track_price(&self, id: &ProductId) -> String {
        self.tracker.track(id)
    }

    /// Run whatever `event` maps to. Returns a message for the user when the
    /// action produces one (price tracking confirmation).
    pub async fn dispatch(&self, event: &UiEvent) -> Option<String> {
        match map_event(event) {
            Action::Search(input) => {
                self.search(&input).await;
                None
            }
            Action::TrackPrice(id) => Some(self.track_price(&id)),
            Action::Nothing => None,
        }
    }
}
