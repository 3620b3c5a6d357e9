use std::sync::Arc;

use crate::api::Backend;
use crate::diagnostics::DiagnosticLog;
use crate::presenter::{EmptyQueryPolicy, StalePolicy};
use crate::tracking::{LoggingTracker, PriceTracker};

/// Shared state handed to every handler. Each request builds its own
/// presenter and results container from it.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<Backend>,
    pub tracker: Arc<dyn PriceTracker>,
    pub diagnostics: DiagnosticLog,
    pub public_base_url: String,
    pub empty_query: EmptyQueryPolicy,
    pub stale: StalePolicy,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(backend: Backend) -> Self {
        AppState {
            backend: Arc::new(backend),
            tracker: Arc::new(LoggingTracker),
            diagnostics: DiagnosticLog::new(),
            public_base_url: String::new(),
            empty_query: EmptyQueryPolicy::default(),
            stale: StalePolicy::default(),
            custom_css: None,
        }
    }

    pub fn backend_hostname(&self) -> String {
        match self.backend.as_ref() {
            Backend::Remote(c) => crate::utils::hostname_from_url(c.base_url()),
            Backend::Mock(_) => String::new(),
        }
    }
}
