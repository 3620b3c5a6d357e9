use std::sync::{Arc, Mutex, MutexGuard};

use super::state::{ResultsKind, ResultsState};
use crate::render::render_state_or_fallback;

/// The region the presenter renders into. Each call replaces the previous
/// content entirely.
pub trait ResultsView: Send + Sync {
    fn show(&self, state: ResultsState);
}

impl<T: ResultsView + ?Sized> ResultsView for Arc<T> {
    fn show(&self, state: ResultsState) {
        (**self).show(state)
    }
}

/// Results container backed by an HTML string.
///
/// Clones share the same content, so a handler can keep one handle while the
/// presenter owns another.
#[derive(Clone, Debug, Default)]
pub struct HtmlResultsContainer {
    inner: Arc<Mutex<ContainerInner>>,
}

#[derive(Debug)]
struct ContainerInner {
    html: String,
    kind: ResultsKind,
    history: Vec<ResultsKind>,
}

impl Default for ContainerInner {
    fn default() -> Self {
        ContainerInner {
            html: String::new(),
            kind: ResultsKind::Blank,
            history: Vec::new(),
        }
    }
}

impl HtmlResultsContainer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ContainerInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current inner HTML.
    pub fn html(&self) -> String {
        self.lock().html.clone()
    }

    pub fn kind(&self) -> ResultsKind {
        self.lock().kind
    }

    /// Every state shown so far, oldest first.
    pub fn history(&self) -> Vec<ResultsKind> {
        self.lock().history.clone()
    }

    /// Number of product cards in the current content.
    pub fn card_count(&self) -> usize {
        self.lock().html.matches(r#"<div class="product-card""#).count()
    }
}

impl ResultsView for HtmlResultsContainer {
    fn show(&self, state: ResultsState) {
        let html = render_state_or_fallback(&state);
        let kind = state.kind();
        let mut inner = self.lock();
        inner.html = html;
        inner.kind = kind;
        inner.history.push(kind);
    }
}
