use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Maximum number of diagnostics kept in memory.
const MAX_DIAGNOSTICS: usize = 200;

/// A failed search, as recorded by the presenter.
#[derive(Clone, Debug, Serialize)]
pub struct Diagnostic {
    /// Monotonically increasing identifier.
    pub id: u64,
    /// RFC 3339 timestamp of when the failure was recorded.
    pub timestamp: String,
    /// The trimmed query that failed.
    pub query: String,
    /// Underlying cause (network error, HTTP status, decode error).
    pub cause: String,
}

/// Thread-safe, bounded in-memory store of search failures.
///
/// Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticLog {
    inner: Arc<Mutex<LogInner>>,
}

#[derive(Debug, Default)]
struct LogInner {
    entries: Vec<Diagnostic>,
    next_id: u64,
}

/// Paginated view returned by `/diagnostics`.
#[derive(Serialize)]
pub struct DiagnosticsPage {
    pub diagnostics: Vec<Diagnostic>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the Vec half-written, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, LogInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record a failure. Oldest entries are evicted when the buffer is full.
    pub fn record(&self, query: &str, cause: &str) {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.entries.push(Diagnostic {
            id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            query: query.to_string(),
            cause: cause.to_string(),
        });
        if inner.entries.len() > MAX_DIAGNOSTICS {
            let excess = inner.entries.len() - MAX_DIAGNOSTICS;
            inner.entries.drain(..excess);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recent diagnostic, if any.
    pub fn latest(&self) -> Option<Diagnostic> {
        self.lock().entries.last().cloned()
    }

    /// Return a page of diagnostics, newest first. `per_page` is capped at
    /// the buffer size.
    pub fn list(&self, page: usize, per_page: usize) -> DiagnosticsPage {
        let inner = self.lock();
        let total = inner.entries.len();
        let per_page = if per_page == 0 { 20 } else { per_page.min(MAX_DIAGNOSTICS) };

        if total == 0 {
            return DiagnosticsPage { diagnostics: vec![], total: 0, page: 1, per_page, total_pages: 1 };
        }

        let total_pages = total.div_ceil(per_page);
        let page = page.clamp(1, total_pages);
        let diagnostics = inner
            .entries
            .iter()
            .rev()
            .skip((page - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect();

        DiagnosticsPage {
            diagnostics,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_list_newest_first() {
        let log = DiagnosticLog::new();
        log.record("tv", "Network error: connection refused");
        log.record("radio", "HTTP 502: bad gateway");

        let page = log.list(1, 10);
        assert_eq!(page.total, 2);
        assert_eq!(page.diagnostics[0].query, "radio");
        assert_eq!(page.diagnostics[1].query, "tv");
        assert_eq!(page.diagnostics[1].id, 1);
    }

    #[test]
    fn test_clones_share_buffer() {
        let log = DiagnosticLog::new();
        let other = log.clone();
        other.record("q", "boom");
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest().unwrap().cause, "boom");
    }

    #[test]
    fn test_eviction() {
        let log = DiagnosticLog::new();
        for i in 0..250 {
            log.record(&format!("q{}", i), "x");
        }
        assert_eq!(log.len(), MAX_DIAGNOSTICS);
        assert_eq!(log.latest().unwrap().query, "q249");
        assert_eq!(log.list(1, 300).diagnostics.last().unwrap().query, "q50");
    }

    #[test]
    fn test_pagination() {
        let log = DiagnosticLog::new();
        for i in 0..25 {
            log.record(&format!("q{}", i), "x");
        }
        let p1 = log.list(1, 10);
        assert_eq!(p1.diagnostics.len(), 10);
        assert_eq!(p1.total_pages, 3);

        let p3 = log.list(3, 10);
        assert_eq!(p3.diagnostics.len(), 5);
        assert_eq!(p3.diagnostics[4].query, "q0");

        // Out-of-range pages clamp to the last one
        assert_eq!(log.list(9, 10).page, 3);
    }

    #[test]
    fn test_huge_page_size_is_capped() {
        let log = DiagnosticLog::new();
        log.record("a", "x");
        log.record("b", "y");

        let page = log.list(1, usize::MAX);
        assert_eq!(page.per_page, MAX_DIAGNOSTICS);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.diagnostics.len(), 2);

        let page = log.list(usize::MAX, usize::MAX);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_empty_log() {
        let log = DiagnosticLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert_eq!(log.list(1, 0).per_page, 20);
    }
}
