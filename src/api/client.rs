use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use super::ProductSource;
use crate::error::ApiError;
use crate::models::{PriceHistoryResponse, ProductId, SearchQuery, SearchResponse, Suggestions};
use crate::utils::build_query_string;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

// Request/response echo goes to stderr so `search` output on stdout stays clean.
fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        eprintln!("{}", msg);
    }
}

/// HTTP client for the price tracker's search backend.
#[derive(Clone, Debug)]
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build a client with the default user agent.
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("Pricescout/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::new(client, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /autocomplete?q=...`
    pub async fn suggest(&self, q: &str) -> Result<Suggestions, ApiError> {
        self.get_json("/autocomplete", &[("q".into(), q.trim().to_string())]).await
    }

    /// `GET /product/<id>/history`
    pub async fn price_history(&self, id: &ProductId) -> Result<PriceHistoryResponse, ApiError> {
        let endpoint = format!("/product/{}/history", urlencoding::encode(&id.to_string()));
        self.get_json(&endpoint, &[]).await
    }

    /// Issue one GET and decode the JSON body.
    ///
    /// No retry and no timeout: a hung backend keeps the future pending.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        // --- Curl Logging ---
        let url_for_log = if params.is_empty() {
            url.clone()
        } else {
            format!("{}?{}", url, build_query_string(params))
        };
        let parts = [
            Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
            format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()),
            format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)),
        ];
        log_output(format!("Request:\n{}", parts.join(" ")));
        // --------------------

        let mut req = self.client.get(&url);
        if !params.is_empty() {
            req = req.query(params);
        }

        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            log_output(format!(
                "Response:\n{}",
                Paint::new(format!("HTTP {}: {}", status, text)).fg(yansi::Color::Red)
            ));
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        // Grayed out so the payload does not drown the request line
        log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl ProductSource for SearchClient {
    /// `GET /search?query=...`
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        tracing::debug!(query = %query, base_url = %self.base_url, "Searching products");
        self.get_json("/search", &[("query".into(), query.as_str().to_string())]).await
    }
}
