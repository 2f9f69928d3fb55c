use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use serde::Serialize;

use crate::models::{Query, SearchPage};

/// HTTP client backend that delegates search and export to a running
/// `rowsift` daemon.
pub struct HttpSearchBackend {
    client: Client,
    base_url: String,
}

impl HttpSearchBackend {
    /// Create a new HTTP backend targeting the given base URL
    /// (e.g. "http://127.0.0.1:7878").
    pub fn new<S: Into<String>>(base_url: S) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Execute a search via `POST /api/search`, returning a
    /// deserialized `SearchPage`.
    pub fn search(&self, query: &Query) -> Result<SearchPage> {
        let response = self.post("/api/search", query)?;
        let page = response
            .json::<SearchPage>()
            .context("failed to decode JSON response from server")?;
        Ok(page)
    }

    /// Export via `POST /api/search/export`, returning the CSV body.
    pub fn export(&self, query: &Query) -> Result<String> {
        let response = self.post("/api/search/export", query)?;
        response
            .text()
            .context("failed to read CSV response from server")
    }

    fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url_for(path);
        tracing::debug!(%url, "delegating request to server");
        self.client
            .post(&url)
            .json(body)
            .send()
            .with_context(|| format!("failed to send request to {}", url))?
            .error_for_status()
            .with_context(|| format!("server returned error for {}", url))
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
