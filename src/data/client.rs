//! HTTP access to the country indicators pages.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::RemoteConfig;
use crate::error::AppError;

const USER_AGENT_VALUE: &str = "Mozilla/5.0 (compatible; indicators-scraper/1.0; +https://example.com)";
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";

/// Something that can return the indicators page HTML for a country slug.
///
/// The pipeline only depends on this trait so it can run against canned
/// pages in tests.
pub trait PageSource {
    /// URL the page for `slug` is (or would be) fetched from; used in messages.
    fn page_url(&self, slug: &str) -> String;

    fn fetch_page(&self, slug: &str) -> Result<String, AppError>;
}

/// Blocking client for `{base_url}/{slug}/indicators`.
pub struct TeClient {
    client: Client,
    base_url: String,
}

impl TeClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::remote(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl PageSource for TeClient {
    fn page_url(&self, slug: &str) -> String {
        indicators_url(&self.base_url, slug)
    }

    fn fetch_page(&self, slug: &str) -> Result<String, AppError> {
        let url = self.page_url(slug);
        tracing::debug!(%url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AppError::remote(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::remote(format!("Request to {url} failed with status {status}.")));
        }

        resp.text()
            .map_err(|e| AppError::remote(format!("Failed to read response body from {url}: {e}")))
    }
}

/// `{base}/{slug}/indicators`, tolerant of stray slashes on either side.
pub fn indicators_url(base_url: &str, slug: &str) -> String {
    format!(
        "{}/{}/indicators",
        base_url.trim_end_matches('/'),
        slug.trim_matches('/')
    )
}
