// src/core/net.rs
//
// Blocking HTTPS client for the Escavador v2 API.
// One GET per page; no retries. Continuation follows `links.next` verbatim.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;

use crate::config::consts::{ERROR_BODY_MAX, SEARCH_PARAM, SEARCH_PATH, USER_AGENT};
use crate::config::options::QueryOptions;
use crate::error::{Error, ProviderError};
use crate::provider::{Page, RecordProvider};
use crate::specs::SearchResponse;

pub struct EscavadorClient {
    http: Client,
    base_url: String,
}

impl EscavadorClient {
    /// Configure a client. The token is required; it is checked here, before
    /// any request goes out.
    pub fn new(opts: &QueryOptions) -> Result<Self, Error> {
        let token = opts
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Config(s!("missing access token")))?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Error::Config(s!("access token contains characters not allowed in a header")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert("x-requested-with", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: opts.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    fn search_url(&self) -> String {
        join!(&self.base_url, SEARCH_PATH)
    }

    fn fetch(&self, req: RequestBuilder, what: &str) -> Result<Page, ProviderError> {
        let resp = req.send()?;
        let status = resp.status();
        logd!("GET {what} → {status}");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProviderError::Unauthorized { status: status.as_u16() });
        }
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: excerpt(&body),
            });
        }

        let body = resp.text()?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(Page::from(parsed))
    }
}

impl RecordProvider for EscavadorClient {
    fn search(&mut self, identifier: &str) -> Result<Page, ProviderError> {
        let url = self.search_url();
        let req = self.http.get(&url).query(&[(SEARCH_PARAM, identifier)]);
        self.fetch(req, SEARCH_PATH)
    }

    fn continue_search(&mut self, page: &Page) -> Result<Option<Page>, ProviderError> {
        let Some(next) = page.next.as_deref() else {
            return Ok(None);
        };
        let req = self.http.get(next);
        self.fetch(req, "next page").map(Some)
    }
}

/// First `ERROR_BODY_MAX` chars of an error body, whitespace collapsed.
fn excerpt(body: &str) -> String {
    let flat = crate::core::sanitize::normalize_ws(body);
    if flat.chars().count() <= ERROR_BODY_MAX {
        return flat;
    }
    let mut cut: String = flat.chars().take(ERROR_BODY_MAX).collect();
    cut.push('…');
    cut
}
