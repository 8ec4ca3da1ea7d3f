//! HTTP-backed subsidiary lookup provider.
//!
//! Calls a lookup endpoint that answers `GET {base}/subsidiaries?company=X`
//! with a JSON array of candidate names. Any transport or API failure is
//! reported as a [`LookupError`]; the search engine degrades those to "no
//! subsidiaries found".

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use corpscan_core::{LookupError, LookupProvider};

use crate::clean_candidates;

/// Configuration for connecting to a subsidiary lookup endpoint.
#[derive(Debug, Clone)]
pub struct HttpProviderConfig {
    /// Endpoint base URL (e.g., "<https://lookup.example.com>").
    pub base_url: String,
    /// Optional bearer token for authenticated endpoints.
    pub api_token: Option<String>,
}

/// Subsidiary lookup client over HTTP.
#[derive(Debug)]
pub struct HttpLookupProvider {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLookupProvider {
    /// Create a new lookup client.
    pub fn new(config: &HttpProviderConfig) -> Result<Self, LookupError> {
        if config.base_url.is_empty() {
            return Err(LookupError::Config("base_url is empty".into()));
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.api_token {
            let token_val = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| LookupError::Config("Invalid token format".into()))?;
            headers.insert(AUTHORIZATION, token_val);
        }

        // Ensure a TLS crypto provider is installed (reqwest uses rustls-no-provider).
        // The `Err` case just means it was already installed — safe to ignore.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Build the lookup URL for the endpoint.
    pub(crate) fn lookup_url(&self) -> String {
        format!("{}/subsidiaries", self.base_url)
    }

    /// Check HTTP response status, returning an error for non-success codes.
    fn check_status(resp: &reqwest::Response) -> Result<(), LookupError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LookupProvider for HttpLookupProvider {
    async fn lookup(&self, company: &str) -> Result<Vec<String>, LookupError> {
        let resp = self
            .http
            .get(self.lookup_url())
            .query(&[("company", company)])
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;
        Self::check_status(&resp)?;

        let names: Vec<String> = resp
            .json()
            .await
            .map_err(|e| LookupError::Response(e.to_string()))?;
        Ok(clean_candidates(names))
    }
}
