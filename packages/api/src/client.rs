//! # HTTP clients
//!
//! [`HttpClient`] is the seam between the dispatch core and the network. The
//! production implementation, [`FetchClient`], rides on `reqwest`, which compiles to
//! the browser `fetch` API on `wasm32` and to hyper everywhere else.
//!
//! Relative URLs (the people search endpoint, a form `action` attribute) are resolved
//! against the client's base, normally the page origin.

use std::future::Future;

use url::Url;

use crate::error::ApiError;
use crate::request::{ApiRequest, ApiResponse, Method};

/// Async interface for sending a built request.
pub trait HttpClient {
    fn send(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// `reqwest`-backed client.
#[derive(Clone, Debug, Default)]
pub struct FetchClient {
    inner: reqwest::Client,
    base: Option<Url>,
}

impl FetchClient {
    /// A client that only accepts absolute URLs.
    pub fn new() -> Self {
        Self::default()
    }

    /// A client resolving relative URLs against `base` (e.g. `location.origin`).
    pub fn with_base(base: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base).map_err(|e| ApiError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            inner: reqwest::Client::new(),
            base: Some(base),
        })
    }

    pub fn resolve(&self, url: &str) -> Result<Url, ApiError> {
        let resolved = match &self.base {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };
        resolved.map_err(|e| ApiError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl HttpClient for FetchClient {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.resolve(&request.url)?;
        let mut builder = match request.method {
            Method::Get => self.inner.get(url),
            Method::Post => self.inner.post(url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(form) = &request.form {
            builder = builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(form.to_query_string());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("{:?} {} -> {}", request.method, request.url, status);
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_relative_against_origin() {
        let client = FetchClient::with_base("https://church.example").unwrap();
        let url = client.resolve("/api/people/search?query=ab").unwrap();
        assert_eq!(url.as_str(), "https://church.example/api/people/search?query=ab");
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let client = FetchClient::with_base("https://church.example").unwrap();
        let url = client.resolve("https://other.example/saints").unwrap();
        assert_eq!(url.host_str(), Some("other.example"));
    }

    #[test]
    fn test_relative_without_base_is_rejected() {
        let client = FetchClient::new();
        assert!(matches!(
            client.resolve("/saints"),
            Err(ApiError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_bad_base_is_rejected() {
        assert!(FetchClient::with_base("not a url").is_err());
    }
}
