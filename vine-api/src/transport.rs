//! HTTP transport.
//!
//! The request pipeline hands a fully merged [`HttpRequest`] to a
//! [`Transport`] and gets back the status and raw body text. Everything about
//! connections, TLS and redirects lives behind this trait; the default
//! implementation is [`ReqwestTransport`]. Tests substitute their own.

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::request::Method;
use async_trait::async_trait;
use reqwest::Client;

/// An outgoing request described as plain data, with an absolute URL and
/// headers already merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body text of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs one HTTP exchange.
///
/// Errors are for failures of the exchange itself. A response with any
/// status code is a success at this level.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by an async [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport with the timeout from `config`.
    pub fn new(config: &ClientConfig) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http })
    }

    /// Wrap an existing client (shared connection pool, proxy settings, ...).
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut req = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if !request.form.is_empty() {
            req = req.form(&request.form);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            method: Method::Get,
            url: "https://api.vineapp.com/users/me".into(),
            headers: vec![("vine-session-id".into(), "abc".into())],
            query: Vec::new(),
            form: Vec::new(),
        };
        assert_eq!(req.header("Vine-Session-Id"), Some("abc"));
        assert_eq!(req.header("User-Agent"), None);
    }
}
