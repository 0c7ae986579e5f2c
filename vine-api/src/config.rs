//! Client configuration.
//!
//! Everything the request pipeline treats as fixed (API origin, client
//! identification headers, device token scheme, transport timeout) lives in
//! a [`ClientConfig`] value. The client takes ownership of it at construction
//! and never mutates it, so clients with different configurations can live
//! side by side.
//!
//! ```
//! use vine_api::config::{ClientConfig, DeviceToken};
//!
//! let config = ClientConfig::default()
//!     .with_base_url("http://localhost:8080")
//!     .with_device_token(DeviceToken::Fixed("my-device".into()));
//! assert_eq!(config.base_url, "http://localhost:8080");
//! ```

use sha2::{Digest, Sha256};
use std::time::Duration;

/// Header carrying the session credential on authenticated requests.
pub const SESSION_HEADER: &str = "vine-session-id";

const BASE_URL: &str = "https://api.vineapp.com";
const CLIENT_TAG: &str = "ios/1.3.1";
const USER_AGENT: &str = "com.vine.iphone/1.3.1 (unknown, iPhone OS 6.1.0, iPhone, Scale/2.000000)";
const ACCEPT_LANGUAGE: &str = "en, sv, fr, de, ja, nl, it, es, pt, pt-PT, da, fi, nb, ko, \
    zh-Hans, zh-Hant, ru, pl, tr, uk, ar, hr, cs, el, he, ro, sk, th, id, ms, en-GB, ca, hu, \
    vi, en-us;q=0.8";
const DEVICE_TOKEN_SEED: &str = "vine";

/// How the `deviceToken` login field is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceToken {
    /// Send this value for every login.
    Fixed(String),
    /// Send `hex(sha256(seed + username + password))`.
    ///
    /// Stable per credential pair: the same inputs always yield the same token.
    Derived { seed: String },
}

impl DeviceToken {
    /// Produce the token sent with a login for `username`/`password`.
    pub fn resolve(&self, username: &str, password: &str) -> String {
        match self {
            Self::Fixed(token) => token.clone(),
            Self::Derived { seed } => {
                let mut hasher = Sha256::new();
                hasher.update(seed.as_bytes());
                hasher.update(username.as_bytes());
                hasher.update(password.as_bytes());
                hex::encode(hasher.finalize())
            }
        }
    }
}

impl Default for DeviceToken {
    fn default() -> Self {
        Self::Derived {
            seed: DEVICE_TOKEN_SEED.to_owned(),
        }
    }
}

/// Immutable settings shared by every request a client makes.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin; request paths are appended to it.
    pub base_url: String,
    /// Value of the `X-Vine-Client` header.
    pub client_tag: String,
    /// Value of the `Accept-Language` header.
    pub accept_language: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Device token scheme used by `login`.
    pub device_token: DeviceToken,
    /// Transport timeout applied by [`ReqwestTransport`](crate::transport::ReqwestTransport).
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            client_tag: CLIENT_TAG.to_owned(),
            accept_language: ACCEPT_LANGUAGE.to_owned(),
            user_agent: USER_AGENT.to_owned(),
            device_token: DeviceToken::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Set the API origin. A trailing `/` is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Set the `X-Vine-Client` header value.
    #[must_use]
    pub fn with_client_tag(mut self, client_tag: impl Into<String>) -> Self {
        self.client_tag = client_tag.into();
        self
    }

    /// Set the `Accept-Language` header value.
    #[must_use]
    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = accept_language.into();
        self
    }

    /// Set the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set how the login `deviceToken` is produced.
    #[must_use]
    pub fn with_device_token(mut self, device_token: DeviceToken) -> Self {
        self.device_token = device_token;
        self
    }

    /// Set the transport timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Default headers in send order. Caller overrides are merged on top.
    pub fn default_headers(&self) -> Vec<(String, String)> {
        vec![
            ("X-Vine-Client".to_owned(), self.client_tag.clone()),
            ("Accept-Language".to_owned(), self.accept_language.clone()),
            ("User-Agent".to_owned(), self.user_agent.clone()),
        ]
    }

    /// Join a relative request path onto the configured origin.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
