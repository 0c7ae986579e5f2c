//! Request pipeline and session lifecycle.
//!
//! Every API call goes through [`VineClient::send`]:
//!
//! 1. Start from the client's default headers (`X-Vine-Client`,
//!    `Accept-Language`, `User-Agent`) and apply the request's overrides
//! 2. Add `vine-session-id` if the session holds a credential
//! 3. Hand the merged request to the [`Transport`]
//! 4. Quote large identifiers in the raw body, parse it, and unwrap the
//!    `{ data, error }` envelope (see [`envelope`](crate::envelope))
//!
//! # Concurrency
//!
//! Calls are independent: nothing is queued, deduplicated or retried. The
//! session is read once per call, when headers are built, and written only
//! when `login`/`logout` complete. A request already dispatched keeps the
//! headers it was built with; a logout that completes while it is in flight
//! only affects requests built afterwards. Callers that need login/logout to
//! be ordered against other calls must serialize those calls themselves.

use crate::config::{ClientConfig, SESSION_HEADER};
use crate::envelope::parse_envelope;
use crate::error::{MissingCredential, Result, VineError};
use crate::request::Request;
use crate::session::{Session, Settings};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::future::Future;

const AUTHENTICATE: &str = "users/authenticate";

/// Async client for the Vine API.
///
/// Holds an immutable [`ClientConfig`], a [`Transport`] and the session
/// state. API methods are implemented in separate modules (`users`,
/// `timelines`, `posts`, `tags`) as `impl VineClient` blocks.
pub struct VineClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
    session: RwLock<Session>,
}

impl VineClient<ReqwestTransport> {
    /// Create an unauthenticated client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create an unauthenticated client.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport, None))
    }

    /// Create a client already holding a session, skipping `login`.
    pub fn with_settings(config: ClientConfig, settings: Settings) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport, Some(settings)))
    }

    /// Create a client and log in.
    pub async fn connect(config: ClientConfig, username: &str, password: &str) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::connect_with(config, transport, username, password).await
    }
}

impl<T: Transport> VineClient<T> {
    /// Create a client over an explicit transport, optionally seeded with a
    /// session.
    pub fn with_transport(config: ClientConfig, transport: T, settings: Option<Settings>) -> Self {
        Self {
            config,
            transport,
            session: RwLock::new(Session::new(settings)),
        }
    }

    /// Create a client over an explicit transport and log in.
    pub async fn connect_with(
        config: ClientConfig,
        transport: T,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        let client = Self::with_transport(config, transport, None);
        client.login(username, password)?.await?;
        Ok(client)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Snapshot of the current session state.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    /// Replace the session state. `None` logs the client out locally without
    /// telling the server.
    pub fn authorize(&self, settings: Option<Settings>) {
        self.session.write().authorize(settings);
    }

    /// Send a request and resolve with the envelope's `data`.
    ///
    /// `data` is `Value::Null` when the response carries none.
    ///
    /// # Errors
    ///
    /// - [`VineError::Transport`] — the exchange failed; no body was read
    /// - [`VineError::Parse`] — the body is not JSON
    /// - [`VineError::Api`] — the envelope reported an error
    pub async fn send(&self, request: impl Into<Request>) -> Result<Value> {
        let request = self.prepare(request.into());
        let method = request.method;
        let url = request.url.clone();

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(VineError::Transport)?;
        tracing::debug!(
            %method,
            %url,
            status = response.status,
            bytes = response.body.len(),
            "received response"
        );

        parse_envelope(&response.body).inspect_err(|err| {
            if let VineError::Api { .. } = err {
                tracing::warn!(%method, %url, status = response.status, "{err}");
            }
        })
    }

    /// [`send`](Self::send), then deserialize `data` into `D`.
    pub async fn send_as<D: DeserializeOwned>(&self, request: impl Into<Request>) -> Result<D> {
        let data = self.send(request).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Log in with a username (email) and password.
    ///
    /// Both values are checked before anything is sent: an empty one fails
    /// right here with [`VineError::InvalidCredentials`]. Otherwise the
    /// returned future performs the login and, on success, replaces the
    /// session with the one issued by the server. On failure, including a
    /// response with an empty credential, user ID or username, the session
    /// is left as it was.
    ///
    /// ```no_run
    /// # async fn run() -> vine_api::Result<()> {
    /// let client = vine_api::VineClient::new()?;
    /// client.login("alice@example.com", "hunter2")?.await?;
    /// assert!(client.session().is_authenticated());
    /// # Ok(())
    /// # }
    /// ```
    pub fn login<'a>(
        &'a self,
        username: &str,
        password: &str,
    ) -> Result<impl Future<Output = Result<&'a Self>> + use<'a, T>> {
        if username.is_empty() {
            return Err(VineError::InvalidCredentials(MissingCredential::Username));
        }
        if password.is_empty() {
            return Err(VineError::InvalidCredentials(MissingCredential::Password));
        }

        let device_token = self.config.device_token.resolve(username, password);
        let request = Request::post(AUTHENTICATE)
            .form("username", username)
            .form("password", password)
            .form("deviceToken", device_token);

        Ok(async move {
            let settings: Settings = self.send_as(request).await?;
            if !settings.is_complete() {
                return Err(VineError::Other(
                    "incomplete session in authenticate response".into(),
                ));
            }
            tracing::info!(username = %settings.username, user_id = %settings.user_id, "logged in");
            self.authorize(Some(settings));
            Ok(self)
        })
    }

    /// Revoke the session on the server, then clear it locally.
    ///
    /// The local session is only cleared once the server has acknowledged
    /// the logout; on failure it is left as it was.
    pub async fn logout(&self) -> Result<&Self> {
        self.send(Request::delete(AUTHENTICATE)).await?;
        self.authorize(None);
        tracing::info!("logged out");
        Ok(self)
    }

    /// Merge headers and attach the session credential.
    fn prepare(&self, request: Request) -> HttpRequest {
        let Request {
            method,
            url,
            headers: overrides,
            query,
            form,
        } = request;

        let mut headers = self.config.default_headers();
        for (name, value) in overrides {
            set_header(&mut headers, name, value);
        }

        let credential = self.session.read().credential().map(str::to_owned);
        let authenticated = credential.is_some();
        if let Some(credential) = credential {
            set_header(&mut headers, SESSION_HEADER.to_owned(), credential);
        }

        let url = self.config.url(&url);
        tracing::debug!(%method, %url, authenticated, "sending request");

        HttpRequest {
            method,
            url,
            headers,
            query,
            form,
        }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
    headers.push((name, value));
}

/// Percent-encode a value used as a single path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
