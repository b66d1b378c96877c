//! Session-aware HTTP client for the blog API.
//!
//! Every request reads the token from the session and, when one is stored,
//! sends it as `Authorization: Bearer <token>`. A 401 reply clears the session,
//! asks the navigator for the login route and is returned as
//! [`ApiError::Unauthorized`]. Successful replies are decoded into their
//! [`Envelope`]; a `success: false` envelope is not a transport error.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use blog_types::Envelope;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::{ApiError, ApiResult, classify_reqwest_error};
use crate::navigation::{Navigator, Route};
use crate::session::Session;

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("blog/", env!("CARGO_PKG_VERSION"));

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            timeout,
            session,
            navigator,
        })
    }

    /// Builds a client from config (base URL precedence: env > config > default).
    pub fn from_config(
        config: &Config,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> anyhow::Result<Self> {
        let base_url = config.effective_base_url()?;
        Self::new(base_url, config.timeout(), session, navigator)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Forwards a navigation request to the host.
    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<T>> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<T>> {
        self.send(self.request(Method::DELETE, path)).await
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Request phase: attach the stored token, if any.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = self
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        match self.session.token() {
            Ok(Some(token)) => {
                tracing::debug!(%method, %url, authenticated = true, "sending request");
                builder.bearer_auth(token)
            }
            Ok(None) => {
                tracing::debug!(%method, %url, authenticated = false, "sending request");
                builder
            }
            Err(e) => {
                tracing::warn!(error = %e, %method, %url, "could not read session token; sending anonymously");
                builder
            }
        }
    }

    /// Response phase: unwrap the envelope, or map the failure.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<Envelope<T>> {
        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, self.timeout))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            let body = response.bytes().await.unwrap_or_default();
            let (message, _) = failure_details(&body);
            self.expire_session();
            return Err(ApiError::Unauthorized { message });
        }

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let (message, error_code) = failure_details(&body);
            let message = message.unwrap_or_else(|| {
                let text = String::from_utf8_lossy(&body).trim().to_string();
                if text.is_empty() {
                    status.canonical_reason().unwrap_or("request failed").to_string()
                } else {
                    text
                }
            });
            tracing::debug!(status = status.as_u16(), %message, "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
                error_code,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_reqwest_error(&e, self.timeout))?;
        serde_json::from_slice::<Envelope<T>>(&body).map_err(|e| {
            ApiError::Decode(format!("unexpected response body ({e})"))
        })
    }

    /// Clears the persisted session and sends the user to the login entry point.
    fn expire_session(&self) {
        match self.session.clear() {
            Ok(had_token) => {
                tracing::warn!(had_token, "unauthorized response; session cleared");
            }
            Err(e) => {
                tracing::warn!(error = %e, "unauthorized response; failed to clear session");
            }
        }
        self.navigator.navigate(Route::Login);
    }
}

/// Extracts `message` and `error_code` from a failure body, if it is an envelope.
fn failure_details(body: &[u8]) -> (Option<String>, Option<String>) {
    let Ok(envelope) = serde_json::from_slice::<Envelope<Value>>(body) else {
        return (None, None);
    };
    (
        envelope.display_message().map(str::to_string),
        envelope.error_code,
    )
}

/// Unwrapping helpers for decoded envelopes.
pub trait EnvelopeExt<T> {
    /// `{success: true, data: X}` becomes `X`; `success: false` becomes
    /// [`ApiError::Rejected`] carrying the server message.
    fn into_data(self) -> ApiResult<T>;

    /// For data-less replies: returns the server message on success.
    fn into_message(self) -> ApiResult<Option<String>>;
}

impl<T> EnvelopeExt<T> for Envelope<T> {
    fn into_data(self) -> ApiResult<T> {
        if !self.success {
            return Err(rejected(self));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response is missing its data".to_string()))
    }

    fn into_message(self) -> ApiResult<Option<String>> {
        if !self.success {
            return Err(rejected(self));
        }
        Ok(self.display_message().map(str::to_string))
    }
}

fn rejected<T>(envelope: Envelope<T>) -> ApiError {
    ApiError::Rejected {
        message: envelope.display_message().map(str::to_string),
        error_code: envelope.error_code,
    }
}
