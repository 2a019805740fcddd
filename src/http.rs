//! API client: bearer auth, JSON bodies, error normalization and the 401
//! interceptor on top of a pluggable [`Transport`].

pub mod transport;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

use crate::error::{ApiError, Result};
use crate::navigation::Navigator;
use crate::session::SessionStore;
use futures::future::{self, Either};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::rc::Rc;
pub use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

const GENERIC_NETWORK_ERROR: &str = "Network Error";
const SESSION_EXPIRED: &str = "Session expired, please sign in again";

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        if err.0.trim().is_empty() {
            ApiError::Network(GENERIC_NETWORK_ERROR.to_string())
        } else {
            ApiError::Network(err.0)
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    session: Rc<SessionStore>,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        session: Rc<SessionStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn session(&self) -> &Rc<SessionStore> {
        &self.session
    }

    pub fn navigator(&self) -> &Rc<dyn Navigator> {
        &self.navigator
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.send(Method::Post, path, Some(encode(body)?)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.send(Method::Put, path, Some(encode(body)?)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.send(Method::Delete, path, None).await
    }

    /// DELETE carrying a JSON body (`{"id": ...}` on several routes).
    pub async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value> {
        self.send(Method::Delete, path, Some(encode(body)?)).await
    }

    /// Issue one request and normalize the outcome. Empty bodies read as
    /// `Value::Null`.
    pub async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = self.url(path);
        debug!("{} request to: {}", method, url);

        let mut request = HttpRequest::new(method, url);
        if let Some(token) = self.session.credential() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .json(body);
        }

        let response = self.transport.send(request).await.map_err(|e| {
            error!("{} {} - Request failed: {}", method, path, e);
            ApiError::from(e)
        })?;

        if response.status == 401 {
            warn!("{} {} - Unauthorized, clearing session", method, path);
            self.handle_unauthorized();
            let message =
                extract_message(&response.body).unwrap_or_else(|| SESSION_EXPIRED.to_string());
            return Err(ApiError::Unauthorized(message));
        }

        if !response.is_success() {
            let message = extract_message(&response.body).unwrap_or_else(|| {
                format!("Request failed with status code {}", response.status)
            });
            error!("{} {} - HTTP {}: {}", method, path, response.status, message);
            return Err(ApiError::Http {
                status: response.status,
                message,
            });
        }

        trace!("{} {} - Response received, parsing JSON", method, path);
        let value = parse_body(&response.body).map_err(|e| {
            error!("{} {} - {}", method, path, e);
            e
        })?;
        info!("{} {} - Success", method, path);
        Ok(value)
    }

    /// Race `future` against `token`; a cancelled token wins with
    /// [`ApiError::Cancelled`].
    pub async fn with_cancellation<F, T>(token: &CancellationToken, future: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if token.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let cancelled = token.cancelled();
        futures::pin_mut!(future);
        futures::pin_mut!(cancelled);
        match future::select(future, cancelled).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Cancelled),
        }
    }

    fn handle_unauthorized(&self) {
        self.session.clear();
        self.navigator.redirect_to_login();
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn parse_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `message` field, else `error` field, of a JSON error body.
fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"].iter().find_map(|key| {
        value
            .get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
    })
}
