use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use polaris::http::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// Browser transport on top of `fetch` (gloo-net).
#[derive(Debug, Clone)]
pub struct GlooTransport {
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms: u32::try_from(timeout_ms).unwrap_or(u32::MAX),
        }
    }

    fn builder(method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        log::debug!("{} request to: {}", request.method, request.url);

        let mut builder = Self::builder(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match &request.body {
            Some(body) => builder.body(body.to_string()),
            None => builder.build(),
        }
        .map_err(|e| {
            let error_msg = format!("Failed to build request: {}", e);
            log::error!("{} {} - {}", request.method, request.url, error_msg);
            TransportError(error_msg)
        })?;

        let send = prepared.send();
        let timeout = TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(send);
        futures::pin_mut!(timeout);

        let response = match future::select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| {
                log::error!("{} {} - Request failed: {}", request.method, request.url, e);
                TransportError(e.to_string())
            })?,
            Either::Right(_) => {
                log::error!("{} {} - Timed out", request.method, request.url);
                return Err(TransportError(format!(
                    "Request timed out after {} ms",
                    self.timeout_ms
                )));
            }
        };

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            let error_msg = format!("Failed to read response: {}", e);
            log::error!("{} {} - {}", request.method, request.url, error_msg);
            TransportError(error_msg)
        })?;

        log::trace!("{} {} - {} received", request.method, request.url, status);
        Ok(HttpResponse { status, body })
    }
}
