use crate::domain::error::PayloadError;
use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, Response, StatusCode};
use bytes::Bytes;
use std::borrow::Cow;
use std::fmt::Display;
use tower::{Service, ServiceExt};
use tracing::debug;

/// Captured status, headers and body of a response.
///
/// A fresh recorder reports `200 OK` with an empty body until something is
/// captured into it.
#[derive(Debug, Clone)]
pub struct ResponseRecorder {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Default for ResponseRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Build a recorder directly, e.g. for a response from another client.
    pub fn from_parts(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub async fn from_response(response: Response<Body>) -> Result<Self, PayloadError> {
        let mut recorder = Self::new();
        recorder.capture(response).await?;
        Ok(recorder)
    }

    /// Buffer `response`, replacing anything captured before.
    pub async fn capture(&mut self, response: Response<Body>) -> Result<(), PayloadError> {
        let (parts, body) = response.into_parts();
        let body = to_bytes(body, usize::MAX)
            .await
            .map_err(|e| PayloadError::Transport(e.to_string()))?;

        self.status = parts.status;
        self.headers = parts.headers;
        self.body = body;

        debug!(status = %self.status, bytes = self.body.len(), "Captured response");
        Ok(())
    }

    /// Send `request` through `service` and capture the response.
    pub async fn record<S>(&mut self, service: S, request: Request<Body>) -> Result<(), PayloadError>
    where
        S: Service<Request<Body>, Response = Response<Body>>,
        S::Error: Display,
    {
        let response = service
            .oneshot(request)
            .await
            .map_err(|e| PayloadError::Transport(e.to_string()))?;
        self.capture(response).await
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Send `request` through `service` (an axum `Router`, for instance) and
/// capture the response.
pub async fn dispatch<S>(service: S, request: Request<Body>) -> Result<ResponseRecorder, PayloadError>
where
    S: Service<Request<Body>, Response = Response<Body>>,
    S::Error: Display,
{
    let mut recorder = ResponseRecorder::new();
    recorder.record(service, request).await?;
    Ok(recorder)
}
