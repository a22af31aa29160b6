//! HTTP requests whose JSON bodies come from a schema or an arbitrary value.

use crate::adapters::fake_provider::FakeValueProvider;
use crate::adapters::recorder::ResponseRecorder;
use crate::application::evaluator::Evaluator;
use crate::domain::error::PayloadError;
use crate::domain::field::FieldDef;
use crate::domain::provider::ValueProvider;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use serde::Serialize;
use tracing::debug;

/// Media type set on every request built here.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds requests from schemas with a configured [`Evaluator`].
pub struct RequestBuilder<P = FakeValueProvider> {
    evaluator: Evaluator<P>,
}

impl Default for RequestBuilder<FakeValueProvider> {
    fn default() -> Self {
        Self::new(Evaluator::default())
    }
}

impl<P: ValueProvider> RequestBuilder<P> {
    pub fn new(evaluator: Evaluator<P>) -> Self {
        Self { evaluator }
    }

    pub fn evaluator_mut(&mut self) -> &mut Evaluator<P> {
        &mut self.evaluator
    }

    /// Evaluate `fields`, serialize the document and use it as the body.
    pub fn build_request(
        &mut self,
        method: Method,
        uri: &str,
        fields: &[FieldDef],
    ) -> Result<Request<Body>, PayloadError> {
        let payload = self.evaluator.generate(fields)?;
        debug!(%method, uri, bytes = payload.len(), "Built request from schema");

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(Body::from(payload))?;
        Ok(request)
    }

    /// Like [`RequestBuilder::build_request`] plus an empty recorder.
    ///
    /// # Panics
    ///
    /// Aborts the calling test if the request cannot be built.
    #[track_caller]
    pub fn build_request_with_recorder(
        &mut self,
        method: Method,
        uri: &str,
        fields: &[FieldDef],
    ) -> (Request<Body>, ResponseRecorder) {
        match self.build_request(method, uri, fields) {
            Ok(request) => (request, ResponseRecorder::new()),
            Err(err) => panic!("failed to create request: {}", err),
        }
    }
}

/// [`RequestBuilder::build_request`] with a thread-local random provider.
pub fn build_request(
    method: Method,
    uri: &str,
    fields: &[FieldDef],
) -> Result<Request<Body>, PayloadError> {
    RequestBuilder::<FakeValueProvider>::default().build_request(method, uri, fields)
}

#[track_caller]
pub fn build_request_with_recorder(
    method: Method,
    uri: &str,
    fields: &[FieldDef],
) -> (Request<Body>, ResponseRecorder) {
    RequestBuilder::<FakeValueProvider>::default().build_request_with_recorder(method, uri, fields)
}

/// Request with an arbitrary JSON body, bypassing schemas.
///
/// `None` produces a request without a body; the content type is set
/// either way.
///
/// # Panics
///
/// Aborts the calling test if `body` cannot be encoded or the URI is invalid.
#[track_caller]
pub fn build_json_request<T: Serialize + ?Sized>(
    method: Method,
    uri: &str,
    body: Option<&T>,
) -> Request<Body> {
    let body = match body {
        Some(value) => match serde_json::to_vec(value) {
            Ok(bytes) => Body::from(bytes),
            Err(err) => panic!("failed to marshal JSON: {}", err),
        },
        None => Body::empty(),
    };

    match Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(body)
    {
        Ok(request) => request,
        Err(err) => panic!("failed to create request: {}", err),
    }
}
