//! Assertions over captured responses.
//!
//! Every check here aborts the running test on failure by panicking, with a
//! message that carries the expected and actual values and the raw body.
//! They are meant for `#[test]` code only.

use crate::adapters::recorder::ResponseRecorder;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decode the first JSON value in the body, ignoring anything after it.
fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::Deserializer::from_slice(bytes).into_iter::<T>().next() {
        Some(result) => result,
        // Empty body: let the regular parser produce the EOF error
        None => serde_json::from_slice(bytes),
    }
}

#[track_caller]
pub fn decode_body<T: DeserializeOwned>(recorder: &ResponseRecorder) -> T {
    match decode_first(recorder.body()) {
        Ok(value) => value,
        Err(err) => panic!(
            "failed to decode response: {}. Body: {}",
            err,
            recorder.body_text()
        ),
    }
}

/// Decode the body as a generic JSON object.
#[track_caller]
pub fn decode_error_body(recorder: &ResponseRecorder) -> Map<String, Value> {
    decode_body(recorder)
}

/// Require `details.<field>` to be a string containing `expected`.
#[track_caller]
pub fn assert_error_field(recorder: &ResponseRecorder, field: &str, expected: &str) {
    let response = decode_error_body(recorder);

    let details = match response.get("details").and_then(Value::as_object) {
        Some(details) => details,
        None => panic!(
            "response should have details field. Body: {}",
            recorder.body_text()
        ),
    };

    let message = match details.get(field).and_then(Value::as_str) {
        Some(message) => message,
        None => panic!(
            "field {} should exist in details. Details: {}",
            field,
            Value::Object(details.clone())
        ),
    };

    if !message.contains(expected) {
        panic!(
            "error message mismatch for field {}: {:?} does not contain {:?}",
            field, message, expected
        );
    }
}

#[track_caller]
pub fn assert_status(recorder: &ResponseRecorder, expected: StatusCode) {
    if recorder.status() != expected {
        let body = match decode_first::<Value>(recorder.body()) {
            Ok(value) => value.to_string(),
            Err(_) => recorder.body_text().into_owned(),
        };
        panic!(
            "expected status {} but got {}. Body: {}",
            expected.as_u16(),
            recorder.status().as_u16(),
            body
        );
    }
}

/// Require `201 Created` and a non-empty string `id`, and return it.
#[track_caller]
pub fn assert_created(recorder: &ResponseRecorder) -> String {
    assert_status(recorder, StatusCode::CREATED);

    let response = decode_error_body(recorder);
    match response.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::String(_)) => panic!("id should not be empty"),
        Some(other) => panic!("id should be a string, got {}", other),
        None => panic!(
            "response should have id field. Body: {}",
            recorder.body_text()
        ),
    }
}

#[track_caller]
pub fn assert_no_content(recorder: &ResponseRecorder) {
    assert_status(recorder, StatusCode::NO_CONTENT);
}

/// Require `expected_status` and a top-level `error` string containing
/// `expected`.
#[track_caller]
pub fn assert_error_message(recorder: &ResponseRecorder, expected_status: StatusCode, expected: &str) {
    assert_status(recorder, expected_status);

    let response = decode_error_body(recorder);
    let message = match response.get("error").and_then(Value::as_str) {
        Some(message) => message,
        None => panic!(
            "response should have error field. Body: {}",
            recorder.body_text()
        ),
    };

    if !message.contains(expected) {
        panic!("error message {:?} does not contain {:?}", message, expected);
    }
}
