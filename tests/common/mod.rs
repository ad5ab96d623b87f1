//! Common test infrastructure for Huegrid integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod app;

pub use app::{TestApp, TestResponse};

use axum::http::StatusCode;

/// Assert a 200 OK response, printing the body on failure.
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a specific status code, printing the body on failure.
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "unexpected status; body: {}",
        response.text()
    );
}
