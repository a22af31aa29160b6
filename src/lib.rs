//! # fixturegen - declarative test payloads
//!
//! Describe a request body as a tree of typed fields, evaluate it into a
//! randomized JSON document, send it through an HTTP service and assert on
//! the response.
//!
//! ## Features
//!
//! - **Field schemas**: string, int, float, bool, UUID, static, fixed-length
//!   letters and nested object lists
//! - **Pluggable randomness**: thread-local or seeded providers built on `fake`
//! - **Request building**: `application/json` requests for any axum/tower service
//! - **Response assertions**: status codes, created ids and validation errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use axum::http::Method;
//! use fixturegen::adapters::recorder::dispatch;
//! use fixturegen::adapters::request_builder::build_request;
//! use fixturegen::adapters::response_asserter::assert_created;
//! use fixturegen::domain::FieldDef;
//!
//! async fn create_user(app: axum::Router) -> anyhow::Result<()> {
//!     let fields = vec![
//!         FieldDef::string("email", "{email}"),
//!         FieldDef::int("age").with_int_range(18, 30),
//!     ];
//!
//!     let request = build_request(Method::POST, "/users", &fields)?;
//!     let recorder = dispatch(app, request).await?;
//!     let id = assert_created(&recorder);
//!     println!("created {}", id);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: schemas, documents, the value-provider port and errors
//! - **Application**: schema evaluation and serialization
//! - **Adapters**: fake-data provider, request builder, recorder, assertions
//! - **Config**: settings and schema files for the `fixturegen` binary
//! - **Persistence**: read/write database connection bootstrap

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod persistence;
