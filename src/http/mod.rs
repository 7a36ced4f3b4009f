//! HTTP client module
//!
//! Provides the HTTP client used to fetch the directory.
//!
//! # Features
//!
//! - **Timeouts**: Every request is bounded by the configured timeout
//! - **Status Classification**: Non-success responses become `Error::HttpStatus`
//! - **Default Headers**: Headers and user agent applied to every request

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
