// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client construction with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Error raised when the TLS backend or resolver cannot be initialised.
pub type ClientError = reqwest::Error;

/// Creates a new HTTP client builder with the standard imsearch User-Agent.
///
/// Use this when an engine needs more than a timeout (e.g. proxies).
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a client whose every request is bounded by `timeout`.
///
/// The timeout covers connect, send and body read for a single request;
/// there is no retry layered on top.
pub fn new_client_with_timeout(timeout: Duration) -> Result<Client, ClientError> {
	builder().timeout(timeout).build()
}

/// Returns the standard User-Agent string: `imsearch/{version}`.
pub fn user_agent() -> String {
	format!("imsearch/{}", env!("CARGO_PKG_VERSION"))
}
