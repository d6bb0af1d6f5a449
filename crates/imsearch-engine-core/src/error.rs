// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types shared by all engines.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors an engine can report for a page request or a whole query.
///
/// Transport failures ([`EngineError::Transport`], [`EngineError::Timeout`])
/// are absorbed by the pagination driver: the page contributes no results.
/// Everything else aborts the query.
#[derive(Debug, Error)]
pub enum EngineError {
	/// Connection, DNS, TLS or body-read failure.
	#[error("Transport error: {0}")]
	Transport(#[source] BoxError),

	/// The per-request timeout elapsed.
	#[error("Request timed out")]
	Timeout,

	#[error("Invalid API key")]
	Unauthorized,

	#[error("Rate limit exceeded")]
	RateLimited,

	/// The vendor answered with a body we cannot map (bad JSON, missing keys).
	#[error("Invalid response from {engine}: {message}")]
	InvalidResponse { engine: &'static str, message: String },

	/// Non-success HTTP status not covered above.
	#[error("API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// The engine could not be constructed (HTTP client, bad endpoint).
	#[error("Engine setup failed: {0}")]
	Setup(String),
}

impl EngineError {
	pub fn transport(err: impl Into<BoxError>) -> Self {
		Self::Transport(err.into())
	}

	/// Whether this failure should degrade the page to empty rather than fail
	/// the query.
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Transport(_) | Self::Timeout)
	}
}

/// An abstract size or style token that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown image {kind} '{value}' (expected one of: {expected})")]
pub struct ParseFilterError {
	pub kind: &'static str,
	pub value: String,
	pub expected: &'static str,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_transport_failures_degrade() {
		let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
		assert!(EngineError::transport(io).is_transport());
		assert!(EngineError::Timeout.is_transport());

		assert!(!EngineError::Unauthorized.is_transport());
		assert!(!EngineError::RateLimited.is_transport());
		assert!(!EngineError::InvalidResponse {
			engine: "bing",
			message: "missing field `MediaUrl`".to_string(),
		}
		.is_transport());
		assert!(!EngineError::ApiError {
			status: 503,
			message: String::new(),
		}
		.is_transport());
	}
}
