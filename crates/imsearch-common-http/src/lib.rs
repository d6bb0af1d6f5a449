// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for imsearch.
//!
//! Every engine builds its `reqwest::Client` through this crate so requests
//! carry the same User-Agent and a per-request timeout.

mod client;

pub use client::{builder, new_client_with_timeout, user_agent, ClientError};
