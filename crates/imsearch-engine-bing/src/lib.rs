// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Bing Image Search engine for imsearch.
//!
//! Talks to the Azure DataMarket Bing gateway (`.../Bing/Search/v1/Image`)
//! and implements [`imsearch_engine_core::ImageSearchEngine`], so queries
//! larger than one page are split and merged by the shared paginator.

pub mod client;
pub mod filters;
pub mod types;

pub use client::{BingConfig, BingImageSearch, BING_PAGE_SIZE, DEFAULT_ENDPOINT};
pub use filters::BingFilters;
pub use types::BingImage;
