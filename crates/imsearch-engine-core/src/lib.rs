// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Engine-neutral image search.
//!
//! A concrete engine (Bing, ...) implements [`ImageSearchEngine`]: it knows
//! how to map abstract filters to its own tokens, fetch one page of raw
//! records, and normalize a record. [`search`] drives any engine through a
//! query, splitting it into pages and stitching the results back together
//! in offset order.

pub mod engine;
pub mod error;
pub mod filters;
pub mod paginate;
pub mod types;

pub use engine::ImageSearchEngine;
pub use error::{EngineError, ParseFilterError};
pub use filters::{supported, to_native, FilterTable};
pub use paginate::{page_requests, plan_pages, search, search_with_mode};
pub use types::{FetchMode, ImageId, ImageResult, ImageSize, ImageStyle, PageRequest, Query};
