// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The capability every image search backend implements.

use async_trait::async_trait;

use crate::error::EngineError;
use crate::types::{FetchMode, ImageResult, ImageSize, ImageStyle, PageRequest};

/// An image search backend that [`crate::search`] can drive.
///
/// Implementations hold only configuration; every call receives its own
/// query text, filters and page, so one engine can serve concurrent queries.
#[async_trait]
pub trait ImageSearchEngine: Send + Sync {
	/// Engine-native filter parameters derived from the abstract ones.
	type Filters: Send + Sync;
	/// One raw record as returned by the vendor.
	type Record: Send;

	fn name(&self) -> &'static str;

	/// Maximum results the vendor returns for one request.
	fn page_size(&self) -> u32;

	fn fetch_mode(&self) -> FetchMode;

	fn supported_sizes(&self) -> Vec<ImageSize>;

	fn supported_styles(&self) -> Vec<ImageStyle>;

	/// Values the engine does not support map to "no filter".
	fn map_filters(&self, size: Option<ImageSize>, style: Option<ImageStyle>) -> Self::Filters;

	/// Fetch `page.count` raw records starting at `page.offset`.
	async fn fetch_page(
		&self,
		query: &str,
		filters: &Self::Filters,
		page: PageRequest,
	) -> Result<Vec<Self::Record>, EngineError>;

	fn normalize(&self, record: Self::Record) -> ImageResult;
}
