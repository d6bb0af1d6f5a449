// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Bing `ImageFilters` tokens.

use imsearch_engine_core::{supported, to_native, FilterTable, ImageSize, ImageStyle};

pub(crate) const SIZES: FilterTable<ImageSize> = &[
	(ImageSize::Small, "Small"),
	(ImageSize::Medium, "Medium"),
	(ImageSize::Large, "Large"),
];

pub(crate) const STYLES: FilterTable<ImageStyle> = &[
	(ImageStyle::Photo, "Photo"),
	(ImageStyle::Graphics, "Graphics"),
];

/// Native size/style tokens for one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BingFilters {
	pub size: Option<&'static str>,
	pub style: Option<&'static str>,
}

impl BingFilters {
	pub fn new(size: Option<ImageSize>, style: Option<ImageStyle>) -> Self {
		Self {
			size: to_native(SIZES, size),
			style: to_native(STYLES, style),
		}
	}

	pub fn supported_sizes() -> Vec<ImageSize> {
		supported(SIZES)
	}

	pub fn supported_styles() -> Vec<ImageStyle> {
		supported(STYLES)
	}

	/// The quoted `ImageFilters` value, e.g. `'Size:Small+StylePhoto'`, or
	/// `None` when no filter applies.
	pub fn image_filters(&self) -> Option<String> {
		let parts: Vec<String> = [
			self.size.map(|size| format!("Size:{size}")),
			// The gateway takes the style token without a separator.
			self.style.map(|style| format!("Style{style}")),
		]
		.into_iter()
		.flatten()
		.collect();

		if parts.is_empty() {
			None
		} else {
			Some(format!("'{}'", parts.join("+")))
		}
	}
}
