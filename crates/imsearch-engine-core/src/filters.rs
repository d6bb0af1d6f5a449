// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Lookup from abstract filter values to an engine's native tokens.

/// Fixed mapping from an abstract value to the engine's token.
pub type FilterTable<K> = &'static [(K, &'static str)];

/// Look `value` up in `table`.
///
/// Absent input and values the engine does not list both yield `None`, which
/// callers treat as "no filter". This never fails.
pub fn to_native<K>(table: FilterTable<K>, value: Option<K>) -> Option<&'static str>
where
	K: PartialEq + Copy,
{
	let value = value?;
	table
		.iter()
		.find(|(key, _)| *key == value)
		.map(|(_, native)| *native)
}

/// The abstract values an engine can map, in table order.
pub fn supported<K: Copy>(table: FilterTable<K>) -> Vec<K> {
	table.iter().map(|(key, _)| *key).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{ImageSize, ImageStyle};

	const SIZES: FilterTable<ImageSize> = &[
		(ImageSize::Small, "Small"),
		(ImageSize::Medium, "Medium"),
		(ImageSize::Large, "Large"),
	];

	// An engine that only knows photos.
	const PHOTO_ONLY: FilterTable<ImageStyle> = &[(ImageStyle::Photo, "Photo")];

	#[test]
	fn mapped_value_returns_native_token() {
		assert_eq!(to_native(SIZES, Some(ImageSize::Large)), Some("Large"));
	}

	#[test]
	fn absent_value_is_no_filter() {
		assert_eq!(to_native(SIZES, None), None);
	}

	#[test]
	fn unmapped_value_is_no_filter() {
		assert_eq!(to_native(PHOTO_ONLY, Some(ImageStyle::Graphics)), None);
	}

	#[test]
	fn supported_lists_table_keys_in_order() {
		assert_eq!(
			supported(SIZES),
			vec![ImageSize::Small, ImageSize::Medium, ImageSize::Large]
		);
		assert_eq!(supported(PHOTO_ONLY), vec![ImageStyle::Photo]);
	}
}
