// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query, page and result types shared by every engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseFilterError;

/// Abstract image size filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
	Small,
	Medium,
	Large,
}

impl ImageSize {
	pub const ALL: [ImageSize; 3] = [ImageSize::Small, ImageSize::Medium, ImageSize::Large];

	pub fn as_str(&self) -> &'static str {
		match self {
			ImageSize::Small => "small",
			ImageSize::Medium => "medium",
			ImageSize::Large => "large",
		}
	}
}

impl fmt::Display for ImageSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ImageSize {
	type Err = ParseFilterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| ParseFilterError {
				kind: "size",
				value: s.to_string(),
				expected: "small, medium, large",
			})
	}
}

/// Abstract image style filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
	Photo,
	Graphics,
}

impl ImageStyle {
	pub const ALL: [ImageStyle; 2] = [ImageStyle::Photo, ImageStyle::Graphics];

	pub fn as_str(&self) -> &'static str {
		match self {
			ImageStyle::Photo => "photo",
			ImageStyle::Graphics => "graphics",
		}
	}
}

impl fmt::Display for ImageStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ImageStyle {
	type Err = ParseFilterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| ParseFilterError {
				kind: "style",
				value: s.to_string(),
				expected: "photo, graphics",
			})
	}
}

/// How the pages of one query are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
	/// One page at a time, in offset order.
	Sequential,
	/// Every page in flight at once, joined before returning.
	#[default]
	Concurrent,
}

impl FetchMode {
	pub fn from_concurrent(concurrent: bool) -> Self {
		if concurrent {
			FetchMode::Concurrent
		} else {
			FetchMode::Sequential
		}
	}
}

/// A logical image query. Built fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
	pub text: String,
	pub size: Option<ImageSize>,
	pub style: Option<ImageStyle>,
	pub num_results: u32,
}

impl Query {
	pub const DEFAULT_NUM_RESULTS: u32 = 100;

	/// Creates a query for medium-sized photos, 100 results.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			size: Some(ImageSize::Medium),
			style: Some(ImageStyle::Photo),
			num_results: Self::DEFAULT_NUM_RESULTS,
		}
	}

	pub fn with_size(mut self, size: Option<ImageSize>) -> Self {
		self.size = size;
		self
	}

	pub fn with_style(mut self, style: Option<ImageStyle>) -> Self {
		self.style = style;
		self
	}

	pub fn with_num_results(mut self, num_results: u32) -> Self {
		self.num_results = num_results;
		self
	}
}

/// One bounded request: `count` results starting at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
	pub offset: u32,
	pub count: u32,
}

/// Vendor result identifier. Some gateways hand out integers, others GUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageId {
	Numeric(i64),
	Opaque(String),
}

impl fmt::Display for ImageId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ImageId::Numeric(id) => write!(f, "{id}"),
			ImageId::Opaque(id) => f.write_str(id),
		}
	}
}

impl From<i64> for ImageId {
	fn from(id: i64) -> Self {
		ImageId::Numeric(id)
	}
}

impl From<&str> for ImageId {
	fn from(id: &str) -> Self {
		ImageId::Opaque(id.to_string())
	}
}

/// The normalized result every engine returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
	pub url: String,
	pub image_id: ImageId,
	pub title: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn size_and_style_parse_case_insensitively() {
		assert_eq!("Large".parse::<ImageSize>().unwrap(), ImageSize::Large);
		assert_eq!(" small ".parse::<ImageSize>().unwrap(), ImageSize::Small);
		assert_eq!("GRAPHICS".parse::<ImageStyle>().unwrap(), ImageStyle::Graphics);
	}

	#[test]
	fn unknown_tokens_are_rejected() {
		let err = "huge".parse::<ImageSize>().unwrap_err();
		assert_eq!(err.kind, "size");
		assert!(err.to_string().contains("huge"));

		let err = "clipart".parse::<ImageStyle>().unwrap_err();
		assert!(err.to_string().contains("photo, graphics"));
	}

	#[test]
	fn query_defaults_follow_engine_defaults() {
		let query = Query::new("cats");
		assert_eq!(query.size, Some(ImageSize::Medium));
		assert_eq!(query.style, Some(ImageStyle::Photo));
		assert_eq!(query.num_results, 100);

		let query = query.with_size(None).with_num_results(7);
		assert_eq!(query.size, None);
		assert_eq!(query.num_results, 7);
	}

	#[test]
	fn image_result_serializes_three_fields() {
		let result = ImageResult {
			url: "http://x".to_string(),
			image_id: ImageId::from(7),
			title: "t".to_string(),
		};
		let json = serde_json::to_value(&result).unwrap();
		assert_eq!(
			json,
			serde_json::json!({"url": "http://x", "image_id": 7, "title": "t"})
		);
	}

	#[test]
	fn image_id_accepts_numbers_and_strings() {
		let numeric: ImageId = serde_json::from_str("7").unwrap();
		assert_eq!(numeric, ImageId::Numeric(7));

		let opaque: ImageId = serde_json::from_str("\"a1b2-c3\"").unwrap();
		assert_eq!(opaque.to_string(), "a1b2-c3");
	}

	#[test]
	fn fetch_mode_from_flag() {
		assert_eq!(FetchMode::from_concurrent(true), FetchMode::Concurrent);
		assert_eq!(FetchMode::from_concurrent(false), FetchMode::Sequential);
	}
}
