// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Wire types for the Bing gateway response.

use imsearch_engine_core::{ImageId, ImageResult};
use serde::Deserialize;

/// Response envelope: results live at `d.results`.
#[derive(Debug, Deserialize)]
pub(crate) struct BingEnvelope {
	pub d: BingResultSet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BingResultSet {
	pub results: Vec<BingImage>,
}

/// One image record. Other fields the gateway sends (thumbnails, sizes) are
/// ignored; these three are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BingImage {
	#[serde(rename = "MediaUrl")]
	pub media_url: String,
	#[serde(rename = "ID")]
	pub id: ImageId,
	#[serde(rename = "Title")]
	pub title: String,
}

impl From<BingImage> for ImageResult {
	fn from(image: BingImage) -> Self {
		ImageResult {
			url: image.media_url,
			image_id: image.id,
			title: image.title,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn record_maps_to_normalized_result() {
		let raw: BingImage =
			serde_json::from_value(json!({"MediaUrl": "http://x", "ID": 7, "Title": "t"})).unwrap();

		let result = ImageResult::from(raw);
		assert_eq!(
			result,
			ImageResult {
				url: "http://x".to_string(),
				image_id: ImageId::Numeric(7),
				title: "t".to_string(),
			}
		);
	}

	#[test]
	fn envelope_ignores_extra_fields() {
		let body = json!({
			"d": {
				"results": [{
					"__metadata": {"type": "ImageResult"},
					"ID": "0c9f6e2a-8a8e-4b1b-9f55-3f1c0b5b8a11",
					"Title": "tabby",
					"MediaUrl": "http://example.com/tabby.jpg",
					"Width": "640",
					"Thumbnail": {"MediaUrl": "http://example.com/thumb.jpg"}
				}],
				"__next": "https://api.datamarket.azure.com/..."
			}
		});

		let envelope: BingEnvelope = serde_json::from_value(body).unwrap();
		assert_eq!(envelope.d.results.len(), 1);
		assert_eq!(
			envelope.d.results[0].id,
			ImageId::from("0c9f6e2a-8a8e-4b1b-9f55-3f1c0b5b8a11")
		);
	}

	#[test]
	fn missing_required_key_is_rejected() {
		let err = serde_json::from_value::<BingImage>(json!({"ID": 1, "Title": "t"})).unwrap_err();
		assert!(err.to_string().contains("MediaUrl"));
	}
}
