// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Bing Image Search client implementation.

use std::time::Duration;

use async_trait::async_trait;
use imsearch_common_config::settings::{
	BING_MAX_PAGE_SIZE, DEFAULT_BING_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};
use imsearch_common_config::{BingSettings, SecretString};
use imsearch_engine_core::{
	search, EngineError, FetchMode, ImageResult, ImageSearchEngine, ImageSize,
	ImageStyle, PageRequest, Query,
};
use reqwest::{Client, Url};
use tracing::{debug, error, instrument, trace};

use crate::filters::BingFilters;
use crate::types::{BingEnvelope, BingImage};

pub const DEFAULT_ENDPOINT: &str = DEFAULT_BING_ENDPOINT;
const IMAGE_FUNCTION: &str = "Image";
const ENGINE_NAME: &str = "bing";
const QUOTA_WORDS: &[&str] = &["quota", "rate", "limit", "limited", "throttled"];

/// Largest `$top` the gateway honours.
pub const BING_PAGE_SIZE: u32 = BING_MAX_PAGE_SIZE;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Connection settings for [`BingImageSearch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingConfig {
	pub endpoint: String,
	/// Bound on each page request.
	pub timeout: Duration,
	/// Clamped to `1..=BING_PAGE_SIZE`.
	pub page_size: u32,
	pub fetch_mode: FetchMode,
}

impl Default for BingConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			timeout: REQUEST_TIMEOUT,
			page_size: BING_PAGE_SIZE,
			fetch_mode: FetchMode::Concurrent,
		}
	}
}

impl From<&BingSettings> for BingConfig {
	fn from(settings: &BingSettings) -> Self {
		Self {
			endpoint: settings.endpoint.clone(),
			timeout: settings.timeout(),
			page_size: settings.page_size,
			fetch_mode: FetchMode::from_concurrent(settings.concurrent),
		}
	}
}

/// Client for the Bing Image Search gateway.
#[derive(Debug, Clone)]
pub struct BingImageSearch {
	http_client: Client,
	api_key: SecretString,
	image_url: Url,
	page_size: u32,
	fetch_mode: FetchMode,
}

impl BingImageSearch {
	/// Creates a client with the default endpoint, 10 s timeout and
	/// concurrent page dispatch.
	pub fn new(api_key: SecretString) -> Result<Self, EngineError> {
		Self::with_config(api_key, BingConfig::default())
	}

	pub fn with_config(api_key: SecretString, config: BingConfig) -> Result<Self, EngineError> {
		let http_client = imsearch_common_http::new_client_with_timeout(config.timeout)
			.map_err(|e| EngineError::Setup(format!("failed to build HTTP client: {e}")))?;

		Ok(Self {
			http_client,
			api_key,
			image_url: image_url(&config.endpoint)?,
			page_size: config.page_size.clamp(1, BING_PAGE_SIZE),
			fetch_mode: config.fetch_mode,
		})
	}

	/// Sets how the pages of a query are dispatched.
	pub fn with_fetch_mode(mut self, fetch_mode: FetchMode) -> Self {
		self.fetch_mode = fetch_mode;
		self
	}

	/// Search for up to `num_results` images.
	///
	/// Returns fewer results when pages fail at the transport level or the
	/// gateway runs out of matches.
	pub async fn query(
		&self,
		text: &str,
		size: Option<ImageSize>,
		style: Option<ImageStyle>,
		num_results: u32,
	) -> Result<Vec<ImageResult>, EngineError> {
		let query = Query::new(text)
			.with_size(size)
			.with_style(style)
			.with_num_results(num_results);
		search(self, &query).await
	}

	async fn send_page(&self, params: &[(&'static str, String)]) -> Result<String, EngineError> {
		let response = self
			.http_client
			.get(self.image_url.clone())
			.basic_auth("", Some(self.api_key.expose()))
			.query(params)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					return EngineError::Timeout;
				}
				EngineError::transport(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Bing");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();

			if status_code == 401 || status_code == 403 {
				if mentions_quota(&body) {
					error!(status = status_code, "Rate limit exceeded");
					return Err(EngineError::RateLimited);
				}
				error!(status = status_code, "Unauthorized request");
				return Err(EngineError::Unauthorized);
			}

			if status_code == 429 {
				error!(status = status_code, "Rate limit exceeded");
				return Err(EngineError::RateLimited);
			}

			error!(status = status_code, body = %body, "Bing API error");
			return Err(EngineError::ApiError {
				status: status_code,
				message: body,
			});
		}

		response.text().await.map_err(|e| {
			if e.is_timeout() {
				return EngineError::Timeout;
			}
			EngineError::transport(e)
		})
	}
}

#[async_trait]
impl ImageSearchEngine for BingImageSearch {
	type Filters = BingFilters;
	type Record = BingImage;

	fn name(&self) -> &'static str {
		ENGINE_NAME
	}

	fn page_size(&self) -> u32 {
		self.page_size
	}

	fn fetch_mode(&self) -> FetchMode {
		self.fetch_mode
	}

	fn supported_sizes(&self) -> Vec<ImageSize> {
		BingFilters::supported_sizes()
	}

	fn supported_styles(&self) -> Vec<ImageStyle> {
		BingFilters::supported_styles()
	}

	fn map_filters(&self, size: Option<ImageSize>, style: Option<ImageStyle>) -> BingFilters {
		BingFilters::new(size, style)
	}

	#[instrument(skip(self, filters, page), fields(offset = page.offset, count = page.count))]
	async fn fetch_page(
		&self,
		query: &str,
		filters: &BingFilters,
		page: PageRequest,
	) -> Result<Vec<BingImage>, EngineError> {
		let params = page_params(query, filters, page);
		debug!(url = %self.image_url, "Sending page request to Bing");
		trace!(?params, "Page parameters");

		let body = self.send_page(&params).await?;
		trace!(body = %body, "Response body");

		let envelope: BingEnvelope = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Bing response");
			EngineError::InvalidResponse {
				engine: ENGINE_NAME,
				message: format!("JSON parse error: {e}"),
			}
		})?;

		Ok(envelope.d.results)
	}

	fn normalize(&self, record: BingImage) -> ImageResult {
		record.into()
	}
}

/// Query parameters for one page. Built fresh on every call.
pub(crate) fn page_params(
	query: &str,
	filters: &BingFilters,
	page: PageRequest,
) -> Vec<(&'static str, String)> {
	let mut params = vec![("$format", "JSON".to_string())];
	if let Some(image_filters) = filters.image_filters() {
		params.push(("ImageFilters", image_filters));
	}
	params.push(("$skip", page.offset.to_string()));
	params.push(("$top", page.count.to_string()));
	params.push(("Query", quote(query)));
	params
}

/// OData string literal: single-quoted, embedded quotes doubled.
fn quote(text: &str) -> String {
	format!("'{}'", text.replace('\'', "''"))
}

/// Whether a 401/403 body reports an exhausted quota rather than a bad key.
fn mentions_quota(body: &str) -> bool {
	body.split(|c: char| !c.is_ascii_alphanumeric())
		.any(|word| QUOTA_WORDS.iter().any(|quota| word.eq_ignore_ascii_case(quota)))
}

fn image_url(endpoint: &str) -> Result<Url, EngineError> {
	let base = if endpoint.ends_with('/') {
		Url::parse(endpoint)
	} else {
		Url::parse(&format!("{endpoint}/"))
	};

	base
		.and_then(|base| base.join(IMAGE_FUNCTION))
		.map_err(|e| EngineError::Setup(format!("invalid Bing endpoint '{endpoint}': {e}")))
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn key() -> SecretString {
		SecretString::new("k".to_string())
	}

	fn client() -> BingImageSearch {
		BingImageSearch::new(SecretString::new("test-api-key".to_string())).unwrap()
	}

	#[test]
	fn test_client_creation() {
		let client = client();
		assert_eq!(client.api_key.expose(), "test-api-key");
		assert_eq!(
			client.image_url.as_str(),
			"https://api.datamarket.azure.com/Data.ashx/Bing/Search/v1/Image"
		);
		assert_eq!(client.page_size(), 50);
		assert_eq!(client.fetch_mode(), FetchMode::Concurrent);
	}

	#[test]
	fn test_endpoint_without_trailing_slash() {
		let config = BingConfig {
			endpoint: "http://127.0.0.1:8080/bing".to_string(),
			..Default::default()
		};
		let client = BingImageSearch::with_config(key(), config).unwrap();
		assert_eq!(client.image_url.as_str(), "http://127.0.0.1:8080/bing/Image");
	}

	#[test]
	fn test_invalid_endpoint_is_setup_error() {
		let config = BingConfig {
			endpoint: "not a url".to_string(),
			..Default::default()
		};
		let err = BingImageSearch::with_config(key(), config).unwrap_err();
		assert!(matches!(err, EngineError::Setup(_)));
	}

	#[test]
	fn test_page_size_is_clamped() {
		let config = BingConfig {
			page_size: 500,
			..Default::default()
		};
		let client = BingImageSearch::with_config(key(), config).unwrap();
		assert_eq!(client.page_size(), BING_PAGE_SIZE);
	}

	#[test]
	fn test_config_from_settings() {
		let settings = BingSettings {
			concurrent: false,
			timeout_secs: 4,
			..Default::default()
		};
		let config = BingConfig::from(&settings);
		assert_eq!(config.fetch_mode, FetchMode::Sequential);
		assert_eq!(config.timeout, Duration::from_secs(4));
		assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
	}

	#[test]
	fn test_with_fetch_mode() {
		let client = client().with_fetch_mode(FetchMode::Sequential);
		assert_eq!(client.fetch_mode(), FetchMode::Sequential);
	}

	#[test]
	fn test_supports_every_abstract_filter() {
		let client = client();
		assert_eq!(client.supported_sizes(), ImageSize::ALL.to_vec());
		assert_eq!(client.supported_styles(), ImageStyle::ALL.to_vec());
	}

	#[test]
	fn test_page_params_with_filters() {
		let filters = BingFilters::new(Some(ImageSize::Small), Some(ImageStyle::Photo));
		let params = page_params("cats", &filters, PageRequest { offset: 50, count: 10 });
		assert_eq!(
			params,
			vec![
				("$format", "JSON".to_string()),
				("ImageFilters", "'Size:Small+StylePhoto'".to_string()),
				("$skip", "50".to_string()),
				("$top", "10".to_string()),
				("Query", "'cats'".to_string()),
			]
		);
	}

	#[test]
	fn test_page_params_without_filters() {
		let page = PageRequest { offset: 0, count: 5 };
		let params = page_params("cats", &BingFilters::default(), page);
		assert!(params.iter().all(|(name, _)| *name != "ImageFilters"));
		assert_eq!(params.len(), 4);
	}

	#[test]
	fn test_query_text_is_quoted() {
		assert_eq!(quote("tabby cats"), "'tabby cats'");
		assert_eq!(quote("o'malley"), "'o''malley'");
	}

	#[test]
	fn test_quota_words_match_whole_words_only() {
		assert!(mentions_quota("Insufficient balance: quota exceeded"));
		assert!(mentions_quota("Rate limit is exceeded. Try again later."));
		assert!(mentions_quota("Request THROTTLED"));
		assert!(!mentions_quota("Could not generate an accurate token"));
		assert!(!mentions_quota("The authorization type you provided is not supported"));
		assert!(!mentions_quota("Unlimited plan required"));
		assert!(!mentions_quota(""));
	}

	proptest! {
		#[test]
		fn test_page_params_mirror_page_request(
			text in "[a-z' ]{0,24}",
			offset in 0u32..10_000,
			count in 1u32..=BING_PAGE_SIZE,
		) {
			let filters = BingFilters::new(Some(ImageSize::Large), None);
			let params = page_params(&text, &filters, PageRequest { offset, count });
			let value = |name: &str| {
				params
					.iter()
					.find(|(key, _)| *key == name)
					.map(|(_, value)| value.clone())
			};

			prop_assert_eq!(value("$format"), Some("JSON".to_string()));
			prop_assert_eq!(value("$skip"), Some(offset.to_string()));
			prop_assert_eq!(value("$top"), Some(count.to_string()));
			prop_assert_eq!(value("ImageFilters"), Some("'Size:Large'".to_string()));

			let quoted = value("Query").unwrap_or_default();
			prop_assert!(quoted.len() >= 2);
			prop_assert!(quoted.starts_with('\'') && quoted.ends_with('\''));
			let inner = &quoted[1..quoted.len() - 1];
			prop_assert_eq!(inner.replace("''", "'"), text.clone());
			prop_assert_eq!(inner.matches('\'').count() % 2, 0);
		}
	}

	#[test]
	fn test_debug_does_not_leak_api_key() {
		let debug = format!("{:?}", client());
		assert!(!debug.contains("test-api-key"));
	}
}
