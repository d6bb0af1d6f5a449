// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Engine settings loaded from `config.toml` with environment overrides.
//!
//! Precedence (lowest to highest): built-in defaults, config file,
//! `IMSEARCH_BING_*` environment variables. A missing config file is not an
//! error; every field has a default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paths::resolve_config_path;

pub const DEFAULT_BING_ENDPOINT: &str =
	"https://api.datamarket.azure.com/Data.ashx/Bing/Search/v1/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Largest `$top` the Bing gateway accepts.
pub const BING_MAX_PAGE_SIZE: u32 = 50;

const ENV_ENDPOINT: &str = "IMSEARCH_BING_ENDPOINT";
const ENV_TIMEOUT_SECS: &str = "IMSEARCH_BING_TIMEOUT_SECS";
const ENV_CONCURRENT: &str = "IMSEARCH_BING_CONCURRENT";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
	pub bing: BingSettings,
}

/// Settings for the Bing image engine. The API key is deliberately absent;
/// it comes from `BING_API_KEY` / `BING_API_KEY_FILE` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BingSettings {
	pub endpoint: String,
	pub timeout_secs: u64,
	/// Dispatch all pages of a query at once instead of one after another.
	pub concurrent: bool,
	pub page_size: u32,
}

impl Default for BingSettings {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_BING_ENDPOINT.to_string(),
			timeout_secs: DEFAULT_TIMEOUT_SECS,
			concurrent: true,
			page_size: BING_MAX_PAGE_SIZE,
		}
	}
}

impl BingSettings {
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}
}

impl SearchConfig {
	/// Parse a TOML document. `path` is only used for error reporting.
	pub fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
		toml::from_str(contents).map_err(|source| ConfigError::TomlParse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Apply `IMSEARCH_BING_*` overrides read through `lookup`.
	pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(endpoint) = lookup(ENV_ENDPOINT) {
			self.bing.endpoint = endpoint;
		}

		if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
			self.bing.timeout_secs = raw
				.trim()
				.parse()
				.map_err(|_| {
					ConfigError::env(ENV_TIMEOUT_SECS, &raw, "a whole number of seconds")
				})?;
		}

		if let Some(raw) = lookup(ENV_CONCURRENT) {
			self.bing.concurrent = match raw.trim().to_ascii_lowercase().as_str() {
				"1" | "true" | "yes" | "on" => true,
				"0" | "false" | "no" | "off" => false,
				_ => return Err(ConfigError::env(ENV_CONCURRENT, &raw, "a boolean")),
			};
		}

		Ok(())
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.bing.endpoint.trim().is_empty() {
			return Err(ConfigError::validation("bing.endpoint must not be empty"));
		}
		if self.bing.timeout_secs == 0 {
			return Err(ConfigError::validation("bing.timeout_secs must be positive"));
		}
		if self.bing.page_size == 0 || self.bing.page_size > BING_MAX_PAGE_SIZE {
			return Err(ConfigError::validation(format!(
				"bing.page_size must be between 1 and {BING_MAX_PAGE_SIZE}"
			)));
		}
		Ok(())
	}
}

/// Load configuration from the user config path and the process environment.
pub fn load_config() -> Result<SearchConfig, ConfigError> {
	let path = resolve_config_path()?;
	load_config_from(&path)
}

/// Load configuration from an explicit file path and the process environment.
pub fn load_config_from(path: &Path) -> Result<SearchConfig, ConfigError> {
	let mut config = if path.exists() {
		let contents = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loaded config file");
		SearchConfig::from_toml(&contents, path)?
	} else {
		tracing::debug!(path = %path.display(), "no config file, using defaults");
		SearchConfig::default()
	};

	config.apply_env_overrides(|var| std::env::var(var).ok())?;
	config.validate()?;
	Ok(config)
}
