// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration primitives for imsearch.
//!
//! - [`Secret<T>`]: wrapper that keeps API keys out of logs and config dumps
//! - [`load_secret_env`] / [`require_secret_env`]: `VAR` / `VAR_FILE` loading
//! - [`SearchConfig`]: engine settings from `config.toml` plus env overrides

pub mod env;
pub mod error;
pub mod paths;
pub mod secret;
pub mod settings;

pub use env::{load_secret_env, require_secret_env, RequiredSecretError, SecretEnvError};
pub use error::ConfigError;
pub use paths::resolve_config_path;
pub use secret::{Secret, SecretString, REDACTED};
pub use settings::{load_config, load_config_from, BingSettings, SearchConfig};

/// Environment variable holding the Bing API key (or `BING_API_KEY_FILE`).
pub const BING_API_KEY_VAR: &str = "BING_API_KEY";
