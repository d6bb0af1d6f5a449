// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG-style config path resolution.

use std::path::PathBuf;

use crate::ConfigError;

/// Resolve the user config file: `$XDG_CONFIG_HOME/imsearch/config.toml`,
/// falling back to `~/.config/imsearch/config.toml`.
pub fn resolve_config_path() -> Result<PathBuf, ConfigError> {
	let config_home = match std::env::var_os("XDG_CONFIG_HOME") {
		Some(dir) if !dir.is_empty() => PathBuf::from(dir),
		_ => dirs::home_dir()
			.ok_or(ConfigError::HomeDirNotFound)?
			.join(".config"),
	};

	let path = config_home.join("imsearch/config.toml");
	tracing::debug!(path = %path.display(), "resolved config path");
	Ok(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn config_path_ends_with_imsearch_config() {
		let path = resolve_config_path().unwrap();
		assert!(path.ends_with("imsearch/config.toml"));
	}
}
