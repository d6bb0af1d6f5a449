// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Rendering results for the terminal.

use std::fmt::Write;

use imsearch_engine_core::{ImageResult, ImageSize, ImageStyle};

/// One `url<TAB>image_id<TAB>title` line per result.
pub fn render_lines(results: &[ImageResult]) -> String {
	let mut out = String::new();
	for result in results {
		// Titles occasionally carry tabs or newlines; keep one result per line.
		let title: String = result
			.title
			.chars()
			.map(|c| if c == '\t' || c == '\n' || c == '\r' { ' ' } else { c })
			.collect();
		let _ = writeln!(out, "{}\t{}\t{}", result.url, result.image_id, title);
	}
	out
}

pub fn render_json(results: &[ImageResult]) -> serde_json::Result<String> {
	let mut json = serde_json::to_string_pretty(results)?;
	json.push('\n');
	Ok(json)
}

pub fn render_filters(sizes: &[ImageSize], styles: &[ImageStyle]) -> String {
	let join = |items: Vec<&str>| items.join(", ");
	format!(
		"sizes:  {}\nstyles: {}\n",
		join(sizes.iter().map(ImageSize::as_str).collect()),
		join(styles.iter().map(ImageStyle::as_str).collect()),
	)
}
