// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `imsearch` binary: query the Bing image gateway from the command line.

mod args;
mod output;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use imsearch_common_config::{load_config, load_config_from, require_secret_env, BING_API_KEY_VAR};
use imsearch_engine_bing::{BingConfig, BingFilters, BingImageSearch};
use imsearch_engine_core::FetchMode;
use tracing_subscriber::EnvFilter;

use args::{Args, Command, SearchArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(args.default_log_level())),
		)
		.with_writer(std::io::stderr)
		.init();

	match &args.command {
		Command::Search(search) => run_search(&args, search).await,
		Command::Filters => {
			print!(
				"{}",
				output::render_filters(
					&BingFilters::supported_sizes(),
					&BingFilters::supported_styles()
				)
			);
			Ok(())
		}
		Command::Version => {
			println!("imsearch {}", env!("CARGO_PKG_VERSION"));
			Ok(())
		}
	}
}

async fn run_search(args: &Args, search: &SearchArgs) -> anyhow::Result<()> {
	let config = match &args.config {
		Some(path) => load_config_from(path),
		None => load_config(),
	}
	.context("failed to load configuration")?;

	let api_key = require_secret_env(BING_API_KEY_VAR)?;

	let mut bing_config = BingConfig::from(&config.bing);
	if search.sequential {
		bing_config.fetch_mode = FetchMode::Sequential;
	}

	tracing::debug!(
		endpoint = %bing_config.endpoint,
		timeout_ms = bing_config.timeout.as_millis() as u64,
		fetch_mode = ?bing_config.fetch_mode,
		"configured Bing engine"
	);

	let engine = BingImageSearch::with_config(api_key, bing_config)?;
	let results = engine
		.query(&search.query, search.size, search.style, search.num_results)
		.await
		.with_context(|| format!("image search for '{}' failed", search.query))?;

	if results.len() < search.num_results as usize {
		tracing::info!(
			requested = search.num_results,
			returned = results.len(),
			"fewer results than requested"
		);
	}

	let rendered = if search.json {
		output::render_json(&results)?
	} else {
		output::render_lines(&results)
	};

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(rendered.as_bytes())?;
	stdout.flush()?;
	Ok(())
}
