// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use imsearch_engine_core::{ImageSize, ImageStyle, Query};

/// imsearch - image search over the Bing gateway.
#[derive(Parser, Debug)]
#[command(name = "imsearch", about = "Search for images via the Bing gateway", version)]
pub struct Args {
	/// Increase log verbosity (-v debug, -vv trace). RUST_LOG wins if set.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	pub verbose: u8,

	/// Config file to use instead of ~/.config/imsearch/config.toml
	#[arg(long, global = true, env = "IMSEARCH_CONFIG")]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Search for images. Needs BING_API_KEY or BING_API_KEY_FILE.
	Search(SearchArgs),
	/// List the size and style filters the engine understands
	Filters,
	/// Show version information
	Version,
}

#[derive(ClapArgs, Debug)]
pub struct SearchArgs {
	/// Search text
	pub query: String,

	/// Size filter: small, medium or large. Omit for any size.
	#[arg(long)]
	pub size: Option<ImageSize>,

	/// Style filter: photo or graphics. Omit for any style.
	#[arg(long)]
	pub style: Option<ImageStyle>,

	/// Maximum number of results
	#[arg(short = 'n', long, default_value_t = Query::DEFAULT_NUM_RESULTS)]
	pub num_results: u32,

	/// Fetch pages one after another instead of all at once
	#[arg(long)]
	pub sequential: bool,

	/// Print results as a JSON array
	#[arg(long)]
	pub json: bool,
}

impl Args {
	pub fn default_log_level(&self) -> &'static str {
		match self.verbose {
			0 => "warn",
			1 => "debug",
			_ => "trace",
		}
	}
}
