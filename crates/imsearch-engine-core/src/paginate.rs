// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Splits a query into pages, dispatches them, and stitches results together.

use futures::future::join_all;
use tracing::{debug, instrument, warn};

use crate::engine::ImageSearchEngine;
use crate::error::EngineError;
use crate::types::{FetchMode, ImageResult, PageRequest, Query};

/// Plan the page requests needed for `num_results` results.
///
/// Offsets are `0, page_size, 2 * page_size, ...`; every page asks for
/// `page_size` results except the last, which asks for the remainder.
pub fn plan_pages(num_results: u32, page_size: u32) -> Vec<PageRequest> {
	page_requests(num_results, page_size).collect()
}

/// Lazy form of [`plan_pages`].
pub fn page_requests(num_results: u32, page_size: u32) -> impl Iterator<Item = PageRequest> {
	debug_assert!(page_size > 0, "page_size must be positive");
	let page_size = page_size.max(1);

	(0..num_results)
		.step_by(page_size as usize)
		.map(move |offset| PageRequest {
			offset,
			count: page_size.min(num_results - offset),
		})
}

/// Run `query` against `engine` using the engine's configured fetch mode.
pub async fn search<E>(engine: &E, query: &Query) -> Result<Vec<ImageResult>, EngineError>
where
	E: ImageSearchEngine + ?Sized,
{
	search_with_mode(engine, query, engine.fetch_mode()).await
}

/// Run `query` against `engine`, dispatching pages according to `mode`.
///
/// Results are always in offset order. A page that fails with a transport
/// error contributes nothing; any other error fails the whole query.
#[instrument(
	skip(engine, query),
	fields(engine = engine.name(), query = %query.text, num_results = query.num_results)
)]
pub async fn search_with_mode<E>(
	engine: &E,
	query: &Query,
	mode: FetchMode,
) -> Result<Vec<ImageResult>, EngineError>
where
	E: ImageSearchEngine + ?Sized,
{
	let filters = engine.map_filters(query.size, query.style);
	let page_size = engine.page_size();
	debug!(
		pages = query.num_results.div_ceil(page_size.max(1)),
		?mode,
		"dispatching page requests"
	);

	let mut results = Vec::new();

	match mode {
		FetchMode::Sequential => {
			for page in page_requests(query.num_results, page_size) {
				let outcome = engine.fetch_page(&query.text, &filters, page).await;
				collect_page(engine, page, outcome, &mut results)?;
			}
		}
		FetchMode::Concurrent => {
			let pages = plan_pages(query.num_results, page_size);
			let outcomes = join_all(
				pages
					.iter()
					.map(|page| engine.fetch_page(&query.text, &filters, *page)),
			)
			.await;

			for (page, outcome) in pages.into_iter().zip(outcomes) {
				collect_page(engine, page, outcome, &mut results)?;
			}
		}
	}

	debug!(result_count = results.len(), "query completed");
	Ok(results)
}

fn collect_page<E>(
	engine: &E,
	page: PageRequest,
	outcome: Result<Vec<E::Record>, EngineError>,
	results: &mut Vec<ImageResult>,
) -> Result<(), EngineError>
where
	E: ImageSearchEngine + ?Sized,
{
	match outcome {
		Ok(records) => {
			debug!(offset = page.offset, received = records.len(), "page received");
			results.extend(records.into_iter().map(|record| engine.normalize(record)));
			Ok(())
		}
		Err(err) if err.is_transport() => {
			warn!(
				offset = page.offset,
				count = page.count,
				error = %err,
				"page request failed, skipping page"
			);
			Ok(())
		}
		Err(err) => Err(err),
	}
}
