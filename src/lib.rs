//! # rsr
//!
//! Fetches a list of RSS/Atom feeds concurrently and merges their newest
//! entries into one reverse-chronological timeline.
//!
//! ## Architecture
//!
//! ```text
//! SourceList → Fetcher → FeedParser → Normalizer → merge → Timeline
//! ```
//!
//! A feed that fails to fetch or parse contributes no entries; it never
//! fails the run. The only fatal error is a source list that can't be read.
//!
//! ## Quick Start
//!
//! ```bash
//! # One feed URL per line
//! echo https://blog.rust-lang.org/feed.xml > feeds.txt
//!
//! # Print the merged timeline
//! rsr show
//!
//! # Keep 10 entries per feed, as JSON
//! MAX_ENTRIES=10 rsr show --json
//! ```

/// Application context and error handling.
///
/// [`AppContext::build_timeline`](app::AppContext::build_timeline) loads the
/// configured source list and runs the pipeline.
pub mod app;

/// Command-line interface using clap.
///
/// - `show [--json]` - Print the merged timeline
/// - `sources` - Print the configured source list
pub mod cli;

/// Configuration loaded from `~/.config/rsr/config.toml` and `MAX_ENTRIES`.
pub mod config;

/// Core domain models.
///
/// - [`SiteInfo`](domain::SiteInfo): Per-feed metadata
/// - [`Entry`](domain::Entry): One normalized feed entry
/// - [`Timeline`](domain::Timeline): Entries from all feeds, newest first
pub mod domain;

/// Concurrent HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for feed fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`ParallelFetcher`](fetcher::parallel::ParallelFetcher): One task per source, joined in order
pub mod fetcher;

/// Converts parsed feed entries into [`Entry`](domain::Entry) records.
pub mod normalizer;

/// Feed parsing with feed-rs and lenient date handling.
pub mod parser;

/// The fetch → parse → normalize → merge pipeline.
pub mod pipeline;

/// Line-delimited source list.
pub mod sources;

/// Merging per-feed entries into a [`Timeline`](domain::Timeline).
pub mod timeline;
