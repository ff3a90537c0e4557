//! # Veille
//!
//! A one-shot RSS/Atom digest mailer: fetch a configured list of feeds,
//! keep the entries published within a trailing time window, and send the
//! result as a single HTML email.
//!
//! ## Architecture
//!
//! The pipeline is linear, executed once per invocation:
//!
//! ```text
//! Config → Fetcher → Normalizer → Window filter → Digest → Mailer
//! ```
//!
//! - [`fetcher`]: HTTP retrieval of feed documents
//! - [`normalizer`]: RSS/Atom parsing and timestamp normalization
//! - [`window`]: trailing-window recency filter
//! - [`digest`]: HTML/plain-text rendering
//! - [`mailer`]: SMTP delivery via lettre
//!
//! Feeds are fetched sequentially; a failing feed is logged and skipped.
//! There is no persistence and no state across runs. A send failure is
//! fatal and terminates the process with a non-zero status.
//!
//! ## Quick Start
//!
//! ```bash
//! # Send the digest
//! veille run --config veille.toml
//!
//! # Render the digest to stdout without sending
//! veille preview --config veille.toml
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the pipeline
/// components: fetcher, normalizer, mailer.
pub mod app;

/// Command-line interface using clap.
///
/// - `run --config <path>` - Fetch feeds and send the digest
/// - `preview --config <path>` - Print the digest without sending
pub mod cli;

/// Configuration loading.
///
/// A TOML file, passed explicitly on the command line: feed URLs, the
/// recency window in hours, and SMTP settings.
pub mod config;

/// Digest rendering.
///
/// Produces the HTML body and a plain-text alternative. All feed-derived
/// text is escaped before embedding.
pub mod digest;

/// Core domain model: [`FeedItem`](domain::FeedItem).
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for feed retrieval
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Outbound mail.
///
/// - [`Mailer`](mailer::Mailer): async trait for digest delivery
/// - [`SmtpMailer`](mailer::SmtpMailer): lettre SMTP implementation
pub mod mailer;

/// Feed parsing and normalization.
///
/// Converts RSS and Atom documents into [`FeedItem`](domain::FeedItem)
/// structs, resolving each entry's timestamp from the available
/// representations.
pub mod normalizer;

/// Trailing-window recency filter.
pub mod window;
