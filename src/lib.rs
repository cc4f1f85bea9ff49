//! # instafeed
//!
//! Fetches a user's media feed from a photo-sharing API and flattens every
//! item into a record a list view can render without null checks.
//!
//! ## Architecture
//!
//! ```text
//! Credentials → Fetcher → Normalizer → Loader → Sinks (list, indicator, errors)
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Load the feed once
//! INSTAFEED_ACCESS_TOKEN=... instafeed feed
//!
//! # Normalize a saved response
//! instafeed normalize response.json --json
//!
//! # Reload every five minutes
//! instafeed watch --interval 5m
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the fetcher,
/// credentials and normalizer, and builds loaders for a set of sinks.
pub mod app;

/// Command-line interface using clap, plus console sink implementations.
pub mod cli;

/// Configuration loaded from `~/.config/instafeed/config.toml`.
pub mod config;

/// Access-token lookup used once per load.
pub mod credentials;

/// Core domain models.
///
/// - [`RawFeedItem`](domain::RawFeedItem): provider item with optional fields
/// - [`NormalizedFeedItem`](domain::NormalizedFeedItem): total list record
/// - [`FeedRequestState`](domain::FeedRequestState): load lifecycle
/// - [`ErrorDescriptor`](domain::ErrorDescriptor): structured error triple
pub mod domain;

/// HTTP fetching of the feed endpoint.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait, resolves once per request
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Request lifecycle driving the list, indicator and error sinks.
pub mod loader;

/// Raw item → list record mapping.
pub mod normalizer;

/// Absolute and elapsed timestamp labels.
pub mod timefmt;
