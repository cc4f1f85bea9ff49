//! Terminal implementations of the loader's sinks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{ErrorDescriptor, NormalizedFeedItem};
use crate::loader::{ErrorDisplay, FeedSink, LoadingIndicator, Sinks};

/// Buffers appended records and prints the page on `reveal`.
pub struct ConsoleList {
    json: bool,
    items: Mutex<Vec<NormalizedFeedItem>>,
}

impl ConsoleList {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            items: Mutex::new(Vec::new()),
        }
    }
}

impl FeedSink for ConsoleList {
    fn clear(&self) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn append(&self, item: NormalizedFeedItem) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }

    fn reveal(&self) {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        print_items(&items, self.json);
    }
}

#[derive(Default)]
pub struct ConsoleIndicator {
    active: AtomicBool,
}

impl LoadingIndicator for ConsoleIndicator {
    fn set_active(&self, active: bool) {
        let was_active = self.active.swap(active, Ordering::SeqCst);
        if active && !was_active {
            eprintln!("Loading feed...");
        }
    }
}

pub struct ConsoleErrors;

impl ErrorDisplay for ConsoleErrors {
    fn show_error(&self, error: &ErrorDescriptor) {
        eprintln!(
            "Error {} ({}): {}",
            error.code, error.error_type, error.error_message
        );
    }
}

pub fn sinks(json: bool) -> Sinks {
    Sinks::new(
        Arc::new(ConsoleList::new(json)),
        Arc::new(ConsoleIndicator::default()),
        Arc::new(ConsoleErrors),
    )
}

pub fn print_items(items: &[NormalizedFeedItem], json: bool) {
    if json {
        match serde_json::to_string_pretty(items) {
            Ok(out) => println!("{}", out),
            Err(e) => tracing::error!("Failed to serialize feed: {}", e),
        }
        return;
    }

    if items.is_empty() {
        println!("No media");
        return;
    }

    for item in items {
        println!("{}", format_row(item));
    }
}

/// Multi-line text rendering of one record.
pub fn format_row(item: &NormalizedFeedItem) -> String {
    let liked = if item.user_has_liked { " ♥" } else { "" };
    let mut row = format!(
        "@{} · {} likes · {} comments · {}{}\n  {}",
        item.username,
        item.likes_count,
        item.comments_count,
        item.elapsed_time_label,
        liked,
        item.time_and_location
    );

    let headline = item.caption_headline();
    if !headline.is_empty() {
        row.push_str("\n  ");
        row.push_str(headline);
    }

    let target = if item.has_link() {
        &item.link_to_instagram
    } else {
        &item.original_image_url
    };
    row.push_str("\n  ");
    row.push_str(target);

    row
}
