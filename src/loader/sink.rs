use std::sync::Arc;

use crate::domain::{ErrorDescriptor, NormalizedFeedItem};

/// Ordered list model the feed is rendered into.
pub trait FeedSink: Send + Sync {
    fn clear(&self);
    fn append(&self, item: NormalizedFeedItem);
    /// Called once per successful load, after the whole page was appended.
    fn reveal(&self);
}

pub trait LoadingIndicator: Send + Sync {
    fn set_active(&self, active: bool);
}

pub trait ErrorDisplay: Send + Sync {
    fn show_error(&self, error: &ErrorDescriptor);
}

/// The three UI ports a loader drives.
#[derive(Clone)]
pub struct Sinks {
    pub list: Arc<dyn FeedSink>,
    pub indicator: Arc<dyn LoadingIndicator>,
    pub errors: Arc<dyn ErrorDisplay>,
}

impl Sinks {
    pub fn new(
        list: Arc<dyn FeedSink>,
        indicator: Arc<dyn LoadingIndicator>,
        errors: Arc<dyn ErrorDisplay>,
    ) -> Self {
        Self {
            list,
            indicator,
            errors,
        }
    }
}
