use chrono::{DateTime, Utc};

use crate::domain::raw::RawLocation;
use crate::domain::{FeedEnvelope, NormalizedFeedItem, RawFeedItem};
use crate::timefmt::TimeFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    time: TimeFormatter,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatter(time: TimeFormatter) -> Self {
        Self { time }
    }

    pub fn normalize(&self, raw: &RawFeedItem) -> NormalizedFeedItem {
        self.normalize_at(raw, Utc::now())
    }

    /// Map one provider item to its list record, with elapsed labels computed
    /// against `now`. Total over every optional-field combination.
    pub fn normalize_at(&self, raw: &RawFeedItem, now: DateTime<Utc>) -> NormalizedFeedItem {
        let created_time_formatted = self.time.format_absolute_time(raw.created_time);
        let elapsed_time_label = self.time.format_elapsed(raw.created_time, now);

        let location_name = raw
            .location
            .as_ref()
            .and_then(location_name)
            .unwrap_or_default();
        let time_and_location = if location_name.is_empty() {
            created_time_formatted.clone()
        } else {
            format!("{}, {}", created_time_formatted, location_name)
        };

        NormalizedFeedItem {
            username: raw.user.username.clone(),
            user_id: raw.user.id.clone(),
            profile_picture: raw.user.profile_picture.clone(),
            thumbnail_url: raw.images.thumbnail.url.clone(),
            original_image_url: raw.images.standard_resolution.url.clone(),
            image_id: raw.id.clone(),
            likes_count: raw.likes.count,
            comments_count: raw.comments.count,
            created_time_formatted,
            elapsed_time_label,
            time_and_location,
            location_name,
            user_has_liked: raw.user_has_liked.unwrap_or(false),
            link_to_instagram: raw.link.clone().unwrap_or_default(),
            caption: raw
                .caption
                .as_ref()
                .and_then(|c| c.text.clone())
                .unwrap_or_default(),
        }
    }

    /// Normalize a whole page, preserving the provider's order.
    pub fn normalize_page(&self, envelope: &FeedEnvelope, now: DateTime<Utc>) -> Vec<NormalizedFeedItem> {
        envelope
            .data
            .iter()
            .map(|raw| self.normalize_at(raw, now))
            .collect()
    }
}

fn location_name(location: &RawLocation) -> Option<String> {
    location.name.clone().filter(|name| !name.is_empty())
}
