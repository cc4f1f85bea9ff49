use serde::{Deserialize, Serialize};

/// Flat, fully-populated view of one media item, ready for a list model.
///
/// Every field is always set; missing provider data is represented by `""`
/// or `false`, never by an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFeedItem {
    pub username: String,
    pub user_id: String,
    pub profile_picture: String,
    pub thumbnail_url: String,
    pub original_image_url: String,
    pub image_id: String,
    pub likes_count: u64,
    pub comments_count: u64,
    pub created_time_formatted: String,
    pub elapsed_time_label: String,
    pub time_and_location: String,
    pub location_name: String,
    pub user_has_liked: bool,
    pub link_to_instagram: String,
    pub caption: String,
}

impl NormalizedFeedItem {
    pub fn has_location(&self) -> bool {
        !self.location_name.is_empty()
    }

    pub fn has_link(&self) -> bool {
        !self.link_to_instagram.is_empty()
    }

    /// First line of the caption, for one-line list rows.
    pub fn caption_headline(&self) -> &str {
        self.caption.lines().next().unwrap_or("")
    }
}
