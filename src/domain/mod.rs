pub mod error;
pub mod item;
pub mod raw;
pub mod state;

pub use error::ErrorDescriptor;
pub use item::NormalizedFeedItem;
pub use raw::{FeedEnvelope, RawFeedItem};
pub use state::FeedRequestState;
