use crate::domain::{ErrorDescriptor, NormalizedFeedItem};

/// Lifecycle of the current feed load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedRequestState {
    #[default]
    Idle,
    Pending {
        generation: u64,
    },
    Succeeded {
        generation: u64,
        items: Vec<NormalizedFeedItem>,
    },
    Failed {
        generation: u64,
        error: ErrorDescriptor,
    },
}

impl FeedRequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, FeedRequestState::Pending { .. })
    }

    /// Succeeded and Failed are never mutated again by the same request.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FeedRequestState::Succeeded { .. } | FeedRequestState::Failed { .. }
        )
    }

    pub fn generation(&self) -> Option<u64> {
        match self {
            FeedRequestState::Idle => None,
            FeedRequestState::Pending { generation }
            | FeedRequestState::Succeeded { generation, .. }
            | FeedRequestState::Failed { generation, .. } => Some(*generation),
        }
    }
}
