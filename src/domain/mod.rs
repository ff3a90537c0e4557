use chrono::{DateTime, Utc};

/// A single normalized feed entry.
///
/// Created by the normalizer and immutable afterwards; nothing is persisted
/// across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// Entry summary, possibly containing HTML.
    pub summary: String,
    /// Publication time in UTC, when one could be determined.
    pub published: Option<DateTime<Utc>>,
    /// Feed title, or the feed URL when the feed has no title.
    pub source: String,
}
