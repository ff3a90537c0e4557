use chrono::{DateTime, Duration, Utc};

/// True when an entry is fresh enough for the digest.
///
/// Undated entries pass unconditionally: a feed that publishes no usable
/// timestamps should still show up rather than be silently dropped.
/// Future-dated entries also pass, since their signed distance from `now`
/// is negative and therefore within any non-negative window.
pub fn within_window(published: Option<DateTime<Utc>>, now: DateTime<Utc>, hours: i64) -> bool {
    match published {
        None => true,
        Some(ts) => now - ts <= Duration::hours(hours),
    }
}
