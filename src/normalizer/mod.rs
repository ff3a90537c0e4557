use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{Result, VeilleError};
use crate::domain::FeedItem;

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse a feed document into its source title and items.
    ///
    /// The source is the feed title, falling back to the feed URL when the
    /// document has none.
    pub fn normalize(&self, feed_url: &str, body: &[u8]) -> Result<(String, Vec<FeedItem>)> {
        let feed = parser::parse(body).map_err(|e| VeilleError::FeedParse(e.to_string()))?;

        let source = feed
            .title
            .map(|t| decode_html_entities(&t.content).to_string())
            .unwrap_or_else(|| feed_url.to_string());

        let raw_dates = recover_raw_dates(body, feed.entries.len());

        let items: Vec<FeedItem> = feed
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let raw = raw_dates
                    .as_ref()
                    .and_then(|dates| dates.get(i))
                    .map(String::as_str);

                FeedItem {
                    title: entry
                        .title
                        .map(|t| decode_html_entities(&t.content).to_string())
                        .unwrap_or_default(),
                    link: entry
                        .links
                        .first()
                        .map(|l| l.href.clone())
                        .unwrap_or_default(),
                    summary: entry.summary.map(|s| s.content).unwrap_or_default(),
                    published: resolve_timestamp(entry.published, entry.updated, raw),
                    source: source.clone(),
                }
            })
            .collect();

        Ok((source, items))
    }
}

/// Pick a single UTC timestamp for an entry.
///
/// Ordered preference, first success wins: structured published time, then
/// structured updated time, then a lenient parse of the free-text date.
/// Entries where every strategy fails stay undated, which the window filter
/// treats as always fresh.
pub fn resolve_timestamp(
    published: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    raw: Option<&str>,
) -> Option<DateTime<Utc>> {
    published
        .or(updated)
        .or_else(|| raw.and_then(parse_lenient))
}

/// Lenient free-text date parser.
///
/// Tries RFC3339, then RFC2822, then common timezone-less formats which are
/// assumed to be UTC. Returns `None` on failure; a bad date never fails the
/// feed.
pub fn parse_lenient(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    None
}

/// Recover raw per-entry date strings from the document.
///
/// feed-rs discards date text it cannot parse, so entries with malformed
/// `<pubDate>`/`<dc:date>` values come back undated even when the text is
/// salvageable. This scans the document for those elements in order and maps
/// them to entries by index. Returns `None` unless exactly one date was
/// found per entry; a channel-level `<pubDate>` would skew the mapping.
fn recover_raw_dates(body: &[u8], entry_count: usize) -> Option<Vec<String>> {
    if entry_count == 0 {
        return None;
    }
    let text = std::str::from_utf8(body).ok()?;

    for tag in ["pubDate", "dc:date"] {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");

        let mut dates = Vec::new();
        let mut rest = text;
        while let Some(start) = rest.find(&open) {
            let after = &rest[start + open.len()..];
            let Some(end) = after.find(&close) else {
                break;
            };
            dates.push(after[..end].trim().to_string());
            rest = &after[end + close.len()..];
        }

        if dates.len() == entry_count {
            return Some(dates);
        }
    }

    None
}
