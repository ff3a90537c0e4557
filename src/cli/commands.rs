use chrono::{DateTime, Utc};

use crate::app::{AppContext, Result};
use crate::config::Config;
use crate::digest;
use crate::domain::FeedItem;
use crate::window::within_window;

/// Fetch every configured feed and collect the in-window items.
///
/// Feeds are fetched one at a time, in configuration order. A failing feed
/// contributes zero items and does not abort the run; the error is logged
/// and the loop moves on.
pub async fn collect_items(
    ctx: &AppContext,
    config: &Config,
    now: DateTime<Utc>,
) -> Vec<FeedItem> {
    let mut items = Vec::new();

    for url in &config.rss_feeds {
        match fetch_feed(ctx, url).await {
            Ok((source, feed_items)) => {
                let total = feed_items.len();
                let fresh: Vec<FeedItem> = feed_items
                    .into_iter()
                    .filter(|item| within_window(item.published, now, config.hours_window))
                    .collect();
                tracing::debug!(feed = %source, total, kept = fresh.len(), "feed processed");
                items.extend(fresh);
            }
            Err(e) => {
                tracing::error!(feed = %url, error = %e, "skipping feed");
            }
        }
    }

    items
}

async fn fetch_feed(ctx: &AppContext, url: &str) -> Result<(String, Vec<FeedItem>)> {
    let body = ctx.fetcher.fetch(url).await?;
    ctx.normalizer.normalize(url, &body)
}

/// Run the full pipeline: fetch, filter, render, send.
///
/// A send failure propagates; the process exits non-zero.
pub async fn run(ctx: &AppContext, config: &Config, now: DateTime<Utc>) -> Result<()> {
    let items = collect_items(ctx, config, now).await;
    tracing::info!(
        items = items.len(),
        feeds = config.rss_feeds.len(),
        "digest assembled"
    );

    let html = digest::render_html(&items);
    let text = digest::render_text(&items);
    ctx.mailer.send(&config.email_subject, &html, &text).await
}

/// Render the digest to stdout without sending anything.
pub async fn preview(ctx: &AppContext, config: &Config, now: DateTime<Utc>) -> Result<()> {
    let items = collect_items(ctx, config, now).await;
    println!("{}", digest::render_html(&items));
    Ok(())
}
