//! End-to-end pipeline tests with fake fetcher and mailer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use veille::app::{AppContext, Result, VeilleError};
use veille::cli::commands;
use veille::config::Config;
use veille::fetcher::Fetcher;
use veille::mailer::Mailer;

/// Serves canned bodies by URL; unknown URLs fail like a dead host.
struct FakeFetcher {
    bodies: HashMap<String, Vec<u8>>,
}

impl FakeFetcher {
    fn new(bodies: &[(&str, &str)]) -> Self {
        Self {
            bodies: bodies
                .iter()
                .map(|(url, body)| (url.to_string(), body.as_bytes().to_vec()))
                .collect(),
        }
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| VeilleError::Other(format!("connection refused: {url}")))
    }
}

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, subject: &str, html_body: &str, text_body: &str) -> Result<()> {
        self.sent.lock().unwrap().push((
            subject.to_string(),
            html_body.to_string(),
            text_body.to_string(),
        ));
        Ok(())
    }
}

struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _subject: &str, _html: &str, _text: &str) -> Result<()> {
        Err(VeilleError::Other("550 relay denied".into()))
    }
}

fn config(feeds: &[&str]) -> Config {
    let feed_list = feeds
        .iter()
        .map(|f| format!("\"{f}\""))
        .collect::<Vec<_>>()
        .join(", ");
    toml::from_str(&format!(
        r#"
rss_feeds = [{feed_list}]

[email]
to = ["you@example.com"]

[email.smtp]
host = "smtp.example.com"
username = "bot@example.com"
password = "secret"
"#
    ))
    .unwrap()
}

fn rss_feed(title: &str, items: &[(&str, &str, Option<chrono::DateTime<Utc>>)]) -> String {
    let mut body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\"><channel><title>{title}</title>"
    );
    for (item_title, link, published) in items {
        body.push_str("<item>");
        body.push_str(&format!("<title>{item_title}</title><link>{link}</link>"));
        if let Some(ts) = published {
            body.push_str(&format!("<pubDate>{}</pubDate>", ts.to_rfc2822()));
        }
        body.push_str("</item>");
    }
    body.push_str("</channel></rss>");
    body
}

#[tokio::test]
async fn failing_feed_is_skipped_and_run_continues() {
    let now = Utc::now();
    let config = config(&["https://dead.example.com/feed", "https://ok.example.com/feed"]);

    let feed = rss_feed(
        "Ok Feed",
        &[
            ("Fresh", "https://ok.example.com/fresh", Some(now - Duration::hours(1))),
            ("Stale", "https://ok.example.com/stale", Some(now - Duration::hours(48))),
        ],
    );
    let fetcher = Arc::new(FakeFetcher::new(&[("https://ok.example.com/feed", feed.as_str())]));
    let mailer = Arc::new(RecordingMailer::default());
    let ctx = AppContext::with_parts(fetcher, mailer.clone());

    commands::run(&ctx, &config, now).await.unwrap();

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);

    let (subject, html, text) = &sent[0];
    assert_eq!(subject, "Veille emploi");
    // Exactly one entry survives: the first feed is dead, the stale entry
    // falls outside the 24h default window.
    assert_eq!(html.matches("<a href=").count(), 1);
    assert!(html.contains("<a href='https://ok.example.com/fresh'>Fresh</a> - Ok Feed"));
    assert!(!html.contains("Stale"));
    assert!(text.contains("Fresh - Ok Feed"));
}

#[tokio::test]
async fn items_follow_feed_configuration_order() {
    let now = Utc::now();
    let config = config(&["https://a.example.com/feed", "https://b.example.com/feed"]);

    let feed_a = rss_feed("Feed A", &[("A1", "https://a.example.com/1", Some(now))]);
    let feed_b = rss_feed("Feed B", &[("B1", "https://b.example.com/1", Some(now))]);
    let fetcher = Arc::new(FakeFetcher::new(&[
        ("https://a.example.com/feed", feed_a.as_str()),
        ("https://b.example.com/feed", feed_b.as_str()),
    ]));
    let mailer = Arc::new(RecordingMailer::default());
    let ctx = AppContext::with_parts(fetcher, mailer.clone());

    commands::run(&ctx, &config, now).await.unwrap();

    let sent = mailer.sent.lock().unwrap();
    let (_, html, _) = &sent[0];
    let a = html.find(">A1<").unwrap();
    let b = html.find(">B1<").unwrap();
    assert!(a < b);
}

#[tokio::test]
async fn undated_entries_survive_a_zero_window() {
    let now = Utc::now();
    let mut config = config(&["https://a.example.com/feed"]);
    config.hours_window = 0;

    let feed = rss_feed("Feed A", &[("Undated", "https://a.example.com/u", None)]);
    let fetcher = Arc::new(FakeFetcher::new(&[("https://a.example.com/feed", feed.as_str())]));
    let mailer = Arc::new(RecordingMailer::default());
    let ctx = AppContext::with_parts(fetcher, mailer.clone());

    commands::run(&ctx, &config, now).await.unwrap();

    let sent = mailer.sent.lock().unwrap();
    assert!(sent[0].1.contains(">Undated</a>"));
}

#[tokio::test]
async fn all_feeds_failing_still_sends_an_empty_digest() {
    let now = Utc::now();
    let config = config(&["https://dead.example.com/feed"]);

    let fetcher = Arc::new(FakeFetcher::new(&[]));
    let mailer = Arc::new(RecordingMailer::default());
    let ctx = AppContext::with_parts(fetcher, mailer.clone());

    commands::run(&ctx, &config, now).await.unwrap();

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1, "<h2>Veille emploi</h2>");
}

#[tokio::test]
async fn send_failure_propagates() {
    let now = Utc::now();
    let config = config(&["https://a.example.com/feed"]);

    let feed = rss_feed("Feed A", &[("A1", "https://a.example.com/1", Some(now))]);
    let fetcher = Arc::new(FakeFetcher::new(&[("https://a.example.com/feed", feed.as_str())]));
    let ctx = AppContext::with_parts(fetcher, Arc::new(FailingMailer));

    let result = commands::run(&ctx, &config, now).await;
    assert!(matches!(result, Err(VeilleError::Other(_))));
}
