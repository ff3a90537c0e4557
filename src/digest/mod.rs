use html_escape::{encode_quoted_attribute, encode_text};

use crate::domain::FeedItem;

pub const HEADING: &str = "<h2>Veille emploi</h2>";

/// Render the HTML digest body.
///
/// One line per item, `<a href='LINK'>TITLE</a> - SOURCE`, joined by `<br>`
/// under a fixed heading. Feed-derived text is escaped before embedding;
/// feeds are not a trusted source of markup.
pub fn render_html(items: &[FeedItem]) -> String {
    let lines: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "<a href='{}'>{}</a> - {}",
                encode_quoted_attribute(&item.link),
                encode_text(&item.title),
                encode_text(&item.source)
            )
        })
        .collect();

    format!("{HEADING}{}", lines.join("<br>"))
}

/// Plain-text alternative for the multipart message.
pub fn render_text(items: &[FeedItem]) -> String {
    let mut out = String::from("Veille emploi\n");
    for item in items {
        out.push('\n');
        out.push_str(&item.title);
        out.push_str(" - ");
        out.push_str(&item.source);
        out.push('\n');
        out.push_str("  ");
        out.push_str(&item.link);
        out.push('\n');
    }
    out
}
