//! Flat verse view: the whole document on one page.

use super::chrome::{back_link, breadcrumb, header, Crumb, Header};
use super::formatters::{timestamp_range, video_href};
use super::{Markup, Rendered};
use crate::config::LinkConfig;
use crate::data::{Passage, Verse, VerseDocument, VerseKind, VideoRef};

/// Render a verse document with its introduction and summary.
pub fn render_document(doc: &VerseDocument, links: &LinkConfig) -> Rendered {
    let mut m = Markup::new();
    let parent = doc.kind.parent_title();

    breadcrumb(
        &mut m,
        &[
            Crumb::Link {
                href: &links.home_href,
                label: "Home",
            },
            Crumb::Link {
                href: &links.index_href,
                label: parent,
            },
            Crumb::Current(&doc.title),
        ],
    );
    back_link(&mut m, &links.index_href, parent);
    header(
        &mut m,
        &Header {
            title: &doc.title,
            subtitle: &doc.subtitle,
            count: doc.verse_total(),
            count_label: doc.kind.plural_label(),
            playlist_url: doc.playlist_url.as_deref(),
        },
    );

    passages(&mut m, "📚 Introduction", &doc.introduction);
    for verse in &doc.verses {
        verse_block(&mut m, doc.kind, verse);
    }
    passages(&mut m, "📝 Summary", &doc.summary);

    m.finish()
}

fn passages(m: &mut Markup, heading: &str, items: &[Passage]) {
    if items.is_empty() {
        return;
    }

    m.push("<div class=\"section-divider\"><h3 class=\"section-title\">");
    m.text(heading);
    m.push("</h3></div>\n");

    for item in items {
        m.push("<div class=\"intro-summary-container\">\n");
        m.push("<div class=\"intro-summary-header\"><div class=\"intro-summary-title\">");
        m.text(&item.title);
        m.push("</div></div>\n<div class=\"intro-summary-content\">\n");
        m.push("<div class=\"intro-summary-description\">");
        m.text(&item.description);
        m.push("</div>\n");
        video_links(m, &item.videos);
        m.push("</div>\n</div>\n");
    }
}

fn verse_block(m: &mut Markup, kind: VerseKind, verse: &Verse) {
    m.push("<div class=\"verse-container\">\n<div class=\"verse-header\"><div class=\"verse-number\">");
    m.text(format!("{} {}", kind.number_label(), verse.number));
    m.push("</div></div>\n<div class=\"verse-content\">\n<div class=\"verse-sanskrit\">");
    m.text(&verse.sanskrit);
    m.push("</div>\n");

    if let Some(transliteration) = verse.transliteration.as_deref().filter(|t| !t.is_empty()) {
        m.push("<div class=\"verse-transliteration\">");
        m.text(transliteration);
        m.push("</div>\n");
    }

    video_links(m, &verse.videos);
    m.push("</div>\n</div>\n");
}

fn video_links(m: &mut Markup, videos: &[VideoRef]) {
    if videos.is_empty() {
        return;
    }

    m.push("<div class=\"youtube-links\">\n");
    for video in videos {
        m.push("<a href=\"");
        m.text(video_href(video));
        m.push("\" target=\"_blank\" class=\"youtube-link\">📺 ");
        m.text(&video.title);
        if let Some(range) = timestamp_range(video) {
            m.push(" <span class=\"timestamp\">");
            m.text(range);
            m.push("</span>");
        }
        m.push("</a>\n");
    }
    m.push("</div>\n");
}
