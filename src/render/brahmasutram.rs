//! Brahmasutram views: chapter grid, collapsible sections, adhikaranam commentary.

use super::chrome::{back_region, breadcrumb, Crumb};
use super::formatters::count_label;
use super::{Markup, Rendered};
use crate::config::LinkConfig;
use crate::data::{Adhikaranam, BrahmasutramDocument, Chapter, NodeId, Section};
use crate::navigation::{Action, ExpandedSet};

/// Name of the text, used in breadcrumbs.
pub const TITLE: &str = "Brahmasutram";

/// Message shown when the selected chapter does not exist.
pub const CHAPTER_NOT_FOUND: &str = "Chapter not found";

/// Message shown when the selected adhikaranam does not exist.
pub const ADHIKARANAM_NOT_FOUND: &str = "Adhikaranam not found";

const HEADING_STYLE: &str = "margin-bottom: 1.5rem; color: #8B4513;";

/// Render the chapter grid.
pub fn render_chapters(doc: &BrahmasutramDocument, links: &LinkConfig) -> Rendered {
    let mut m = Markup::new();

    breadcrumb(
        &mut m,
        &[
            Crumb::Link {
                href: &links.home_href,
                label: "Home",
            },
            Crumb::Current(TITLE),
        ],
    );
    m.push(format!("<h2 style=\"{}\">Chapters</h2>\n", HEADING_STYLE));

    m.push("<div class=\"chapter-grid\">\n");
    for chapter in &doc.chapters {
        chapter_card(&mut m, chapter);
    }
    m.push("</div>\n");

    m.finish()
}

fn chapter_card(m: &mut Markup, chapter: &Chapter) {
    m.push("<div class=\"chapter-card");
    if !chapter.enabled {
        m.push(" disabled");
    }
    m.push(format!("\" data-chapter-id=\"{}\"", chapter.id));
    if chapter.enabled {
        m.region(Action::ShowMid(chapter.id));
    }
    m.push(">");

    m.push("<div class=\"chapter-title\">");
    m.text(&chapter.title);
    m.push("</div><div class=\"chapter-description\">");
    m.text(&chapter.description);
    m.push("</div>");

    let progress = chapter.progress.min(100);
    m.push(format!(
        "<div class=\"progress-indicator\"><span>{progress}%</span>\
         <div class=\"progress-bar\"><div class=\"progress-fill\" style=\"width: {progress}%\"></div></div>"
    ));
    m.push("<span>");
    m.push(if chapter.enabled {
        "In Progress"
    } else {
        "Coming Soon"
    });
    m.push("</span></div></div>\n");
}

/// Render one chapter as a list of collapsible sections.
pub fn render_chapter(
    doc: &BrahmasutramDocument,
    chapter_id: NodeId,
    expanded: &ExpandedSet,
    links: &LinkConfig,
) -> Rendered {
    let Some(chapter) = doc.chapter(chapter_id) else {
        return Rendered::message(CHAPTER_NOT_FOUND);
    };

    let mut m = Markup::new();
    breadcrumb(
        &mut m,
        &[
            Crumb::Link {
                href: &links.home_href,
                label: "Home",
            },
            Crumb::Region {
                action: Action::ShowRoot,
                label: TITLE,
            },
            Crumb::Current(&chapter.title),
        ],
    );
    back_region(&mut m, Action::ShowRoot, "Chapters");

    m.push(format!("<h2 style=\"{}\">", HEADING_STYLE));
    m.text(&chapter.title);
    m.push("</h2>\n<p style=\"margin-bottom: 2rem; color: #666;\">");
    m.text(&chapter.description);
    m.push("</p>\n");

    m.push("<div class=\"section-list\">\n");
    for section in &chapter.sections {
        section_card(&mut m, chapter.id, section, expanded.contains(section.id));
    }
    m.push("</div>\n");

    m.finish()
}

fn section_card(m: &mut Markup, chapter_id: NodeId, section: &Section, is_expanded: bool) {
    m.push("<div class=\"section-card\"><div class=\"section-header\"");
    m.region(Action::Toggle(section.id));
    m.push("><div class=\"section-title\">");
    m.text(&section.title);
    m.push("</div><div class=\"toggle-icon");
    if is_expanded {
        m.push(" expanded");
    }
    m.push("\">▼</div></div>");

    if is_expanded {
        m.push("\n<div class=\"topics-grid\">\n");
        for topic in &section.adhikaranams {
            topic_item(m, chapter_id, topic);
        }
        m.push("</div>");
    }
    m.push("</div>\n");
}

fn topic_item(m: &mut Markup, chapter_id: NodeId, topic: &Adhikaranam) {
    m.push("<div class=\"topic-item");
    if topic.completed {
        m.push(" completed");
    }
    m.push("\"");
    m.region(Action::ShowLeaf(chapter_id, topic.id));
    m.push("><div class=\"topic-title\">");
    m.text(&topic.title);
    m.push("</div><div class=\"topic-meta\">");
    m.text(count_label(topic.sutrams.len(), "Sutram"));
    m.push(" • ");
    m.push(if topic.completed {
        "Completed"
    } else {
        "In Progress"
    });
    m.push("</div></div>\n");
}

/// Render the commentary of a single adhikaranam.
pub fn render_adhikaranam(
    doc: &BrahmasutramDocument,
    chapter_id: NodeId,
    adhikaranam_id: NodeId,
    links: &LinkConfig,
) -> Rendered {
    let found = doc
        .chapter(chapter_id)
        .and_then(|chapter| chapter.adhikaranam(adhikaranam_id).map(|(_, a)| (chapter, a)));
    let Some((chapter, topic)) = found else {
        return Rendered::message(ADHIKARANAM_NOT_FOUND);
    };

    let mut m = Markup::new();
    breadcrumb(
        &mut m,
        &[
            Crumb::Link {
                href: &links.home_href,
                label: "Home",
            },
            Crumb::Region {
                action: Action::ShowRoot,
                label: TITLE,
            },
            Crumb::Region {
                action: Action::ShowMid(chapter.id),
                label: &chapter.title,
            },
            Crumb::Current(&topic.title),
        ],
    );
    back_region(&mut m, Action::ShowMid(chapter.id), &chapter.title);

    m.push("<div class=\"adhikaranam-view\">\n<h1 class=\"adhikaranam-title\">");
    m.text(&topic.title);
    m.push("</h1>\n");

    content_section(&mut m, "विषय वाक्यम् (Subject Matter)", "sanskrit-text", &topic.vishaya_vakyam);
    content_section(&mut m, "संशयम् (Doubt/Question)", "content-text", &topic.samshayam);
    content_section(&mut m, "पूर्वपक्ष (Prima Facie View)", "content-text", &topic.purvapaksha);
    content_section(&mut m, "सिद्धान्त (Established Conclusion)", "content-text", &topic.siddhanta);

    if !topic.shankara_additional.is_empty() {
        open_section(&mut m, "शंकराचार्य के अतिरिक्त बिंदु (Shankara's Additional Points)");
        for point in &topic.shankara_additional {
            m.push("<div class=\"content-text\">• ");
            m.text(point);
            m.push("</div>\n");
        }
        m.push("</div>\n");
    }

    open_section(&mut m, "सूत्राणि (Sutras)");
    m.push("<ul class=\"sutram-list\">\n");
    for sutram in &topic.sutrams {
        m.push("<li class=\"sutram-item\"><div class=\"sanskrit-text\">");
        m.text(sutram);
        m.push("</div></li>\n");
    }
    m.push("</ul>\n</div>\n");

    if !topic.youtube_links.is_empty() {
        open_section(&mut m, "Reference Classes");
        m.push("<div class=\"youtube-links\">\n");
        for link in &topic.youtube_links {
            m.external_link(Some("youtube-link"), link, true, "📺 Watch Class");
            m.push("\n");
        }
        m.push("</div>\n</div>\n");
    }

    m.push("</div>\n");
    m.finish()
}

fn open_section(m: &mut Markup, label: &str) {
    m.push("<div class=\"content-section\">\n<div class=\"section-label\">");
    m.text(label);
    m.push("</div>\n");
}

fn content_section(m: &mut Markup, label: &str, class: &str, body: &str) {
    open_section(m, label);
    m.push(format!("<div class=\"{}\">", class));
    m.text(body);
    m.push("</div>\n</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> BrahmasutramDocument {
        serde_json::from_str(
            r#"{
                "chapters": [
                    {
                        "id": 1, "title": "Samanvaya", "description": "Harmony",
                        "progress": 35, "enabled": true,
                        "sections": [
                            { "id": 1, "title": "Pada 1", "adhikaranams": [
                                { "id": 1, "title": "Jijnasa", "completed": true,
                                  "sutrams": ["athato brahma jijnasa"],
                                  "vishaya_vakyam": "yato va imani",
                                  "samshayam": "Is inquiry needed?",
                                  "purvapaksha": "No",
                                  "siddhanta": "Yes",
                                  "youtube_links": ["https://youtu.be/abc"] },
                                { "id": 2, "title": "Janmadi",
                                  "sutrams": ["janmadyasya yatah", "second"],
                                  "shankara_additional": ["Point <one>"] }
                            ]},
                            { "id": 2, "title": "Pada 2", "adhikaranams": [] }
                        ]
                    },
                    { "id": 2, "title": "Avirodha", "description": "Non-contradiction", "progress": 0 }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn only_enabled_chapters_are_clickable() {
        let rendered = render_chapters(&document(), &LinkConfig::default());

        assert_eq!(rendered.html.matches("class=\"chapter-card").count(), 2);
        assert!(rendered.html.contains("chapter-card disabled"));
        assert!(rendered.html.contains("Coming Soon"));
        assert!(rendered.html.contains("width: 35%"));
        assert_eq!(rendered.regions.len(), 1);
        assert_eq!(rendered.regions.lookup("r0"), Some(Action::ShowMid(1)));
    }

    #[test]
    fn collapsed_sections_hide_topics() {
        let doc = document();
        let rendered = render_chapter(&doc, 1, &ExpandedSet::new(), &LinkConfig::default());

        assert!(!rendered.html.contains("topics-grid"));
        assert!(rendered.regions.region_for(Action::Toggle(1)).is_some());
        assert!(rendered.regions.region_for(Action::Toggle(2)).is_some());
        assert!(rendered.regions.region_for(Action::ShowLeaf(1, 1)).is_none());
    }

    #[test]
    fn expanded_section_lists_topics() {
        let doc = document();
        let mut expanded = ExpandedSet::new();
        expanded.insert(1);
        let rendered = render_chapter(&doc, 1, &expanded, &LinkConfig::default());

        assert!(rendered.html.contains("toggle-icon expanded"));
        assert!(rendered.html.contains("1 Sutram • Completed"));
        assert!(rendered.html.contains("2 Sutrams • In Progress"));
        assert!(rendered.regions.region_for(Action::ShowLeaf(1, 2)).is_some());
        assert!(rendered.html.contains("← Back to Chapters"));
    }

    #[test]
    fn missing_chapter_is_not_found() {
        let rendered = render_chapter(&document(), 42, &ExpandedSet::new(), &LinkConfig::default());
        assert_eq!(rendered.html, "<p>Chapter not found</p>");
    }

    #[test]
    fn adhikaranam_renders_commentary() {
        let rendered = render_adhikaranam(&document(), 1, 1, &LinkConfig::default());

        assert!(rendered.html.contains("Subject Matter"));
        assert!(rendered.html.contains("yato va imani"));
        assert!(rendered.html.contains("Reference Classes"));
        assert!(rendered.html.contains("href=\"https://youtu.be/abc\" target=\"_blank\""));
        assert!(!rendered.html.contains("Additional Points"));
        assert_eq!(
            rendered.regions.region_for(Action::ShowMid(1)),
            Some("r1"),
            "chapter crumb precedes the back button"
        );
    }

    #[test]
    fn optional_commentary_fields_render_empty() {
        let rendered = render_adhikaranam(&document(), 1, 2, &LinkConfig::default());

        assert!(rendered.html.contains("Point &lt;one&gt;"));
        assert!(!rendered.html.contains("Reference Classes"));
        assert!(!rendered.html.contains("undefined"));
    }

    #[test]
    fn missing_adhikaranam_is_not_found() {
        let links = LinkConfig::default();
        assert_eq!(
            render_adhikaranam(&document(), 1, 99, &links).html,
            "<p>Adhikaranam not found</p>"
        );
        assert_eq!(
            render_adhikaranam(&document(), 7, 1, &links).html,
            "<p>Adhikaranam not found</p>"
        );
    }
}
