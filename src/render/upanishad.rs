//! Sectioned Upanishad views: sections, subsections, and the mantra page.

use super::chrome::{back_region, breadcrumb, header, Crumb, Header};
use super::{Markup, Rendered};
use crate::config::LinkConfig;
use crate::data::{NodeId, UpanishadDocument};
use crate::navigation::Action;

/// Message shown when the selected section or subsection does not exist.
pub const SECTION_NOT_FOUND: &str = "Section not found";

const INDEX_LABEL: &str = "Upanishads";

fn nav_card(m: &mut Markup, action: Action, title: &str, subtitle: &str, meta: &str) {
    m.push("<div class=\"nav-card\"");
    m.region(action);
    m.push("><div class=\"nav-card-title\">");
    m.text(title);
    m.push("</div><div class=\"nav-card-subtitle\">");
    m.text(subtitle);
    m.push("</div><div class=\"nav-card-meta\"><span>");
    m.text(meta);
    m.push("</span><div class=\"progress-bar\"><div class=\"progress-fill\" style=\"width: 0%;\"></div></div></div></div>\n");
}

/// Render the list of top-level sections.
pub fn render_sections(doc: &UpanishadDocument, links: &LinkConfig) -> Rendered {
    let mut m = Markup::new();

    breadcrumb(
        &mut m,
        &[
            Crumb::Link {
                href: &links.home_href,
                label: "Home",
            },
            Crumb::Link {
                href: &links.index_href,
                label: INDEX_LABEL,
            },
            Crumb::Current(&doc.name),
        ],
    );
    header(
        &mut m,
        &Header {
            title: &doc.name,
            subtitle: &doc.english_title,
            count: doc.total_mantras as usize,
            count_label: "Mantras",
            playlist_url: doc.playlist_url.as_deref(),
        },
    );

    m.push("<div class=\"navigation-style\">\n");
    for section in &doc.sections {
        nav_card(
            &mut m,
            Action::ShowMid(section.id),
            &section.title,
            &format!("{} - {}", section.english_title, section.description),
            &format!(
                "{} Sections • {} Mantras",
                section.subsections.len(),
                section.total_mantras
            ),
        );
    }
    m.push("</div>\n");

    m.finish()
}

/// Render the subsections of one section.
pub fn render_subsections(
    doc: &UpanishadDocument,
    section_id: NodeId,
    links: &LinkConfig,
) -> Rendered {
    let Some(section) = doc.section(section_id) else {
        return Rendered::message(SECTION_NOT_FOUND);
    };

    let mut m = Markup::new();
    breadcrumb(
        &mut m,
        &[
            Crumb::Link {
                href: &links.home_href,
                label: "Home",
            },
            Crumb::Link {
                href: &links.index_href,
                label: INDEX_LABEL,
            },
            Crumb::Region {
                action: Action::ShowRoot,
                label: &doc.name,
            },
            Crumb::Current(&section.title),
        ],
    );
    back_region(&mut m, Action::ShowRoot, &doc.name);
    header(
        &mut m,
        &Header {
            title: &section.title,
            subtitle: &section.english_title,
            count: section.total_mantras as usize,
            count_label: "Mantras",
            playlist_url: None,
        },
    );

    m.push("<div class=\"navigation-style\">\n");
    for subsection in &section.subsections {
        nav_card(
            &mut m,
            Action::ShowLeaf(section.id, subsection.id),
            &subsection.title,
            &subsection.english_title,
            &format!("{} Mantras", subsection.mantra_count),
        );
    }
    m.push("</div>\n");

    m.finish()
}

/// Render the mantra page of one subsection.
pub fn render_mantras(
    doc: &UpanishadDocument,
    section_id: NodeId,
    subsection_id: NodeId,
    links: &LinkConfig,
) -> Rendered {
    let Some((section, subsection)) = doc.subsection(section_id, subsection_id) else {
        return Rendered::message(SECTION_NOT_FOUND);
    };

    let mut m = Markup::new();
    breadcrumb(
        &mut m,
        &[
            Crumb::Link {
                href: &links.home_href,
                label: "Home",
            },
            Crumb::Link {
                href: &links.index_href,
                label: INDEX_LABEL,
            },
            Crumb::Region {
                action: Action::ShowRoot,
                label: &doc.name,
            },
            Crumb::Region {
                action: Action::ShowMid(section.id),
                label: &section.title,
            },
            Crumb::Current(&subsection.title),
        ],
    );
    back_region(&mut m, Action::ShowMid(section.id), &section.title);
    header(
        &mut m,
        &Header {
            title: &subsection.title,
            subtitle: &subsection.english_title,
            count: subsection.mantra_count as usize,
            count_label: "Mantras",
            playlist_url: None,
        },
    );

    // Individual mantras are not part of this document shape yet.
    m.push("<div class=\"content-placeholder\">\n");
    m.push("<div style=\"text-align: center; padding: 3rem; color: #666;\">\n");
    m.push("<h3>Mantras will be displayed here</h3>\n");
    m.push("<p>Individual mantras with Sanskrit, transliteration, and videos</p>\n");
    m.push("<p style=\"margin-top: 1rem; font-size: 0.9rem;\">This section will show ");
    m.text(format!(
        "{} mantras from {} → {}",
        subsection.mantra_count, section.title, subsection.title
    ));
    m.push("</p>\n</div>\n</div>\n");

    m.finish()
}
