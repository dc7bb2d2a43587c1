//! Breadcrumb, back button and header block shared by every view.

use super::Markup;
use crate::navigation::Action;

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, Copy)]
pub enum Crumb<'a> {
    /// Plain hyperlink to a sibling page.
    Link {
        /// Link target.
        href: &'a str,
        /// Link text.
        label: &'a str,
    },
    /// Ancestor inside the viewer.
    Region {
        /// Action taken when clicked.
        action: Action,
        /// Link text.
        label: &'a str,
    },
    /// The current page, not clickable.
    Current(&'a str),
}

/// Title block with stat count and optional playlist link.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    /// Main title.
    pub title: &'a str,
    /// Subtitle, may be empty.
    pub subtitle: &'a str,
    /// Count shown in bold.
    pub count: usize,
    /// Label after the count.
    pub count_label: &'a str,
    /// Link to the lecture playlist.
    pub playlist_url: Option<&'a str>,
}

/// Render a breadcrumb trail.
pub(crate) fn breadcrumb(m: &mut Markup, crumbs: &[Crumb<'_>]) {
    m.push("<div class=\"breadcrumb\">");
    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            m.push(" <span>&gt;</span> ");
        }
        match *crumb {
            Crumb::Link { href, label } => m.external_link(None, href, false, label),
            Crumb::Region { action, label } => m.region_link(None, action, label),
            Crumb::Current(label) => {
                m.push("<span>");
                m.text(label);
                m.push("</span>");
            },
        }
    }
    m.push("</div>\n");
}

/// Render a `← Back to ...` shortcut bound to an action.
pub(crate) fn back_region(m: &mut Markup, action: Action, label: &str) {
    m.region_link(Some("back-button"), action, &format!("← Back to {}", label));
    m.push("\n");
}

/// Render a `← Back to ...` shortcut leaving the viewer.
pub(crate) fn back_link(m: &mut Markup, href: &str, label: &str) {
    m.external_link(Some("back-button"), href, false, &format!("← Back to {}", label));
    m.push("\n");
}

/// Render the compact book header.
pub(crate) fn header(m: &mut Markup, header: &Header<'_>) {
    m.push("<div class=\"book-header-compact\"><div class=\"book-title-row\">");
    m.push("<div class=\"book-title-section\"><h1 class=\"book-main-title\">");
    m.text(header.title);
    m.push("</h1><h2 class=\"book-subtitle\">");
    m.text(header.subtitle);
    m.push("</h2></div>");

    m.push("<div class=\"book-meta-section\"><span class=\"book-stat\"><strong>");
    m.text(header.count.to_string());
    m.push("</strong> ");
    m.text(header.count_label);
    m.push("</span>");
    if let Some(url) = header.playlist_url {
        m.external_link(Some("playlist-link"), url, true, "📺 Playlist");
    }
    m.push("</div></div></div>\n");
}
