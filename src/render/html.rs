//! Markup writer.
//!
//! Text pushed through [`Markup::text`] is escaped; [`Markup::push`] is for
//! literal markup only. Clickable elements get a `data-region` attribute whose
//! id is bound to an [`Action`] in the writer's region table.

use super::{Rendered, RegionTable};
use crate::navigation::Action;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Append-only HTML buffer with its region table.
#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
    regions: RegionTable,
}

impl Markup {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
            regions: RegionTable::default(),
        }
    }

    /// Push literal markup.
    pub fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    /// Push escaped text.
    pub fn text<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(&escape(s.as_ref()));
    }

    /// Push ` data-region="<id>"` for a freshly bound action.
    pub fn region(&mut self, action: Action) {
        let id = self.regions.bind(action);
        self.buf.push_str(" data-region=\"");
        self.buf.push_str(&id);
        self.buf.push('"');
    }

    /// Push `<a href="#" class=".." data-region="..">label</a>`.
    pub fn region_link(&mut self, class: Option<&str>, action: Action, label: &str) {
        self.push("<a href=\"#\"");
        if let Some(class) = class {
            self.push(" class=\"");
            self.push(class);
            self.push("\"");
        }
        self.region(action);
        self.push(">");
        self.text(label);
        self.push("</a>");
    }

    /// Push a plain hyperlink that leaves the viewer.
    pub fn external_link(&mut self, class: Option<&str>, href: &str, new_tab: bool, label: &str) {
        self.push("<a href=\"");
        self.text(href);
        self.push("\"");
        if new_tab {
            self.push(" target=\"_blank\"");
        }
        if let Some(class) = class {
            self.push(" class=\"");
            self.push(class);
            self.push("\"");
        }
        self.push(">");
        self.text(label);
        self.push("</a>");
    }

    /// Finish writing.
    pub fn finish(self) -> Rendered {
        Rendered {
            html: self.buf,
            regions: self.regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("ॐ तत् सत्"), "ॐ तत् सत्");
    }

    #[test]
    fn regions_are_numbered_in_render_order() {
        let mut m = Markup::new();
        m.region_link(None, Action::ShowRoot, "Home");
        m.region_link(Some("back-button"), Action::ShowMid(2), "Back");
        let rendered = m.finish();

        assert_eq!(
            rendered.html,
            "<a href=\"#\" data-region=\"r0\">Home</a>\
             <a href=\"#\" class=\"back-button\" data-region=\"r1\">Back</a>"
        );
        assert_eq!(rendered.regions.lookup("r1"), Some(Action::ShowMid(2)));
    }
}
