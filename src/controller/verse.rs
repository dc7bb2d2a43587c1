//! Flat verse controller. One view, no navigation.

use super::View;
use crate::config::LinkConfig;
use crate::data::VerseDocument;
use crate::navigation::{Action, Transition};
use crate::render::{verse as render, Rendered};

/// Shows a whole verse document at once.
#[derive(Debug)]
pub struct VerseController {
    document: VerseDocument,
    links: LinkConfig,
}

impl VerseController {
    /// Loaded document.
    pub fn document(&self) -> &VerseDocument {
        &self.document
    }
}

impl View for VerseController {
    type Document = VerseDocument;

    const NAME: &'static str = "verse";

    fn new(document: VerseDocument, links: LinkConfig) -> Self {
        Self { document, links }
    }

    fn render(&self) -> Rendered {
        render::render_document(&self.document, &self.links)
    }

    fn apply(&mut self, _action: Action) -> Transition {
        Transition::Ignored
    }
}
