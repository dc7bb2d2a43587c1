//! Sectioned Upanishad controller.

use super::View;
use crate::config::LinkConfig;
use crate::data::{Subsection, UpanishadDocument};
use crate::navigation::{Action, NavigationState, Transition};
use crate::render::{upanishad as render, Rendered};

/// Views of the Upanishad viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpanishadView {
    /// List of sections.
    Sections,
    /// Subsections of one section.
    Subsections,
    /// Mantra page of one subsection.
    Mantras,
}

/// Sections → subsections → mantras.
#[derive(Debug)]
pub struct UpanishadController {
    document: UpanishadDocument,
    links: LinkConfig,
    state: NavigationState<UpanishadView>,
}

impl UpanishadController {
    /// Navigation state.
    pub fn state(&self) -> &NavigationState<UpanishadView> {
        &self.state
    }

    /// Loaded document.
    pub fn document(&self) -> &UpanishadDocument {
        &self.document
    }
}

impl View for UpanishadController {
    type Document = UpanishadDocument;

    const NAME: &'static str = "upanishad";

    fn new(document: UpanishadDocument, links: LinkConfig) -> Self {
        Self {
            document,
            links,
            state: NavigationState::new(UpanishadView::Sections),
        }
    }

    fn render(&self) -> Rendered {
        match (self.state.view(), self.state.parent(), self.state.leaf()) {
            (UpanishadView::Sections, _, _) => render::render_sections(&self.document, &self.links),
            (UpanishadView::Subsections, Some(section), _) => {
                render::render_subsections(&self.document, section, &self.links)
            },
            (UpanishadView::Mantras, Some(section), Some(subsection)) => {
                render::render_mantras(&self.document, section, subsection, &self.links)
            },
            _ => Rendered::message(render::SECTION_NOT_FOUND),
        }
    }

    /// Unlike the Brahmasutram chapter view, entering a section expands
    /// nothing: subsections are cards with no collapsible body.
    fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::ShowRoot => {
                self.state.enter_root(UpanishadView::Sections);
                Transition::RENDERED
            },
            Action::ShowMid(id) => {
                self.state
                    .enter_mid::<Subsection>(UpanishadView::Subsections, id, None);
                Transition::RENDERED_AT_TOP
            },
            Action::ShowLeaf(section, subsection) => {
                self.state
                    .enter_leaf(UpanishadView::Mantras, section, subsection);
                Transition::RENDERED_AT_TOP
            },
            Action::Toggle(id) => {
                self.state.toggle(id);
                Transition::RENDERED
            },
        }
    }
}
