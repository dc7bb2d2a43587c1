//! Brahmasutram controller.

use super::View;
use crate::config::LinkConfig;
use crate::data::BrahmasutramDocument;
use crate::navigation::{Action, NavigationState, Transition};
use crate::render::{brahmasutram as render, Rendered};

/// Views of the Brahmasutram viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrahmasutramView {
    /// Grid of chapters.
    Chapters,
    /// One chapter's sections.
    Chapter,
    /// One adhikaranam's commentary.
    Adhikaranam,
}

/// Chapters → sections → adhikaranams.
#[derive(Debug)]
pub struct BrahmasutramController {
    document: BrahmasutramDocument,
    links: LinkConfig,
    state: NavigationState<BrahmasutramView>,
}

impl BrahmasutramController {
    /// Navigation state.
    pub fn state(&self) -> &NavigationState<BrahmasutramView> {
        &self.state
    }

    /// Loaded document.
    pub fn document(&self) -> &BrahmasutramDocument {
        &self.document
    }
}

impl View for BrahmasutramController {
    type Document = BrahmasutramDocument;

    const NAME: &'static str = "brahmasutram";

    fn new(document: BrahmasutramDocument, links: LinkConfig) -> Self {
        Self {
            document,
            links,
            state: NavigationState::new(BrahmasutramView::Chapters),
        }
    }

    fn render(&self) -> Rendered {
        match (self.state.view(), self.state.parent(), self.state.leaf()) {
            (BrahmasutramView::Chapters, _, _) => {
                render::render_chapters(&self.document, &self.links)
            },
            (BrahmasutramView::Chapter, Some(chapter), _) => {
                render::render_chapter(&self.document, chapter, self.state.expanded(), &self.links)
            },
            (BrahmasutramView::Adhikaranam, Some(chapter), Some(topic)) => {
                render::render_adhikaranam(&self.document, chapter, topic, &self.links)
            },
            (BrahmasutramView::Chapter, None, _) => Rendered::message(render::CHAPTER_NOT_FOUND),
            (BrahmasutramView::Adhikaranam, _, _) => {
                Rendered::message(render::ADHIKARANAM_NOT_FOUND)
            },
        }
    }

    fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::ShowRoot => {
                self.state.enter_root(BrahmasutramView::Chapters);
                Transition::RENDERED
            },
            Action::ShowMid(id) => {
                // Disabled chapters are shown but do nothing when clicked.
                let Some(chapter) = self.document.chapter(id).filter(|c| c.enabled) else {
                    return Transition::Ignored;
                };
                self.state
                    .enter_mid(BrahmasutramView::Chapter, id, chapter.sections.first());
                Transition::RENDERED
            },
            Action::ShowLeaf(chapter, topic) => {
                self.state
                    .enter_leaf(BrahmasutramView::Adhikaranam, chapter, topic);
                Transition::RENDERED_AT_TOP
            },
            Action::Toggle(id) => {
                self.state.toggle(id);
                Transition::RENDERED
            },
        }
    }
}
