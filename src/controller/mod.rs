//! Viewer controllers.
//!
//! A [`Viewer`] owns one controller, the container it renders into, and the
//! region table of the last render. Every state change re-renders the whole
//! container; clicks arrive as region ids through [`Viewer::dispatch`].

mod brahmasutram;
mod upanishad;
mod verse;

pub use brahmasutram::{BrahmasutramController, BrahmasutramView};
pub use upanishad::{UpanishadController, UpanishadView};
pub use verse::VerseController;

use crate::config::{LinkConfig, ViewerConfig};
use crate::data::{DataLoader, Source};
use crate::error::{Result, ViewerError};
use crate::navigation::{Action, Transition};
use crate::render::{escape, RegionTable, Rendered};
use serde::de::DeserializeOwned;

/// A controller: a document, its navigation state, and how to draw them.
pub trait View: Sized {
    /// Document shape this controller reads.
    type Document: DeserializeOwned;

    /// Name used in logs.
    const NAME: &'static str;

    /// Build a controller in its root view.
    fn new(document: Self::Document, links: LinkConfig) -> Self;

    /// Render the current state.
    fn render(&self) -> Rendered;

    /// Apply a navigation action to the state. Returns [`Transition::Ignored`]
    /// when nothing changed.
    fn apply(&mut self, action: Action) -> Transition;

    /// Browser back/forward: return to the root view.
    fn on_history_pop(&mut self) -> Transition {
        self.apply(Action::ShowRoot)
    }
}

/// The element a viewer renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    html: String,
}

impl Container {
    /// Create an empty container.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            html: String::new(),
        }
    }

    /// Element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current contents.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Replace the contents.
    pub fn replace(&mut self, html: String) {
        self.html = html;
    }

    /// The container element with its contents.
    pub fn to_html(&self) -> String {
        format!("<div id=\"{}\">\n{}</div>\n", escape(&self.id), self.html)
    }
}

/// A mounted viewer.
#[derive(Debug)]
pub struct Viewer<V> {
    container: Container,
    controller: Option<V>,
    regions: RegionTable,
    scroll_to_top: bool,
}

impl<V: View> Viewer<V> {
    /// Load the document once and render the root view.
    ///
    /// On failure the container shows the configured error message and the
    /// viewer accepts no navigation.
    pub fn mount(config: &ViewerConfig, source: &Source) -> Self {
        match DataLoader::load::<V::Document>(source) {
            Ok(document) => {
                tracing::info!("{} loaded from {}", V::NAME, source);
                Self::with_document(config, document)
            },
            Err(e) => {
                tracing::error!("Error loading {} data from {}: {}", V::NAME, source, e);
                Self::failed(config)
            },
        }
    }

    /// Mount an already loaded document.
    pub fn with_document(config: &ViewerConfig, document: V::Document) -> Self {
        let mut viewer = Self {
            container: Container::new(config.container.container_id.clone()),
            controller: Some(V::new(document, config.links.clone())),
            regions: RegionTable::default(),
            scroll_to_top: false,
        };
        viewer.refresh();
        viewer
    }

    fn failed(config: &ViewerConfig) -> Self {
        let mut container = Container::new(config.container.container_id.clone());
        container.replace(Rendered::message(&config.container.load_error_message).html);
        Self {
            container,
            controller: None,
            regions: RegionTable::default(),
            scroll_to_top: false,
        }
    }

    /// Check if the document loaded.
    pub fn is_loaded(&self) -> bool {
        self.controller.is_some()
    }

    /// The container.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Current container contents.
    pub fn html(&self) -> &str {
        self.container.html()
    }

    /// Clickable regions of the current contents.
    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// The controller, if the document loaded.
    pub fn controller(&self) -> Option<&V> {
        self.controller.as_ref()
    }

    /// Whether the last transition asked to scroll to the top.
    pub fn scroll_to_top(&self) -> bool {
        self.scroll_to_top
    }

    /// Apply an action directly.
    pub fn apply(&mut self, action: Action) -> Result<Transition> {
        let controller = self.controller.as_mut().ok_or(ViewerError::NotLoaded)?;
        let transition = controller.apply(action);
        tracing::debug!("{}: {} -> {:?}", V::NAME, action, transition);
        self.finish(transition);
        Ok(transition)
    }

    /// Resolve a clicked region against the current render and apply its action.
    pub fn dispatch(&mut self, region_id: &str) -> Result<Transition> {
        if self.controller.is_none() {
            return Err(ViewerError::NotLoaded);
        }
        let action = self
            .regions
            .lookup(region_id)
            .ok_or_else(|| ViewerError::unbound_region(region_id))?;
        tracing::debug!("{}: region {} is {}", V::NAME, region_id, action);
        self.apply(action)
    }

    /// Browser back/forward.
    pub fn history_pop(&mut self) -> Result<Transition> {
        let controller = self.controller.as_mut().ok_or(ViewerError::NotLoaded)?;
        let transition = controller.on_history_pop();
        tracing::debug!("{}: history pop -> {:?}", V::NAME, transition);
        self.finish(transition);
        Ok(transition)
    }

    fn finish(&mut self, transition: Transition) {
        match transition {
            Transition::Rendered { scroll_to_top } => {
                self.scroll_to_top = scroll_to_top;
                self.refresh();
            },
            Transition::Ignored => self.scroll_to_top = false,
        }
    }

    fn refresh(&mut self) {
        if let Some(controller) = &self.controller {
            let rendered = controller.render();
            self.container.replace(rendered.html);
            self.regions = rendered.regions;
        }
    }
}
