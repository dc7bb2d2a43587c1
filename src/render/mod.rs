//! HTML rendering.
//!
//! A render turns a document and its navigation state into an HTML fragment
//! plus a table of the clickable regions in that fragment. Nothing in the
//! markup is executable; a dispatcher resolves region ids against the table.

pub mod brahmasutram;
mod chrome;
pub mod formatters;
pub mod html;
pub mod upanishad;
pub mod verse;

use crate::navigation::Action;

pub use chrome::{Crumb, Header};
pub use html::{escape, Markup};

/// A clickable region of a rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Id carried in the markup as `data-region`.
    pub id: String,
    /// Action bound to the region.
    pub action: Action,
}

/// Regions of a single render, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionTable {
    regions: Vec<Region>,
}

impl RegionTable {
    /// Bind an action to the next region id and return that id.
    pub fn bind(&mut self, action: Action) -> String {
        let id = format!("r{}", self.regions.len());
        self.regions.push(Region {
            id: id.clone(),
            action,
        });
        id
    }

    /// Action bound to a region id.
    pub fn lookup(&self, id: &str) -> Option<Action> {
        self.regions.iter().find(|r| r.id == id).map(|r| r.action)
    }

    /// First region bound to an action.
    pub fn region_for(&self, action: Action) -> Option<&str> {
        self.regions
            .iter()
            .find(|r| r.action == action)
            .map(|r| r.id.as_str())
    }

    /// All regions in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if the render has no clickable regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Output of one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// HTML fragment for the container.
    pub html: String,
    /// Clickable regions of `html`.
    pub regions: RegionTable,
}

impl Rendered {
    /// A fragment with no clickable regions.
    pub fn static_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            regions: RegionTable::default(),
        }
    }

    /// `<p>message</p>` with the message escaped.
    pub fn message(message: &str) -> Self {
        Self::static_html(format!("<p>{}</p>", escape(message)))
    }
}
