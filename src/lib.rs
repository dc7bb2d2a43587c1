//! Scripture Viewer - navigable HTML views of scripture corpora.
//!
//! Scripture Viewer loads a JSON document (chapters, sections, verses,
//! commentary) once and renders it as an HTML fragment for a container
//! element. Navigation re-renders the whole fragment from a small state
//! machine; clickable elements carry region ids that resolve to actions.
//!
//! # Features
//!
//! - Brahmasutram viewer: chapters, collapsible sections, commentary pages
//! - Upanishad viewer: sections, subsections, mantra pages
//! - Verse viewer: shlokas or mantras with introduction, summary and videos
//! - Local files or http(s) sources
//!
//! # Example
//!
//! ```ignore
//! use scripture_viewer::controller::{BrahmasutramController, Viewer};
//! use scripture_viewer::{Source, ViewerConfig};
//!
//! let source = Source::parse("data/brahmasutram.json")?;
//! let mut viewer: Viewer<BrahmasutramController> =
//!     Viewer::mount(&ViewerConfig::brahmasutram(), &source);
//!
//! // Click the first chapter card.
//! viewer.dispatch("r0")?;
//! println!("{}", viewer.container().to_html());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod navigation;
pub mod render;

pub use config::ViewerConfig;
pub use data::Source;
pub use error::{Result, ViewerError};
pub use navigation::{Action, Transition};
