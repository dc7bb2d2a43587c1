//! Navigation state and transitions.
//!
//! This module provides the mutable half of a viewer: which view is shown,
//! which nodes are selected, and which collapsible sections are open.

mod action;
mod state;

pub use action::{Action, Transition};
pub use state::{ExpandedSet, NavigationState};
