//! Navigation actions and their outcomes.

use crate::data::NodeId;
use crate::error::{Result, ViewerError};
use std::fmt;
use std::str::FromStr;

/// A navigation request, the whole invocation surface of a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Return to the top-level listing.
    ShowRoot,
    /// Open a top-level node.
    ShowMid(NodeId),
    /// Open a terminal node under its parent.
    ShowLeaf(NodeId, NodeId),
    /// Open or close a collapsible section.
    Toggle(NodeId),
}

/// What a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// State unchanged, nothing re-rendered.
    Ignored,
    /// State changed and the container was re-rendered.
    Rendered {
        /// Whether the page should scroll back to the top.
        scroll_to_top: bool,
    },
}

impl Transition {
    /// Re-rendered, staying at the current scroll position.
    pub const RENDERED: Transition = Transition::Rendered {
        scroll_to_top: false,
    };

    /// Re-rendered, scrolling to the top.
    pub const RENDERED_AT_TOP: Transition = Transition::Rendered {
        scroll_to_top: true,
    };

    /// Check if the transition re-rendered.
    pub fn is_rendered(self) -> bool {
        matches!(self, Transition::Rendered { .. })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ShowRoot => f.write_str("root"),
            Action::ShowMid(id) => write!(f, "mid:{}", id),
            Action::ShowLeaf(parent, leaf) => write!(f, "leaf:{}:{}", parent, leaf),
            Action::Toggle(id) => write!(f, "toggle:{}", id),
        }
    }
}

impl FromStr for Action {
    type Err = ViewerError;

    /// Parse `root`, `mid:<id>`, `leaf:<parent>:<child>` or `toggle:<id>`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ViewerError::InvalidAction(s.to_string());
        let parse_id = |part: &str| part.trim().parse::<NodeId>().map_err(|_| invalid());

        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            ["root"] => Ok(Action::ShowRoot),
            ["mid", id] => Ok(Action::ShowMid(parse_id(*id)?)),
            ["leaf", parent, leaf] => Ok(Action::ShowLeaf(parse_id(*parent)?, parse_id(*leaf)?)),
            ["toggle", id] => Ok(Action::Toggle(parse_id(*id)?)),
            _ => Err(invalid()),
        }
    }
}
