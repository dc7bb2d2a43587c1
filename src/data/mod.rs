//! Document reading and representation.
//!
//! This module handles loading JSON documents and representing each corpus
//! as a tree of typed nodes. Documents never change once loaded.

use serde::{Deserialize, Deserializer};

mod brahmasutram;
mod loader;
mod upanishad;
mod verse;

pub use brahmasutram::{Adhikaranam, BrahmasutramDocument, Chapter, Section};
pub use loader::{DataLoader, Source};
pub use upanishad::{Subsection, UpanishadDocument, UpanishadSection};
pub use verse::{Passage, Verse, VerseDocument, VerseKind, VerseNumber, VideoRef};

/// Identifier of a node, unique within its parent's sequence.
pub type NodeId = u32;

/// A unit of hierarchical content with an identifier and a title.
pub trait TreeNode {
    /// Identifier of this node.
    fn id(&self) -> NodeId;

    /// Display title.
    fn title(&self) -> &str;

    /// Number of children (or terminal items) below this node.
    fn child_count(&self) -> usize;

    /// Whether the node has anything to show when opened.
    fn has_content(&self) -> bool {
        self.child_count() > 0
    }
}

/// Find a node by id in an ordered sequence.
pub fn find_node<N: TreeNode>(nodes: &[N], id: NodeId) -> Option<&N> {
    nodes.iter().find(|n| n.id() == id)
}

/// Read an optional field, treating an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read an optional string, dropping it when empty.
pub(crate) fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty(Option::<String>::deserialize(deserializer)?))
}

pub(crate) fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}
