//! Navigation state shared by all viewers.

use crate::data::{NodeId, TreeNode};
use std::collections::HashSet;

/// Set of collapsible node ids currently shown open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    ids: HashSet<NodeId>,
}

impl ExpandedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a node is expanded.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Mark a node as expanded.
    pub fn insert(&mut self, id: NodeId) {
        self.ids.insert(id);
    }

    /// Flip a node between expanded and collapsed.
    pub fn toggle(&mut self, id: NodeId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Collapse everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of expanded nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Expanded ids in ascending order.
    pub fn sorted_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Current view plus the path of selected nodes leading to it.
///
/// `V` is the view tag of a particular viewer. Selected ids are not checked
/// against the document; a dangling id renders as "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState<V> {
    view: V,
    parent: Option<NodeId>,
    leaf: Option<NodeId>,
    expanded: ExpandedSet,
}

impl<V: Copy + Eq> NavigationState<V> {
    /// Create a state showing the root view.
    pub fn new(root: V) -> Self {
        Self {
            view: root,
            parent: None,
            leaf: None,
            expanded: ExpandedSet::new(),
        }
    }

    /// Current view tag.
    pub fn view(&self) -> V {
        self.view
    }

    /// Selected top-level node (chapter or section).
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Selected terminal node.
    pub fn leaf(&self) -> Option<NodeId> {
        self.leaf
    }

    /// Expanded collapsible nodes.
    pub fn expanded(&self) -> &ExpandedSet {
        &self.expanded
    }

    /// Enter the root view, dropping every selection.
    pub fn enter_root(&mut self, root: V) {
        self.view = root;
        self.parent = None;
        self.leaf = None;
        self.expanded.clear();
    }

    /// Enter a mid-level view for `id`.
    ///
    /// The expanded set is reset; if `first_child` has content it becomes the
    /// only expanded node.
    pub fn enter_mid<N: TreeNode>(&mut self, view: V, id: NodeId, first_child: Option<&N>) {
        self.view = view;
        self.parent = Some(id);
        self.leaf = None;
        self.expanded.clear();

        if let Some(child) = first_child.filter(|c| c.has_content()) {
            self.expanded.insert(child.id());
        }
    }

    /// Enter a leaf view for `leaf` under `parent`.
    pub fn enter_leaf(&mut self, view: V, parent: NodeId, leaf: NodeId) {
        self.view = view;
        self.parent = Some(parent);
        self.leaf = Some(leaf);
    }

    /// Flip a collapsible node. View and selection are untouched.
    pub fn toggle(&mut self, id: NodeId) {
        self.expanded.toggle(id);
    }
}
