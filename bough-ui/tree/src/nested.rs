use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::NavigationError;
use crate::model::{
    FlattenedNode, Node, Payload, Tree, TreePath, display_path,
    flatten_visible,
};
use crate::resolver::resolve_node;

/// Expand/collapse navigation listing every visible level at once.
///
/// Nodes are tracked by [`TreePath`]. Any number of nodes can be expanded;
/// at most one is highlighted. There is no depth or breadcrumb here.
#[derive(Debug)]
pub struct NestedController<P = Payload> {
    tree: Arc<Tree<P>>,
    expanded: HashSet<TreePath>,
    highlighted: Option<TreePath>,
}

/// Row of the nested listing.
#[derive(Debug)]
pub struct NestedRow<'a, P> {
    pub entry: FlattenedNode<'a, P>,
    pub expanded: bool,
    pub highlighted: bool,
}

/// Read-only snapshot of the nested listing.
#[derive(Debug)]
pub struct NestedView<'a, P> {
    pub roots: &'a [Node<P>],
    pub rows: Vec<NestedRow<'a, P>>,
    pub highlighted: Option<&'a Node<P>>,
}

impl<P> NestedController<P> {
    /// Start fully collapsed with nothing highlighted.
    pub fn new(tree: Arc<Tree<P>>) -> Self {
        Self {
            tree,
            expanded: HashSet::new(),
            highlighted: None,
        }
    }

    /// Return the tree being navigated.
    pub fn tree(&self) -> &Arc<Tree<P>> {
        &self.tree
    }

    /// Return whether the node at `path` shows its children.
    pub fn is_expanded(&self, path: &[String]) -> bool {
        self.expanded.contains(path)
    }

    /// Return the highlighted path.
    pub fn highlighted_path(&self) -> Option<&[String]> {
        self.highlighted.as_deref()
    }

    /// Return the highlighted node.
    pub fn highlighted(&self) -> Option<&Node<P>> {
        self.tree.node_at(self.highlighted.as_deref()?)
    }

    /// Highlight the node at `path`, or clear with `None`.
    pub fn highlight(
        &mut self,
        path: Option<&[String]>,
    ) -> Result<(), NavigationError> {
        if let Some(path) = path {
            resolve_node(&self.tree, path)?;
        }
        self.highlighted = path.map(<[String]>::to_vec);
        Ok(())
    }

    /// Show the children of the node at `path`.
    ///
    /// Returns `true` when the node was collapsed before.
    pub fn expand(&mut self, path: &[String]) -> Result<bool, NavigationError> {
        self.expandable(path)?;
        let changed = self.expanded.insert(path.to_vec());
        if changed {
            log::debug!("nested expand {}", display_path(path));
        }
        Ok(changed)
    }

    /// Hide the children of the node at `path`.
    ///
    /// Descendants keep their own expansion state. Returns `true` when the
    /// node was expanded before.
    pub fn collapse(
        &mut self,
        path: &[String],
    ) -> Result<bool, NavigationError> {
        resolve_node(&self.tree, path)?;
        let changed = self.expanded.remove(path);
        if changed {
            log::debug!("nested collapse {}", display_path(path));
        }
        Ok(changed)
    }

    /// Flip the expansion of the node at `path` and return the new state.
    pub fn toggle(&mut self, path: &[String]) -> Result<bool, NavigationError> {
        if self.is_expanded(path) {
            self.collapse(path)?;
            Ok(false)
        } else {
            self.expand(path)?;
            Ok(true)
        }
    }

    /// Handle a click: highlight the node and toggle it when expandable.
    pub fn activate(&mut self, path: &[String]) -> Result<(), NavigationError> {
        let node = resolve_node(&self.tree, path)?;
        if node.has_children() && !self.expanded.remove(path) {
            self.expanded.insert(path.to_vec());
        }
        self.highlighted = Some(path.to_vec());
        Ok(())
    }

    /// Collapse every node.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Return every visible row, depth first, in sibling order.
    pub fn rows(&self) -> Vec<NestedRow<'_, P>> {
        flatten_visible(self.tree.roots(), |path| self.is_expanded(path))
            .into_iter()
            .map(|entry| NestedRow {
                expanded: self.is_expanded(&entry.path),
                highlighted: self.highlighted.as_ref() == Some(&entry.path),
                entry,
            })
            .collect()
    }

    /// Return a snapshot for rendering.
    pub fn view(&self) -> NestedView<'_, P> {
        NestedView {
            roots: self.tree.roots(),
            rows: self.rows(),
            highlighted: self.highlighted(),
        }
    }

    /// Swap in new tree data, dropping state for nodes that disappeared.
    pub fn replace_tree(&mut self, tree: Arc<Tree<P>>) {
        self.expanded.retain(|path| {
            tree.node_at(path).is_some_and(Node::has_children)
        });
        if self
            .highlighted
            .as_deref()
            .is_some_and(|path| tree.node_at(path).is_none())
        {
            self.highlighted = None;
        }
        log::debug!("nested tree replaced, {} expanded", self.expanded.len());
        self.tree = tree;
    }

    fn expandable(&self, path: &[String]) -> Result<(), NavigationError> {
        let node = resolve_node(&self.tree, path)?;
        if !node.has_children() {
            return Err(NavigationError::NotExpandable {
                name: node.name().to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(parts: &[&str]) -> TreePath {
        parts.iter().map(|part| (*part).to_owned()).collect()
    }

    fn sample() -> Arc<Tree> {
        let tree = Tree::new(vec![
            Node::new("A").with_children(vec![
                Node::new("A1").with_children(vec![Node::new("x")]),
                Node::new("A2"),
            ]),
            Node::new("B"),
        ])
        .expect("names are unique");
        Arc::new(tree)
    }

    fn row_names(controller: &NestedController) -> Vec<String> {
        controller
            .rows()
            .iter()
            .map(|row| row.entry.node.name().to_owned())
            .collect()
    }

    #[test]
    fn given_new_controller_when_listed_then_only_roots_are_visible() {
        let controller = NestedController::new(sample());

        assert_eq!(row_names(&controller), vec!["A", "B"]);
        assert!(controller.highlighted().is_none());
    }

    #[test]
    fn given_multiple_expanded_nodes_when_listed_then_all_levels_visible() {
        let mut controller = NestedController::new(sample());

        assert!(controller.expand(&path(&["A"])).expect("expand A"));
        assert!(controller.expand(&path(&["A", "A1"])).expect("expand A1"));

        assert_eq!(row_names(&controller), vec!["A", "A1", "x", "A2", "B"]);
        let rows = controller.rows();
        assert_eq!(rows[2].entry.depth, 2);
        assert!(rows[0].expanded);
        assert!(!rows[3].expanded);
    }

    #[test]
    fn given_expanded_node_when_expanded_again_then_reports_no_change() {
        let mut controller = NestedController::new(sample());
        controller.expand(&path(&["A"])).expect("expand A");

        assert!(!controller.expand(&path(&["A"])).expect("expand A again"));
    }

    #[test]
    fn given_leaf_when_expanded_then_not_expandable_error() {
        let mut controller = NestedController::new(sample());

        let err = controller.expand(&path(&["B"])).expect_err("B is a leaf");

        assert_eq!(
            err,
            NavigationError::NotExpandable {
                name: String::from("B"),
            }
        );
        assert!(!controller.is_expanded(&path(&["B"])));
    }

    #[test]
    fn given_unknown_path_when_toggled_then_path_resolution_error() {
        let mut controller = NestedController::new(sample());

        let err = controller.toggle(&path(&["Z"])).expect_err("no Z");

        assert!(matches!(err, NavigationError::PathResolution { .. }));
    }

    #[test]
    fn given_collapsed_parent_when_listed_then_expanded_child_is_hidden() {
        let mut controller = NestedController::new(sample());
        controller.expand(&path(&["A"])).expect("expand A");
        controller.expand(&path(&["A", "A1"])).expect("expand A1");

        assert!(!controller.toggle(&path(&["A"])).expect("collapse A"));

        assert_eq!(row_names(&controller), vec!["A", "B"]);
        assert!(controller.is_expanded(&path(&["A", "A1"])));
        assert!(controller.toggle(&path(&["A"])).expect("expand A"));
        assert_eq!(row_names(&controller), vec!["A", "A1", "x", "A2", "B"]);
    }

    #[test]
    fn given_folder_when_activated_twice_then_highlighted_and_toggled_back() {
        let mut controller = NestedController::new(sample());
        let target = path(&["A"]);

        controller.activate(&target).expect("activate A");
        assert!(controller.is_expanded(&target));
        assert_eq!(controller.highlighted().map(Node::name), Some("A"));

        controller.activate(&target).expect("activate A again");
        assert!(!controller.is_expanded(&target));
        assert_eq!(controller.highlighted_path(), Some(target.as_slice()));
    }

    #[test]
    fn given_leaf_when_activated_then_highlighted_without_expansion() {
        let mut controller = NestedController::new(sample());

        controller.activate(&path(&["B"])).expect("activate B");

        let view = controller.view();
        assert_eq!(view.highlighted.map(Node::name), Some("B"));
        assert!(view.rows[1].highlighted);
        assert!(!view.rows[1].expanded);
    }

    #[test]
    fn given_empty_path_when_highlighted_then_error_and_highlight_kept() {
        let mut controller = NestedController::new(sample());
        controller
            .highlight(Some(path(&["B"]).as_slice()))
            .expect("highlight B");
        let empty: &[String] = &[];

        let err = controller.highlight(Some(empty)).expect_err("empty path");

        assert_eq!(err, NavigationError::EmptyPath);
        assert_eq!(controller.highlighted().map(Node::name), Some("B"));
        controller.highlight(None).expect("clear");
        assert!(controller.highlighted().is_none());
    }

    #[test]
    fn given_new_tree_when_replaced_then_stale_state_is_dropped() {
        let mut controller = NestedController::new(sample());
        controller.expand(&path(&["A"])).expect("expand A");
        controller.expand(&path(&["A", "A1"])).expect("expand A1");
        controller.activate(&path(&["A", "A2"])).expect("activate A2");

        let updated = Tree::new(vec![
            Node::new("A").with_children(vec![Node::new("A1")]),
        ])
        .expect("names are unique");
        controller.replace_tree(Arc::new(updated));

        assert!(controller.is_expanded(&path(&["A"])));
        assert!(!controller.is_expanded(&path(&["A", "A1"])));
        assert!(controller.highlighted_path().is_none());
        assert_eq!(row_names(&controller), vec!["A", "A1"]);
    }

    #[test]
    fn given_expanded_nodes_when_collapse_all_then_roots_only() {
        let mut controller = NestedController::new(sample());
        controller.expand(&path(&["A"])).expect("expand A");

        controller.collapse_all();

        assert_eq!(row_names(&controller), vec!["A", "B"]);
    }
}
