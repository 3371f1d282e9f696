use std::sync::Arc;

use crate::errors::{DrillInReason, NavigationError};
use crate::model::{Node, Payload, Tree, TreePath, display_path};
use crate::resolver::{Level, follow_trail, resolve_trail};

/// Cursor of the column presentation.
///
/// `trail[i]` is the sibling index of `path[i]`, so the level is derived from
/// the trail without re-matching names. Both are replaced together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ColumnState {
    path: TreePath,
    trail: Vec<usize>,
    selected: Option<usize>,
}

/// Single-selection drill-down navigation over a shared tree.
#[derive(Debug)]
pub struct ColumnController<P = Payload> {
    tree: Arc<Tree<P>>,
    state: ColumnState,
}

/// One breadcrumb segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breadcrumb<'a> {
    /// Depth that is restored when navigating back to this segment.
    pub depth: usize,
    /// Name of the node drilled into at that depth.
    pub name: &'a str,
}

/// Read-only snapshot of the column cursor and its resolved level.
#[derive(Debug)]
pub struct ColumnView<'a, P> {
    pub level: &'a [Node<P>],
    pub parent: Option<&'a Node<P>>,
    pub selected: Option<&'a Node<P>>,
    pub depth: usize,
    pub path: &'a [String],
}

impl<'a, P> ColumnView<'a, P> {
    /// Label of the back control: the last path segment below the root.
    pub fn breadcrumb(&self) -> Option<&'a str> {
        self.path.last().map(String::as_str)
    }
}

impl<P> ColumnController<P> {
    /// Start at the root level with nothing selected.
    pub fn new(tree: Arc<Tree<P>>) -> Self {
        Self {
            tree,
            state: ColumnState::default(),
        }
    }

    /// Return the tree being navigated.
    pub fn tree(&self) -> &Arc<Tree<P>> {
        &self.tree
    }

    /// Return the number of drill-ins from the root.
    pub fn depth(&self) -> usize {
        self.state.path.len()
    }

    /// Return the names drilled into, root first.
    pub fn path(&self) -> &[String] {
        &self.state.path
    }

    /// Return the current level and its parent.
    pub fn level(&self) -> Level<'_, P> {
        follow_trail(&self.tree, &self.state.trail)
    }

    /// Return the selected node of the current level.
    pub fn selected(&self) -> Option<&Node<P>> {
        let index = self.state.selected?;
        self.level().siblings.get(index)
    }

    /// Return a consistent snapshot for rendering.
    pub fn view(&self) -> ColumnView<'_, P> {
        let Level { siblings, parent } = self.level();
        ColumnView {
            level: siblings,
            parent,
            selected: self
                .state
                .selected
                .and_then(move |index| siblings.get(index)),
            depth: self.depth(),
            path: &self.state.path,
        }
    }

    /// Return every breadcrumb segment, root first.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb<'_>> {
        self.state
            .path
            .iter()
            .enumerate()
            .map(|(depth, name)| Breadcrumb { depth, name })
            .collect()
    }

    /// Select a member of the current level, or clear with `None`.
    pub fn select(&mut self, name: Option<&str>) -> Result<(), NavigationError> {
        let selected = match name {
            Some(name) => {
                let siblings = self.level().siblings;
                let Some(index) = Tree::<P>::position(siblings, name) else {
                    return Err(NavigationError::InvalidSelection {
                        name: name.to_owned(),
                    });
                };
                Some(index)
            },
            None => None,
        };

        self.state.selected = selected;
        Ok(())
    }

    /// Descend into the selected node.
    ///
    /// The selection becomes the parent of the new level and is cleared.
    pub fn drill_in(&mut self) -> Result<(), NavigationError> {
        let Some(node) = self.selected() else {
            return Err(NavigationError::InvalidDrillIn {
                reason: DrillInReason::NoSelection,
            });
        };
        if !node.has_children() {
            return Err(NavigationError::InvalidDrillIn {
                reason: DrillInReason::Leaf {
                    name: node.name().to_owned(),
                },
            });
        }

        let mut path = self.state.path.clone();
        path.push(node.name().to_owned());
        let trail = resolve_trail(&self.tree, &path)?;

        log::debug!("column drill in to {}", display_path(&path));
        self.state = ColumnState {
            path,
            trail,
            selected: None,
        };
        Ok(())
    }

    /// Return to the previous level, reselecting the node drilled out of.
    pub fn drill_out(&mut self) -> Result<(), NavigationError> {
        let Some(target) = self.depth().checked_sub(1) else {
            return Err(NavigationError::InvalidDrillOut);
        };
        self.drill_out_to(target)
    }

    /// Return to `depth`, reselecting the breadcrumb node at that depth.
    pub fn drill_out_to(
        &mut self,
        depth: usize,
    ) -> Result<(), NavigationError> {
        if depth >= self.depth() {
            return Err(NavigationError::InvalidDrillOut);
        }

        let path = self.state.path[..depth].to_vec();
        let trail = resolve_trail(&self.tree, &path)?;
        let selected = Some(self.state.trail[depth]);

        log::debug!("column drill out to {}", display_path(&path));
        self.state = ColumnState {
            path,
            trail,
            selected,
        };
        Ok(())
    }

    /// Swap in new tree data, keeping the cursor where it is.
    ///
    /// Fails with [`NavigationError::PathResolution`] if the current path no
    /// longer exists; the old tree and cursor are kept in that case. The
    /// selection survives when a sibling with the same name still exists.
    pub fn replace_tree(
        &mut self,
        tree: Arc<Tree<P>>,
    ) -> Result<(), NavigationError> {
        let trail = resolve_trail(&tree, &self.state.path)?;
        let selected = self.selected().and_then(|node| {
            let siblings = follow_trail(&tree, &trail).siblings;
            Tree::<P>::position(siblings, node.name())
        });

        log::debug!(
            "column tree replaced at {}",
            display_path(&self.state.path)
        );
        self.state = ColumnState {
            path: self.state.path.clone(),
            trail,
            selected,
        };
        self.tree = tree;
        Ok(())
    }
}
