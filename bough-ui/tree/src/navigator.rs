use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::column::{ColumnController, ColumnView};
use crate::errors::NavigationError;
use crate::model::{Node, Payload, Tree};
use crate::nested::{NestedController, NestedView};

/// Presentation mode of the tree widget.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Single selection with depth, path and breadcrumb.
    #[default]
    Column,
    /// Every level listed at once, driven by expand/collapse.
    Nested,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Column => f.write_str("column"),
            Mode::Nested => f.write_str("nested"),
        }
    }
}

#[derive(Debug)]
enum Presentation<P> {
    Column(ColumnController<P>),
    Nested(NestedController<P>),
}

/// Navigation controller owned by one tree widget.
///
/// Holds exactly one mode-specific controller. Column operations called in
/// nested mode (and the reverse) fail with
/// [`NavigationError::UnsupportedInMode`] and change nothing.
#[derive(Debug)]
pub struct TreeNavigator<P = Payload> {
    presentation: Presentation<P>,
}

/// Snapshot handed to the render adapter.
#[derive(Debug)]
pub enum NavigationView<'a, P> {
    Column(ColumnView<'a, P>),
    Nested(NestedView<'a, P>),
}

impl<'a, P> NavigationView<'a, P> {
    pub fn mode(&self) -> Mode {
        match self {
            NavigationView::Column(_) => Mode::Column,
            NavigationView::Nested(_) => Mode::Nested,
        }
    }

    /// Visible level; nested mode reports the root level.
    pub fn level(&self) -> &'a [Node<P>] {
        match self {
            NavigationView::Column(view) => view.level,
            NavigationView::Nested(view) => view.roots,
        }
    }

    pub fn parent(&self) -> Option<&'a Node<P>> {
        match self {
            NavigationView::Column(view) => view.parent,
            NavigationView::Nested(_) => None,
        }
    }

    /// Selected node in column mode, highlighted node in nested mode.
    pub fn selected(&self) -> Option<&'a Node<P>> {
        match self {
            NavigationView::Column(view) => view.selected,
            NavigationView::Nested(view) => view.highlighted,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            NavigationView::Column(view) => view.depth,
            NavigationView::Nested(_) => 0,
        }
    }

    pub fn path(&self) -> &'a [String] {
        match self {
            NavigationView::Column(view) => view.path,
            NavigationView::Nested(_) => &[],
        }
    }
}

impl<P> TreeNavigator<P> {
    /// Create a navigator at its initial state for `mode`.
    pub fn create(tree: Arc<Tree<P>>, mode: Mode) -> Self {
        Self {
            presentation: presentation(tree, mode),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.presentation {
            Presentation::Column(_) => Mode::Column,
            Presentation::Nested(_) => Mode::Nested,
        }
    }

    /// Return the tree being navigated.
    pub fn tree(&self) -> &Arc<Tree<P>> {
        match &self.presentation {
            Presentation::Column(column) => column.tree(),
            Presentation::Nested(nested) => nested.tree(),
        }
    }

    /// Return the column controller when in column mode.
    pub fn column(&self) -> Option<&ColumnController<P>> {
        match &self.presentation {
            Presentation::Column(column) => Some(column),
            Presentation::Nested(_) => None,
        }
    }

    /// Return the nested controller when in nested mode.
    pub fn nested(&self) -> Option<&NestedController<P>> {
        match &self.presentation {
            Presentation::Column(_) => None,
            Presentation::Nested(nested) => Some(nested),
        }
    }

    /// Return a consistent snapshot of the current mode.
    pub fn view(&self) -> NavigationView<'_, P> {
        match &self.presentation {
            Presentation::Column(column) => {
                NavigationView::Column(column.view())
            },
            Presentation::Nested(nested) => {
                NavigationView::Nested(nested.view())
            },
        }
    }

    /// Switch presentation mode.
    ///
    /// Switching to the current mode is a no-op. Otherwise the target mode
    /// starts from its initial state over the same tree.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode() == mode {
            return;
        }
        log::debug!("tree navigator mode {} -> {mode}", self.mode());
        self.presentation = presentation(Arc::clone(self.tree()), mode);
    }

    /// Swap in new tree data for the active controller.
    pub fn replace_tree(
        &mut self,
        tree: Arc<Tree<P>>,
    ) -> Result<(), NavigationError> {
        match &mut self.presentation {
            Presentation::Column(column) => column.replace_tree(tree),
            Presentation::Nested(nested) => {
                nested.replace_tree(tree);
                Ok(())
            },
        }
    }

    /// See [`ColumnController::select`].
    pub fn select(&mut self, name: Option<&str>) -> Result<(), NavigationError> {
        self.column_mut("select")?.select(name)
    }

    /// See [`ColumnController::drill_in`].
    pub fn drill_in(&mut self) -> Result<(), NavigationError> {
        self.column_mut("drill in")?.drill_in()
    }

    /// See [`ColumnController::drill_out`].
    pub fn drill_out(&mut self) -> Result<(), NavigationError> {
        self.column_mut("drill out")?.drill_out()
    }

    /// See [`ColumnController::drill_out_to`].
    pub fn drill_out_to(
        &mut self,
        depth: usize,
    ) -> Result<(), NavigationError> {
        self.column_mut("drill out")?.drill_out_to(depth)
    }

    /// See [`NestedController::activate`].
    pub fn activate(&mut self, path: &[String]) -> Result<(), NavigationError> {
        self.nested_mut("activate")?.activate(path)
    }

    /// See [`NestedController::toggle`].
    pub fn toggle(&mut self, path: &[String]) -> Result<bool, NavigationError> {
        self.nested_mut("toggle")?.toggle(path)
    }

    /// See [`NestedController::highlight`].
    pub fn highlight(
        &mut self,
        path: Option<&[String]>,
    ) -> Result<(), NavigationError> {
        self.nested_mut("highlight")?.highlight(path)
    }

    fn column_mut(
        &mut self,
        operation: &'static str,
    ) -> Result<&mut ColumnController<P>, NavigationError> {
        match &mut self.presentation {
            Presentation::Column(column) => Ok(column),
            Presentation::Nested(_) => Err(NavigationError::UnsupportedInMode {
                operation,
                mode: Mode::Nested,
            }),
        }
    }

    fn nested_mut(
        &mut self,
        operation: &'static str,
    ) -> Result<&mut NestedController<P>, NavigationError> {
        match &mut self.presentation {
            Presentation::Nested(nested) => Ok(nested),
            Presentation::Column(_) => Err(NavigationError::UnsupportedInMode {
                operation,
                mode: Mode::Column,
            }),
        }
    }
}

fn presentation<P>(tree: Arc<Tree<P>>, mode: Mode) -> Presentation<P> {
    match mode {
        Mode::Column => Presentation::Column(ColumnController::new(tree)),
        Mode::Nested => Presentation::Nested(NestedController::new(tree)),
    }
}
