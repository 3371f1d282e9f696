//! Navigation state for hierarchical tree widgets.
//!
//! The crate tracks where a user is inside an arbitrary-depth tree and keeps
//! the visible level consistent with that position. Drawing is left to a
//! [`RenderAdapter`]; this crate only computes what should be drawn.
//!
//! Two presentation modes exist:
//! - [`Mode::Column`] shows one level at a time. Selecting a node with
//!   children and drilling in makes its children the visible level; drilling
//!   out returns to the previous level and reselects the node left behind.
//! - [`Mode::Nested`] lists every level at once, with any number of expanded
//!   nodes and a single highlighted one.
//!
//! Every operation is synchronous and all-or-nothing: on error the navigator
//! is left exactly as it was.
//!
//! # Quick Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use bough_ui_tree::{Mode, Node, Tree, TreeNavigator};
//!
//! let tree: Tree = Tree::new(vec![
//!     Node::new("A").with_children(vec![Node::new("A1"), Node::new("A2")]),
//!     Node::new("B"),
//! ])
//! .expect("sibling names are unique");
//!
//! let mut navigator = TreeNavigator::create(Arc::new(tree), Mode::Column);
//! navigator.select(Some("A")).expect("A is in the root level");
//! navigator.drill_in().expect("A has children");
//!
//! let view = navigator.view();
//! assert_eq!(view.path(), ["A"]);
//! assert_eq!(view.level().len(), 2);
//!
//! navigator.drill_out().expect("one level deep");
//! assert_eq!(navigator.view().selected().map(Node::name), Some("A"));
//! ```

mod column;
mod errors;
mod model;
mod navigator;
mod nested;
mod render;
mod resolver;
mod shared;

pub use column::{Breadcrumb, ColumnController, ColumnView};
pub use errors::{ConfigError, DrillInReason, NavigationError, TreeError};
pub use model::{
    FlattenedNode, Node, Payload, Tree, TreePath, display_path,
    flatten_visible,
};
pub use navigator::{Mode, NavigationView, TreeNavigator};
pub use nested::{NestedController, NestedRow, NestedView};
pub use render::{ColumnStyle, NestedStyle, RenderAdapter, RenderConfig};
pub use resolver::{Level, resolve_level, resolve_node, resolve_trail};
pub use shared::SharedNavigator;
