use crate::errors::NavigationError;
use crate::model::{Node, Tree};

/// Sibling sequence visible at some depth, plus the node owning it.
#[derive(Debug, PartialEq)]
pub struct Level<'a, P> {
    /// Ordered siblings of the level.
    pub siblings: &'a [Node<P>],
    /// Node whose children form the level; `None` at the root.
    pub parent: Option<&'a Node<P>>,
}

impl<P> Clone for Level<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Level<'_, P> {}

/// Resolve the level reached by following `path` from the roots.
///
/// Each segment is matched by name against the current level. The result
/// depends only on `(tree, path)`.
pub fn resolve_level<'a, P>(
    tree: &'a Tree<P>,
    path: &[String],
) -> Result<Level<'a, P>, NavigationError> {
    let trail = resolve_trail(tree, path)?;
    Ok(follow_trail(tree, &trail))
}

/// Resolve `path` into the sibling index of every segment.
pub fn resolve_trail<P>(
    tree: &Tree<P>,
    path: &[String],
) -> Result<Vec<usize>, NavigationError> {
    let mut trail = Vec::with_capacity(path.len());
    let mut level = tree.roots();
    for (depth, segment) in path.iter().enumerate() {
        let Some(index) = Tree::<P>::position(level, segment) else {
            return Err(NavigationError::PathResolution {
                segment: segment.clone(),
                depth,
            });
        };
        trail.push(index);
        level = level[index].children();
    }
    Ok(trail)
}

/// Resolve `path` to the node it names.
pub fn resolve_node<'a, P>(
    tree: &'a Tree<P>,
    path: &[String],
) -> Result<&'a Node<P>, NavigationError> {
    if path.is_empty() {
        return Err(NavigationError::EmptyPath);
    }
    let level = resolve_level(tree, path)?;
    level.parent.ok_or(NavigationError::EmptyPath)
}

/// Walk an index trail previously produced by [`resolve_trail`] against the
/// same tree. Trees are immutable, so the trail stays valid for its lifetime.
pub(crate) fn follow_trail<'a, P>(
    tree: &'a Tree<P>,
    trail: &[usize],
) -> Level<'a, P> {
    let mut level = Level {
        siblings: tree.roots(),
        parent: None,
    };
    for &index in trail {
        let node = &level.siblings[index];
        level = Level {
            siblings: node.children(),
            parent: Some(node),
        };
    }
    level
}
