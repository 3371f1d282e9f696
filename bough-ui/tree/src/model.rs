use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::TreeError;

/// Path of node names from the root to a node.
///
/// Names are unique among siblings (enforced by [`Tree::new`]), so a path
/// identifies at most one node.
pub type TreePath = Vec<String>;

/// Opaque per-node fields carried through unmodified.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Entry of the hierarchical data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<P = Payload> {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node<P>>,
    #[serde(flatten)]
    payload: P,
}

impl<P> Node<P> {
    /// Create a node carrying `payload` with no children.
    pub fn with_payload(name: impl Into<String>, payload: P) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            payload,
        }
    }

    /// Attach children, replacing any existing ones.
    pub fn with_children(mut self, children: Vec<Node<P>>) -> Self {
        self.children = children;
        self
    }

    /// Return the node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return ordered children (empty for leaves).
    pub fn children(&self) -> &[Node<P>] {
        &self.children
    }

    /// Return whether the node can be drilled into or expanded.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Return the opaque payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }
}

impl<P: Default> Node<P> {
    /// Create a node with a default payload and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_payload(name, P::default())
    }
}

/// Ordered root-level nodes, read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<P = Payload> {
    roots: Vec<Node<P>>,
}

impl<P> Tree<P> {
    /// Build a tree, rejecting sibling sets with repeated names.
    pub fn new(roots: Vec<Node<P>>) -> Result<Self, TreeError> {
        let mut parent = Vec::new();
        check_unique_names(&roots, &mut parent)?;
        Ok(Self { roots })
    }

    /// Return root-level siblings.
    pub fn roots(&self) -> &[Node<P>] {
        &self.roots
    }

    /// Return a root-level node by index.
    pub fn get(&self, index: usize) -> Option<&Node<P>> {
        self.roots.get(index)
    }

    /// Return whether the tree has no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find the index of `name` within `level`.
    pub fn position(level: &[Node<P>], name: &str) -> Option<usize> {
        level.iter().position(|node| node.name() == name)
    }

    /// Resolve a full node path, returning `None` when any segment misses.
    pub fn node_at(&self, path: &[String]) -> Option<&Node<P>> {
        let (head, tail) = path.split_first()?;
        let mut node = self.roots.get(Self::position(&self.roots, head)?)?;
        for segment in tail {
            let index = Self::position(node.children(), segment)?;
            node = &node.children()[index];
        }
        Some(node)
    }
}

impl<P: DeserializeOwned + Default> Tree<P> {
    /// Parse a JSON array of root nodes.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let roots: Vec<Node<P>> = serde_json::from_str(json)?;
        Self::new(roots)
    }

    /// Read and parse a JSON tree file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TreeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

fn check_unique_names<P>(
    level: &[Node<P>],
    parent: &mut Vec<String>,
) -> Result<(), TreeError> {
    let mut seen = HashSet::with_capacity(level.len());
    for node in level {
        if !seen.insert(node.name()) {
            return Err(TreeError::DuplicateName {
                parent: display_path(parent),
                name: node.name().to_owned(),
            });
        }
    }

    for node in level {
        parent.push(node.name().to_owned());
        check_unique_names(node.children(), parent)?;
        parent.pop();
    }
    Ok(())
}

/// Render a path as `/a/b`; the root level renders as `/`.
pub fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        return String::from("/");
    }
    path.iter().fold(String::new(), |mut out, segment| {
        out.push('/');
        out.push_str(segment);
        out
    })
}

/// Flattened representation of a visible tree node.
#[derive(Debug)]
pub struct FlattenedNode<'a, P> {
    /// Zero-based tree depth (`0` for root-level rows).
    pub depth: usize,
    /// Borrowed source node.
    pub node: &'a Node<P>,
    /// Name-based path from the root to this row.
    pub path: TreePath,
}

/// Flatten a tree into a depth-first list of visible rows.
///
/// Sibling order is preserved. Children are included only when the node has
/// children and `is_expanded` returns `true` for its path.
pub fn flatten_visible<'a, P, F>(
    nodes: &'a [Node<P>],
    is_expanded: F,
) -> Vec<FlattenedNode<'a, P>>
where
    F: Fn(&[String]) -> bool,
{
    let mut entries = Vec::new();
    let mut path = Vec::new();
    for node in nodes {
        push_node(node, 0, &mut path, &is_expanded, &mut entries);
    }
    entries
}

fn push_node<'a, P, F>(
    node: &'a Node<P>,
    depth: usize,
    path: &mut Vec<String>,
    is_expanded: &F,
    entries: &mut Vec<FlattenedNode<'a, P>>,
) where
    F: Fn(&[String]) -> bool,
{
    path.push(node.name().to_owned());
    entries.push(FlattenedNode {
        depth,
        node,
        path: path.clone(),
    });

    if node.has_children() && is_expanded(path.as_slice()) {
        for child in node.children() {
            push_node(child, depth + 1, path, is_expanded, entries);
        }
    }

    path.pop();
}
