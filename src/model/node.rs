//! HierarchyNode data structure and forest traversal helpers.
//!
//! Every picker in the application works on the same recursive tree shape:
//! the location tree (province → municipality → sector → sub-sector), the
//! characteristics tree (category → option) and the flat property-type list
//! are all forests of `HierarchyNode`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One node of a picker hierarchy.
///
/// Ids are unique across the whole forest, not just among siblings: catalog
/// transforms build them by concatenating ancestor slugs (see
/// [`crate::model::catalog`]). A node with an empty `children` vector is a
/// leaf; absence and emptiness are interchangeable, which the serde
/// attributes encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: String,
    pub label: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,

    /// Opaque payload carried on some leaves (e.g. which characteristic and
    /// value an option leaf stands for). The picker core never looks inside.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl HierarchyNode {
    /// Create a branch node with children.
    pub fn branch(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<HierarchyNode>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children,
            meta: None,
        }
    }

    /// Create a leaf node.
    pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
            meta: None,
        }
    }

    /// Create a leaf node carrying a meta payload.
    pub fn leaf_with_meta(
        id: impl Into<String>,
        label: impl Into<String>,
        meta: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
            meta: Some(meta),
        }
    }

    /// A node with no children is a leaf, the only kind that can be selected.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Find a node anywhere in the forest by id.
pub fn find_node<'a>(roots: &'a [HierarchyNode], id: &str) -> Option<&'a HierarchyNode> {
    for node in roots {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Collect every leaf in the forest, in tree (depth-first) order.
pub fn collect_leaves<'a>(roots: &'a [HierarchyNode], out: &mut Vec<&'a HierarchyNode>) {
    for node in roots {
        if node.is_leaf() {
            out.push(node);
        } else {
            collect_leaves(&node.children, out);
        }
    }
}

/// Resolve a set of committed leaf ids to their nodes, preserving tree order.
///
/// Ids that no longer resolve (stale state from a previous catalog) are
/// silently dropped rather than reported; the consumer only ever sees nodes
/// that exist in the tree it supplied.
pub fn resolve_leaves(roots: &[HierarchyNode], ids: &[String]) -> Vec<HierarchyNode> {
    let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
    let mut leaves = Vec::new();
    collect_leaves(roots, &mut leaves);
    leaves
        .into_iter()
        .filter(|leaf| wanted.contains(leaf.id.as_str()))
        .cloned()
        .collect()
}

/// Maximum depth of the forest (a lone leaf level counts as 1).
pub fn max_depth(roots: &[HierarchyNode]) -> usize {
    roots
        .iter()
        .map(|node| 1 + max_depth(&node.children))
        .max()
        .unwrap_or(0)
}

/// Total number of nodes in the forest.
pub fn node_count(roots: &[HierarchyNode]) -> usize {
    roots
        .iter()
        .map(|node| 1 + node_count(&node.children))
        .sum()
}
