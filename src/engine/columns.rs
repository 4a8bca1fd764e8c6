//! Column computation for the drill-down view.
//!
//! A "column" is the list of sibling nodes at one depth of the current
//! navigation path. Column 0 is always the forest roots; each further column
//! is the children of the path node one level up.

use crate::model::node::{find_node, HierarchyNode};

/// Compute the visible columns for a navigation path.
///
/// Column i+1 exists iff `path[i]` names a node of column i that has
/// children, and equals exactly those children. The walk stops at the first
/// leaf, at the first id that does not resolve (a stale path is a prefix,
/// never an error) or at the end of the path. An empty forest yields zero
/// columns.
pub fn compute_columns<'a>(
    roots: &'a [HierarchyNode],
    path: &[String],
) -> Vec<&'a [HierarchyNode]> {
    if roots.is_empty() {
        return Vec::new();
    }

    let mut columns: Vec<&[HierarchyNode]> = vec![roots];
    let mut level = roots;
    for id in path {
        let Some(node) = level.iter().find(|node| &node.id == id) else {
            break;
        };
        if node.children.is_empty() {
            break;
        }
        columns.push(&node.children);
        level = &node.children;
    }
    columns
}

/// Resolve a committed root→leaf id path back to nodes for display
/// (breadcrumbs like "Azua › Las Charcas › Hatillo").
///
/// Resolution follows the ids level by level and stops at the first broken
/// link, returning the prefix that still exists in the forest.
pub fn path_from_ids<'a>(roots: &'a [HierarchyNode], ids: &[String]) -> Vec<&'a HierarchyNode> {
    let mut path = Vec::new();
    let mut level = roots;
    for id in ids {
        let Some(node) = level.iter().find(|node| &node.id == id) else {
            break;
        };
        path.push(node);
        level = &node.children;
    }
    path
}

/// Resolve arbitrary leaf ids (not a path) to their nodes, for rendering a
/// trigger caption from a committed selection.
pub fn labels_for_ids(roots: &[HierarchyNode], ids: &[String]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| find_node(roots, id).map(|node| node.label.clone()))
        .collect()
}
