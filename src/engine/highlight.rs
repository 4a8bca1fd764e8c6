//! Ancestor highlighting for committed selections.
//!
//! Only leaves can be selected, but the columns leading to a selected leaf
//! should read as active too. A node is highlighted iff it is selected or
//! any descendant is.

use std::collections::HashSet;

use crate::model::node::HierarchyNode;

/// Compute the set of highlighted node ids for a selection.
///
/// Full recursive descent per call. The trees this runs on stay well under
/// a few hundred nodes, so there is no incremental pass; callers that render
/// repeatedly may cache the result per selection identity.
pub fn highlighted_ids(roots: &[HierarchyNode], selection: &[String]) -> HashSet<String> {
    let selected: HashSet<&str> = selection.iter().map(String::as_str).collect();
    let mut highlighted = HashSet::new();
    for node in roots {
        visit(node, &selected, &mut highlighted);
    }
    highlighted
}

fn visit(node: &HierarchyNode, selected: &HashSet<&str>, highlighted: &mut HashSet<String>) -> bool {
    let mut hit = selected.contains(node.id.as_str());
    for child in &node.children {
        if visit(child, selected, highlighted) {
            hit = true;
        }
    }
    if hit {
        highlighted.insert(node.id.clone());
    }
    hit
}
