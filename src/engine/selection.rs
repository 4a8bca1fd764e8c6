//! Node activation: the one place selection state changes.
//!
//! Activating a branch navigates (drill in without committing); activating a
//! leaf commits by the mode rule. This asymmetry is what separates the
//! cascading picker from a plain dropdown.

use serde::{Deserialize, Serialize};

use crate::model::node::HierarchyNode;

/// How leaf activation changes the selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// At most one leaf; selecting a new one replaces it.
    Single,
    /// Selecting toggles membership.
    Multiple,
}

/// Result of activating a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    /// Navigation path after the activation.
    pub path: Vec<String>,
    /// Selection set after the activation (insertion order preserved).
    pub selection: Vec<String>,
    /// True iff the activation committed a selection change.
    pub committed: bool,
}

/// Activate `node` sitting in column `column`.
///
/// Branch: the path is truncated to the node's column and the node appended;
/// the selection is untouched. Leaf: the selection changes by the mode rule
/// and the path is left as-is; hover history stays valid for the columns
/// that are already open.
pub fn activate(
    node: &HierarchyNode,
    column: usize,
    path: &[String],
    mode: SelectionMode,
    selection: &[String],
) -> Activation {
    if !node.is_leaf() {
        let mut new_path: Vec<String> = path.iter().take(column).cloned().collect();
        new_path.push(node.id.clone());
        return Activation {
            path: new_path,
            selection: selection.to_vec(),
            committed: false,
        };
    }

    let new_selection = match mode {
        SelectionMode::Single => vec![node.id.clone()],
        SelectionMode::Multiple => toggle(selection, &node.id),
    };
    Activation {
        path: path.to_vec(),
        selection: new_selection,
        committed: true,
    }
}

fn toggle(selection: &[String], id: &str) -> Vec<String> {
    if selection.iter().any(|existing| existing == id) {
        selection
            .iter()
            .filter(|existing| existing.as_str() != id)
            .cloned()
            .collect()
    } else {
        let mut next = selection.to_vec();
        next.push(id.to_string());
        next
    }
}
