//! Property tests for the pure selection engine.

use proptest::prelude::*;

use cascada::engine::{activate, compute_columns, SelectionMode};
use cascada::model::{collect_leaves, max_depth};
use cascada::HierarchyNode;

/// Tree shape without ids; ids are assigned from the structure so they are
/// unique across the whole forest by construction.
#[derive(Debug, Clone)]
struct Shape(Vec<Shape>);

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = Just(Shape(Vec::new()));
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Shape)
    })
}

fn forest_strategy() -> impl Strategy<Value = Vec<HierarchyNode>> {
    prop::collection::vec(shape_strategy(), 1..4).prop_map(|shapes| {
        shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| build(shape, &format!("n{index}")))
            .collect()
    })
}

fn build(shape: &Shape, id: &str) -> HierarchyNode {
    let children = shape
        .0
        .iter()
        .enumerate()
        .map(|(index, child)| build(child, &format!("{id}_{index}")))
        .collect();
    HierarchyNode::branch(id, format!("Label {id}"), children)
}

/// Walk down from the roots by child indices, producing a valid path.
fn path_from_choices(roots: &[HierarchyNode], choices: &[prop::sample::Index]) -> Vec<String> {
    let mut path = Vec::new();
    let mut level = roots;
    for choice in choices {
        if level.is_empty() {
            break;
        }
        let node = &level[choice.index(level.len())];
        path.push(node.id.clone());
        if node.is_leaf() {
            break;
        }
        level = &node.children;
    }
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: single-mode activation of any leaf yields exactly that leaf,
    /// regardless of the prior selection.
    #[test]
    fn property_single_mode_always_replaces(
        forest in forest_strategy(),
        leaf_choice in any::<prop::sample::Index>(),
        prior in prop::collection::vec("[a-z0-9_]{1,8}", 0..4),
    ) {
        let mut leaves = Vec::new();
        collect_leaves(&forest, &mut leaves);
        prop_assume!(!leaves.is_empty());
        let leaf = leaves[leaf_choice.index(leaves.len())];

        let result = activate(leaf, 0, &[], SelectionMode::Single, &prior);
        prop_assert!(result.committed);
        prop_assert_eq!(result.selection, vec![leaf.id.clone()]);
    }

    /// PROPERTY: toggling the same leaf twice in multiple mode returns to
    /// the original selection set.
    #[test]
    fn property_multiple_mode_double_toggle_is_identity(
        forest in forest_strategy(),
        leaf_choice in any::<prop::sample::Index>(),
    ) {
        let mut leaves = Vec::new();
        collect_leaves(&forest, &mut leaves);
        prop_assume!(!leaves.is_empty());
        let leaf = leaves[leaf_choice.index(leaves.len())];

        let original = vec!["other-id".to_string()];
        let once = activate(leaf, 0, &[], SelectionMode::Multiple, &original);
        let twice = activate(leaf, 0, &[], SelectionMode::Multiple, &once.selection);
        prop_assert_eq!(twice.selection, original);
    }

    /// PROPERTY: activating a branch never changes the selection, only the
    /// path.
    #[test]
    fn property_branch_activation_never_selects(
        forest in forest_strategy(),
        node_choice in any::<prop::sample::Index>(),
        selection in prop::collection::vec("[a-z0-9_]{1,8}", 0..4),
    ) {
        let mut branches = Vec::new();
        fn collect_branches<'a>(nodes: &'a [HierarchyNode], out: &mut Vec<&'a HierarchyNode>) {
            for node in nodes {
                if !node.is_leaf() {
                    out.push(node);
                    collect_branches(&node.children, out);
                }
            }
        }
        collect_branches(&forest, &mut branches);
        prop_assume!(!branches.is_empty());
        let branch = branches[node_choice.index(branches.len())];

        let result = activate(branch, 0, &[], SelectionMode::Multiple, &selection);
        prop_assert!(!result.committed);
        prop_assert_eq!(result.selection, selection);
        prop_assert_eq!(result.path.last(), Some(&branch.id));
    }

    /// PROPERTY: compute_columns never exceeds the forest depth, and column
    /// i+1 is exactly the children of path[i] while the path resolves.
    #[test]
    fn property_columns_match_path_children(
        forest in forest_strategy(),
        choices in prop::collection::vec(any::<prop::sample::Index>(), 0..5),
    ) {
        let path = path_from_choices(&forest, &choices);
        let columns = compute_columns(&forest, &path);

        prop_assert!(columns.len() <= max_depth(&forest));
        prop_assert!(!columns.is_empty());
        prop_assert_eq!(columns[0].len(), forest.len());

        for i in 1..columns.len() {
            let parent = columns[i - 1]
                .iter()
                .find(|node| node.id == path[i - 1])
                .expect("path entries resolve in their column");
            prop_assert_eq!(columns[i].len(), parent.children.len());
            for (a, b) in columns[i].iter().zip(parent.children.iter()) {
                prop_assert_eq!(&a.id, &b.id);
            }
        }
    }

    /// PROPERTY: arbitrary garbage paths never panic and still yield the
    /// root column.
    #[test]
    fn property_garbage_paths_never_panic(
        forest in forest_strategy(),
        path in prop::collection::vec(".{0,16}", 0..6),
    ) {
        let columns = compute_columns(&forest, &path);
        prop_assert!(!columns.is_empty());
    }
}
