//! Property-based tests for tree invariants.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::test_data::{DataNode, node};
    use crate::{Config, Node, RootedTree};
    use proptest::prelude::*;

    /// Random shapes: node `i` hangs under one of the nodes before it.
    fn arb_tree() -> impl Strategy<Value = RootedTree<i32, DataNode>> {
        prop::collection::vec(any::<prop::sample::Index>(), 0..40).prop_map(|parents| {
            let mut tree = RootedTree::new();
            tree.add_node(None, node(0)).unwrap();
            for (offset, parent) in parents.iter().enumerate() {
                let id = i32::try_from(offset).unwrap() + 1;
                let parent_id = i32::try_from(parent.index(offset + 1)).unwrap();
                tree.add_node(Some(parent_id), node(id)).unwrap();
            }
            tree
        })
    }

    fn assert_links_consistent(tree: &RootedTree<i32, DataNode>) {
        for stored in tree.iter() {
            for child_id in stored.child_ids_vec() {
                let child = tree.get_node(&child_id).unwrap();
                assert_eq!(child.parent_id(), Some(stored.id()));
            }
            if let Some(parent_id) = stored.parent_id() {
                if let Some(parent) = tree.get_node(&parent_id) {
                    assert!(parent.child_ids_vec().contains(&stored.id()));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn test_every_node_reachable_from_root(tree in arb_tree()) {
            assert_links_consistent(&tree);
            assert_eq!(tree.list_child_ids(&0).len() + 1, tree.len());
        }

        #[test]
        fn test_remove_node_drops_descendants(tree in arb_tree(), pick in any::<prop::sample::Index>()) {
            let mut tree = tree;
            let before = tree.len();
            let id = i32::try_from(pick.index(before)).unwrap();
            prop_assume!(id != 0);

            let descendants = tree.list_child_ids(&id);
            tree.remove_node(&id).unwrap();

            assert_eq!(tree.len(), before - descendants.len() - 1);
            assert!(!tree.contains(&id));
            assert!(descendants.iter().all(|gone| !tree.contains(gone)));
            assert_links_consistent(&tree);
        }

        #[test]
        fn test_take_then_graft_restores(tree in arb_tree(), pick in any::<prop::sample::Index>()) {
            let original = tree.clone();
            let mut tree = tree;
            let id = i32::try_from(pick.index(tree.len())).unwrap();
            prop_assume!(id != 0);

            let sub = tree.take_subtree(&id).unwrap();
            assert_eq!(sub.len() + tree.len(), original.len());
            assert!(sub.is_subtree());

            tree.graft_subtree(sub).unwrap();
            assert!(tree == original);
        }

        #[test]
        fn test_to_nodes_round_trip(tree in arb_tree()) {
            let rebuilt = RootedTree::try_from(tree.to_nodes()).unwrap();
            assert!(rebuilt == tree);
            assert!(tree.diff(&rebuilt).is_empty());
        }

        #[test]
        fn test_clone_subtree_with_lvl_is_bounded(tree in arb_tree(), lvl in 0_u32..4) {
            let sub = tree.clone_subtree_with_lvl(&0, Some(lvl)).unwrap();
            assert_eq!(sub.len(), tree.list_child_ids_with_lvl(&0, Some(lvl)).len() + 1);
            for id in sub.iter().map(|stored| stored.id()) {
                let depth = tree.list_parent_ids(&id).len();
                assert!(u32::try_from(depth).unwrap() <= lvl);
            }
        }

        #[test]
        fn test_report_has_one_line_per_node(tree in arb_tree()) {
            let report = tree.report(&Config::default()).unwrap();
            assert_eq!(report.matches('\n').count(), tree.len() + 1);
        }
    }
}
