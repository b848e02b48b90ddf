//! Human-readable rendering of trees via termtree.

use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::TreeMap;

impl<T: Display> TreeMap<T> {
    /// Renders the tree rooted at `root` as a [`termtree::Tree`] of the
    /// leaves' display forms. None for a stale index.
    #[instrument(level = "debug", skip_all)]
    pub fn tree_string(&self, root: Index) -> Option<Tree<String>> {
        let root_leaf = self.leaf(root)?;
        let mut tree = Tree::new(root_leaf.value().to_string());

        fn build_tree<T: Display>(map: &TreeMap<T>, idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(leaf) = map.leaf(idx) {
                for &child_idx in leaf.children() {
                    if let Some(child) = map.leaf(child_idx) {
                        let mut child_tree = Tree::new(child.value().to_string());
                        build_tree(map, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        build_tree(self, root, &mut tree);
        Some(tree)
    }

    /// Renders every tree of the forest, in root insertion order.
    #[instrument(level = "debug", skip_all)]
    pub fn forest_string(&self) -> Vec<Tree<String>> {
        self.roots()
            .iter()
            .filter_map(|&root| self.tree_string(root))
            .collect()
    }
}
