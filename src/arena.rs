//! Arena-based forest structure: leaves, trees and the value index.

use std::collections::HashMap;
use std::hash::Hash;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// One node of the forest.
///
/// A leaf wraps a caller-supplied value, points back at its parent via a
/// plain arena index (no ownership, no cycles) and owns its children in
/// insertion order. The parent link is fixed at construction; only the
/// owning [`TreeMap`] wires leaves together.
#[derive(Debug)]
pub struct TreeLeaf<T> {
    value: T,
    /// Index of the parent leaf in the arena, None for root leaves
    parent: Option<Index>,
    /// Indices of child leaves in the arena, insertion order
    children: Vec<Index>,
}

impl<T> TreeLeaf<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            children: Vec::new(),
        }
    }

    fn with_parent(value: T, parent: Index) -> Self {
        Self {
            value,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// Appends a child index. Uniqueness is enforced one layer up, by
    /// [`TreeMap`], before this is ever called.
    fn add_child(&mut self, child: Index) {
        self.children.push(child);
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn children(&self) -> &[Index] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Forest of independent trees with a global value index.
///
/// All leaves of all trees live in one arena and are referenced by
/// `generational_arena::Index`. Every stored value is unique across the
/// whole forest; the `index` map makes membership and path queries O(1)-ish
/// instead of requiring a forest walk.
///
/// The structure only grows: there is no removal operation.
#[derive(Debug)]
pub struct TreeMap<T> {
    /// Arena storage for all leaves of all trees
    arena: Arena<TreeLeaf<T>>,
    /// Root leaves, one per independent tree, insertion order
    roots: Vec<Index>,
    /// Global value -> leaf mapping across all trees
    index: HashMap<T, Index>,
}

impl<T> Default for TreeMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeMap<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Root leaves in insertion order, one per tree.
    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    /// Number of independent trees.
    pub fn number_of_roots(&self) -> usize {
        self.roots.len()
    }

    /// Number of leaves across all trees, roots included.
    pub fn number_of_leaves(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[instrument(level = "trace", skip_all)]
    pub fn leaf(&self, idx: Index) -> Option<&TreeLeaf<T>> {
        self.arena.get(idx)
    }

    /// Pre-order traversal over the whole forest, trees in root insertion
    /// order, siblings left to right.
    #[instrument(level = "trace", skip_all)]
    pub fn iter(&self) -> TreeIterator<'_, T> {
        TreeIterator::new(self)
    }

    /// Post-order traversal over the whole forest.
    #[instrument(level = "trace", skip_all)]
    pub fn iter_postorder(&self) -> PostOrderIterator<'_, T> {
        PostOrderIterator::new(self)
    }

    /// Pre-order traversal of the single tree rooted at `root`.
    ///
    /// A stale or foreign index yields an empty iterator.
    #[instrument(level = "trace", skip_all)]
    pub fn iter_tree(&self, root: Index) -> TreeIterator<'_, T> {
        TreeIterator::from_root(self, root)
    }

    /// Longest root-to-leaf node count of the tree rooted at `root`,
    /// 0 for a stale index.
    #[instrument(level = "debug", skip_all)]
    pub fn tree_depth(&self, root: Index) -> usize {
        self.calculate_depth(root)
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        if let Some(leaf) = self.leaf(idx) {
            1 + leaf
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects the values of all childless leaves across the forest.
    ///
    /// An empty forest returns an empty vector.
    #[instrument(level = "debug", skip_all)]
    pub fn leaf_values(&self) -> Vec<&T> {
        let mut leaves = Vec::new();
        for &root in &self.roots {
            self.collect_leaf_values(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaf_values<'a>(&'a self, idx: Index, leaves: &mut Vec<&'a T>) {
        if let Some(leaf) = self.leaf(idx) {
            if leaf.children.is_empty() {
                leaves.push(&leaf.value);
            } else {
                for &child in &leaf.children {
                    self.collect_leaf_values(child, leaves);
                }
            }
        }
    }
}

impl<T> TreeMap<T>
where
    T: Clone + Eq + Hash,
{
    /// Index of the leaf holding `value`, if any.
    #[instrument(level = "trace", skip_all)]
    pub fn find(&self, value: &T) -> Option<Index> {
        self.index.get(value).copied()
    }

    /// True iff `value` has a leaf anywhere in the forest.
    #[instrument(level = "trace", skip_all)]
    pub fn contains_leaf(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// True iff `value` has a leaf and that leaf is a root.
    #[instrument(level = "trace", skip_all)]
    pub fn contains_root(&self, value: &T) -> bool {
        self.find(value)
            .and_then(|idx| self.leaf(idx))
            .is_some_and(TreeLeaf::is_root)
    }

    /// Starts a new tree rooted at `value`.
    ///
    /// Re-adding a value that already has a leaf anywhere in the forest is
    /// a silent no-op; use [`TreeMap::try_add_root`] to detect it.
    #[instrument(level = "trace", skip_all)]
    pub fn add_root(&mut self, value: T) {
        let _ = self.try_add_root(value);
    }

    /// Strict variant of [`TreeMap::add_root`]: returns the new root's
    /// index, or [`TreeError::DuplicateValue`] when the value is already
    /// present.
    #[instrument(level = "trace", skip_all)]
    pub fn try_add_root(&mut self, value: T) -> TreeResult<Index> {
        if self.index.contains_key(&value) {
            return Err(TreeError::DuplicateValue);
        }

        let idx = self.arena.insert(TreeLeaf::new(value.clone()));
        self.roots.push(idx);
        self.index.insert(value, idx);
        Ok(idx)
    }

    /// Grows the tree by one step beneath the leaf holding `anchor`.
    ///
    /// A missing anchor or an already-present value (anywhere in the
    /// forest, under any parent) is a silent no-op; use
    /// [`TreeMap::try_grow_branch`] to detect either.
    #[instrument(level = "trace", skip_all)]
    pub fn grow_branch(&mut self, anchor: &T, value: T) {
        let _ = self.try_grow_branch(anchor, value);
    }

    /// Strict variant of [`TreeMap::grow_branch`]: returns the new leaf's
    /// index, [`TreeError::AnchorNotFound`] when `anchor` has no leaf, or
    /// [`TreeError::DuplicateValue`] when `value` already has one.
    #[instrument(level = "trace", skip_all)]
    pub fn try_grow_branch(&mut self, anchor: &T, value: T) -> TreeResult<Index> {
        let parent_idx = self.find(anchor).ok_or(TreeError::AnchorNotFound)?;
        if self.index.contains_key(&value) {
            return Err(TreeError::DuplicateValue);
        }

        let idx = self
            .arena
            .insert(TreeLeaf::with_parent(value.clone(), parent_idx));
        if let Some(parent) = self.arena.get_mut(parent_idx) {
            parent.add_child(idx);
        }
        self.index.insert(value, idx);
        Ok(idx)
    }

    /// Ordered path from the root of the tree containing `value` down to
    /// its leaf, root first. Absent values yield an empty vector, never an
    /// error and never a partial path.
    #[instrument(level = "trace", skip_all)]
    pub fn root_branch(&self, value: &T) -> Vec<Index> {
        let Some(leaf_idx) = self.find(value) else {
            return Vec::new();
        };

        let mut branch = vec![leaf_idx];
        let mut current = self.leaf(leaf_idx).and_then(TreeLeaf::parent);
        while let Some(idx) = current {
            branch.push(idx);
            current = self.leaf(idx).and_then(TreeLeaf::parent);
        }
        branch.reverse();
        branch
    }

    /// Value view of [`TreeMap::root_branch`].
    #[instrument(level = "trace", skip_all)]
    pub fn root_branch_values(&self, value: &T) -> Vec<&T> {
        self.root_branch(value)
            .into_iter()
            .filter_map(|idx| self.leaf(idx).map(TreeLeaf::value))
            .collect()
    }
}

pub struct TreeIterator<'a, T> {
    map: &'a TreeMap<T>,
    stack: Vec<Index>,
}

impl<'a, T> TreeIterator<'a, T> {
    fn new(map: &'a TreeMap<T>) -> Self {
        // Roots pushed in reverse so the first-added tree is visited first
        let stack = map.roots.iter().rev().copied().collect();
        Self { map, stack }
    }

    fn from_root(map: &'a TreeMap<T>, root: Index) -> Self {
        let stack = if map.arena.contains(root) {
            vec![root]
        } else {
            Vec::new()
        };
        Self { map, stack }
    }
}

impl<'a, T> Iterator for TreeIterator<'a, T> {
    type Item = (Index, &'a TreeLeaf<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(leaf) = self.map.leaf(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in leaf.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, leaf));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a, T> {
    map: &'a TreeMap<T>,
    stack: Vec<(Index, bool)>,
}

impl<'a, T> PostOrderIterator<'a, T> {
    fn new(map: &'a TreeMap<T>) -> Self {
        let stack = map.roots.iter().rev().map(|&idx| (idx, false)).collect();
        Self { map, stack }
    }
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = (Index, &'a TreeLeaf<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(leaf) = self.map.leaf(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in leaf.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, leaf));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_construction() {
        let mut map = TreeMap::new();
        let root_idx = map.try_add_root("root").unwrap();
        let child_idx = map.try_grow_branch(&"root", "child").unwrap();

        let root = map.leaf(root_idx).unwrap();
        assert!(root.is_root());
        assert!(root.parent().is_none());
        assert!(root.has_children());
        assert_eq!(root.children(), &[child_idx]);

        let child = map.leaf(child_idx).unwrap();
        assert_eq!(*child.value(), "child");
        assert_eq!(child.parent(), Some(root_idx));
        assert!(!child.is_root());
        assert!(!child.has_children());
    }

    #[test]
    fn test_child_order_preserved() {
        let mut map = TreeMap::new();
        let root_idx = map.try_add_root("root").unwrap();
        let c1 = map.try_grow_branch(&"root", "c1").unwrap();
        let c2 = map.try_grow_branch(&"root", "c2").unwrap();
        let c3 = map.try_grow_branch(&"root", "c3").unwrap();

        assert_eq!(map.leaf(root_idx).unwrap().children(), &[c1, c2, c3]);
    }

    #[test]
    fn test_stale_index_queries() {
        let map: TreeMap<&str> = TreeMap::new();
        let mut other = TreeMap::new();
        let foreign = other.try_add_root("x").unwrap();

        assert!(map.leaf(foreign).is_none());
        assert_eq!(map.tree_depth(foreign), 0);
        assert_eq!(map.iter_tree(foreign).count(), 0);
    }
}
