//! Tests for termtree rendering of trees and forests

use treemap::TreeMap;

#[test]
fn given_chain_when_rendering_then_shows_nested_lines() {
    // Arrange
    let mut map = TreeMap::new();
    let root = map.try_add_root("a").unwrap();
    map.grow_branch(&"a", "b");
    map.grow_branch(&"b", "c");

    // Act
    let rendered = map.tree_string(root).unwrap().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    // Assert
    assert_eq!(lines, vec!["a", "└── b", "    └── c"]);
}

#[test]
fn given_branching_tree_when_rendering_then_children_in_insertion_order() {
    // Arrange
    let mut map = TreeMap::new();
    let root = map.try_add_root("root").unwrap();
    map.grow_branch(&"root", "c1");
    map.grow_branch(&"root", "c2");
    map.grow_branch(&"c1", "g1");

    // Act
    let rendered = map.tree_string(root).unwrap().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    // Assert
    assert_eq!(lines, vec!["root", "├── c1", "│   └── g1", "└── c2"]);
}

#[test]
fn given_forest_when_rendering_then_one_tree_per_root() {
    // Arrange
    let mut map = TreeMap::new();
    map.add_root("a");
    map.grow_branch(&"a", "a1");
    map.add_root("b");

    // Act
    let rendered = map.forest_string();

    // Assert
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].to_string().lines().next(), Some("a"));
    assert_eq!(rendered[1].to_string().lines().next(), Some("b"));
}

#[test]
fn given_stale_index_when_rendering_then_none() {
    // Arrange
    let map: TreeMap<&str> = TreeMap::new();
    let mut other = TreeMap::new();
    let foreign = other.try_add_root("x").unwrap();

    // Assert
    assert!(map.tree_string(foreign).is_none());
}
