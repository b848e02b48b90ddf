//! Arena-based forest of trees with value-indexed leaves.
//!
//! A [`TreeMap`] manages any number of independent trees. Callers register
//! values as roots, grow branches one step at a time beneath existing
//! leaves, and query the root-to-leaf path ("branch") of any stored value.
//! Values are unique across the whole forest; a global value index keeps
//! membership and path queries O(1)-ish instead of walking the trees.
//!
//! All leaves live in a `generational_arena::Arena` and reference each
//! other by index, so parent back-links carry no ownership and the
//! structure needs no interior mutability.
//!
//! ```
//! use treemap::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.add_root("root");
//! map.grow_branch(&"root", "child");
//! map.grow_branch(&"child", "grandchild");
//!
//! assert_eq!(
//!     map.root_branch_values(&"grandchild"),
//!     vec![&"root", &"child", &"grandchild"]
//! );
//! ```

pub mod arena;
pub mod display;
pub mod errors;

pub use arena::{PostOrderIterator, TreeIterator, TreeLeaf, TreeMap};
pub use errors::{TreeError, TreeResult};
