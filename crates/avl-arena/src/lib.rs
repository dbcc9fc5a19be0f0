//! Arena-backed self-balancing binary search tree (AVL).
//!
//! Stores unique comparable values with guaranteed O(log n) height.
//! Instead of heap-allocated nodes linked by raw pointers, all "pointers"
//! are `Option<u32>` indices into a `Vec`-backed arena owned by the
//! container. Removal backfills the vacated slot from the arena tail, so
//! the arena always holds exactly `size()` live nodes and teardown is the
//! arena's own drop.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] / [`AvlNodeLike`] traits and the arena [`AvlNode`] |
//! | [`util`] | path locator, rotation primitives, rebalancer, removal dispatch, validation |
//! | [`avl_tree`] | the [`AvlTree`] container |
//! | [`error`] | [`AvlError`] |

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod error;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use error::AvlError;
pub use types::{AvlNode, AvlNodeLike, Comparator, Node};
pub use util::{
    assert_avl_tree, balance, first, leaf_remove, left_rotation, locate, next, one_subtree_remove,
    remove_node, right_rotation, unstack, update,
};
