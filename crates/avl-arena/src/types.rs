//! Node trait definitions and the concrete arena node.
//!
//! Nodes live in a `Vec`-backed arena owned by the container; each
//! "pointer" is an `Option<u32>` index into that arena. All
//! tree-manipulation functions in [`crate::util`] take the arena and work
//! with indices, so the node type is abstracted behind traits.

/// Tree links (`p`, `l`, `r`) over arena indices.
///
/// The parent link is a non-owning back-reference used only for upward
/// traversal; ownership flows strictly parent-to-child.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by the tree container.
///
/// Returns a negative number when `a` orders before `b`, positive when
/// after, zero when neither is smaller.
pub type Comparator<V> = dyn Fn(&V, &V) -> i32;

/// AVL-specific node behavior: the stored value plus the cached
/// height/balance pair maintained by the rebalancer.
pub trait AvlNodeLike<V>: Node {
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn height(&self) -> i32;
    fn set_height(&mut self, h: i32);
    fn bf(&self) -> i32;
    fn set_bf(&mut self, bf: i32);
}

/// Arena node of [`AvlTree`](crate::AvlTree).
#[derive(Clone, Debug)]
pub struct AvlNode<V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub value: V,
    /// Longest path to a descendant leaf, 0 for a leaf.
    pub height: i32,
    /// Balance factor, `height(right) - height(left)`, with an absent
    /// subtree counted as height -1. In {-1, 0, 1} outside a rebalance.
    pub bf: i32,
}

impl<V> AvlNode<V> {
    pub fn new(value: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            value,
            height: 0,
            bf: 0,
        }
    }
}

impl<V> Node for AvlNode<V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<V> AvlNodeLike<V> for AvlNode<V> {
    fn value(&self) -> &V {
        &self.value
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_height(&mut self, h: i32) {
        self.height = h;
    }

    fn bf(&self) -> i32 {
        self.bf
    }

    fn set_bf(&mut self, bf: i32) {
        self.bf = bf;
    }
}
