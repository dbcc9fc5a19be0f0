use std::fmt::Debug;

use crate::error::AvlError;
use crate::types::AvlNode;
use crate::util::{assert_avl_tree, locate, print, remove_node, unstack};

fn default_comparator<V: PartialOrd>(a: &V, b: &V) -> i32 {
    if a < b {
        -1
    } else if a > b {
        1
    } else {
        0
    }
}

/// Self-balancing binary search tree of unique comparable values.
///
/// Nodes live in a dense `Vec` arena; parent/child links are `Option<u32>`
/// indices into it. Removal backfills the vacated slot with the tail node,
/// so the arena always holds exactly `size()` live nodes and dropping the
/// container drops every value exactly once.
///
/// Not `Clone`: duplicating the tree would require a deep copy of every
/// node with parent links re-established.
pub struct AvlTree<V, C = fn(&V, &V) -> i32>
where
    C: Fn(&V, &V) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<AvlNode<V>>,
}

impl<V> AvlTree<V, fn(&V, &V) -> i32>
where
    V: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<V>)
    }
}

impl<V> Default for AvlTree<V, fn(&V, &V) -> i32>
where
    V: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C> AvlTree<V, C>
where
    C: Fn(&V, &V) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
        }
    }

    /// Inserts `value`, keeping the tree ordered and balanced.
    ///
    /// Returns `None` when the value was inserted, or a reference to the
    /// already-stored equal value; a duplicate insert changes nothing.
    pub fn insert(&mut self, value: V) -> Option<&V> {
        let Some(root) = self.root else {
            self.arena.push(AvlNode::new(value));
            self.root = Some(0);
            return None;
        };

        let mut chain = locate(&self.arena, Some(root), &value, &self.comparator);
        match chain.pop().expect("locator chain is never empty") {
            Some(existing) => Some(&self.arena[existing as usize].value),
            None => {
                let parent = chain
                    .last()
                    .copied()
                    .flatten()
                    .expect("absent slot has a parent");
                self.arena.push(AvlNode::new(value));
                let idx = (self.arena.len() - 1) as u32;
                let cmp = (self.comparator)(
                    &self.arena[idx as usize].value,
                    &self.arena[parent as usize].value,
                );
                if cmp < 0 {
                    self.arena[parent as usize].l = Some(idx);
                } else {
                    self.arena[parent as usize].r = Some(idx);
                }
                self.arena[idx as usize].p = Some(parent);
                self.root = Some(unstack(&mut self.arena, &mut chain, root));
                None
            }
        }
    }

    /// Removes `value` and returns the stored value that was removed.
    ///
    /// Fails with [`AvlError::NotFound`] when the value is absent.
    pub fn remove(&mut self, value: &V) -> Result<V, AvlError> {
        let root = self.root.ok_or(AvlError::NotFound)?;
        let chain = locate(&self.arena, Some(root), value, &self.comparator);
        let node = match chain.last().copied().flatten() {
            Some(i) => i,
            None => return Err(AvlError::NotFound),
        };

        let (new_root, vacated) = remove_node(&mut self.arena, chain, root, node);
        self.root = new_root;
        let removed = self.backfill_slot(vacated);
        Ok(removed.value)
    }

    pub fn find(&self, value: &V) -> Option<&V> {
        let chain = locate(&self.arena, self.root, value, &self.comparator);
        let i = chain.last().copied().flatten()?;
        Some(&self.arena[i as usize].value)
    }

    pub fn find_mut(&mut self, value: &V) -> Option<&mut V> {
        let chain = locate(&self.arena, self.root, value, &self.comparator);
        let i = chain.last().copied().flatten()?;
        Some(&mut self.arena[i as usize].value)
    }

    /// Value stored at the root, without exposing any links.
    pub fn root(&self) -> Option<&V> {
        self.root.map(|i| &self.arena[i as usize].value)
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: 0 for a single node, -1 when empty.
    pub fn height(&self) -> i32 {
        self.root.map(|i| self.arena[i as usize].height).unwrap_or(-1)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Audits every structural invariant; see [`assert_avl_tree`].
    pub fn assert_valid(&self) -> Result<(), String> {
        if self.root.is_none() != self.arena.is_empty() {
            return Err("Root presence disagrees with arena occupancy".to_string());
        }
        assert_avl_tree(&self.arena, self.root, &self.comparator)
    }

    /// Pops the vacated slot out of the arena, backfilling it with the
    /// tail node and re-pointing the links that referred to the moved
    /// node. The vacated node must already be fully detached.
    fn backfill_slot(&mut self, idx: u32) -> AvlNode<V> {
        let node = self.arena.swap_remove(idx as usize);
        let moved_from = self.arena.len() as u32;
        if idx != moved_from {
            match self.arena[idx as usize].p {
                Some(p) => {
                    let parent = &mut self.arena[p as usize];
                    if parent.l == Some(moved_from) {
                        parent.l = Some(idx);
                    } else {
                        parent.r = Some(idx);
                    }
                }
                None => self.root = Some(idx),
            }
            if let Some(l) = self.arena[idx as usize].l {
                self.arena[l as usize].p = Some(idx);
            }
            if let Some(r) = self.arena[idx as usize].r {
                self.arena[r as usize].p = Some(idx);
            }
        }
        node
    }
}

impl<V, C> AvlTree<V, C>
where
    V: Debug,
    C: Fn(&V, &V) -> i32,
{
    /// Renders the tree for debugging; one line per node with cached
    /// height and balance factor.
    pub fn print(&self) -> String {
        print(&self.arena, self.root, "")
    }
}
