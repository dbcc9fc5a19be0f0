//! Arena tree algorithms: path locator, rotation primitives, rebalancer,
//! and the three-way removal dispatch.
//!
//! Every function is generic over `N: AvlNodeLike<V>` and operates on a
//! caller-owned arena slice; "pointers" are `Option<u32>` indices. The
//! container in [`crate::avl_tree`] drives these and owns the arena.

use std::fmt::Debug;

use crate::types::{AvlNodeLike, Node};

#[inline]
fn get_p<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].p()
}

#[inline]
fn get_l<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].l()
}

#[inline]
fn get_r<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].r()
}

#[inline]
fn set_p<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_p(v);
}

#[inline]
fn set_l<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

/// Height of an optional subtree, -1 when absent.
#[inline]
fn subtree_height<V, N: AvlNodeLike<V>>(arena: &[N], i: Option<u32>) -> i32 {
    match i {
        Some(i) => arena[i as usize].height(),
        None => -1,
    }
}

/// Replaces `parent`'s child slot that currently holds `from` with `to`.
#[inline]
fn relink_child<N: Node>(arena: &mut [N], parent: u32, from: u32, to: Option<u32>) {
    if get_l(arena, parent) == Some(from) {
        set_l(arena, parent, to);
    } else {
        set_r(arena, parent, to);
    }
}

/// Descends from `root` toward `value`, recording every node visited.
///
/// The returned stack is ordered root-first. Its top (last element) is
/// `Some(i)` when the value is already stored at node `i`, or `None`
/// marking the empty slot where it would be attached; the entry below a
/// `None` top is the would-be parent. Only `<` and `>` are consulted, so
/// a strict total order on `V` suffices. Read-only.
pub fn locate<V, N, C>(
    arena: &[N],
    root: Option<u32>,
    value: &V,
    comparator: &C,
) -> Vec<Option<u32>>
where
    N: AvlNodeLike<V>,
    C: Fn(&V, &V) -> i32,
{
    let mut chain = Vec::new();
    let mut curr = root;
    loop {
        let Some(i) = curr else {
            chain.push(None);
            return chain;
        };
        chain.push(Some(i));
        let cmp = comparator(value, arena[i as usize].value());
        if cmp < 0 {
            curr = get_l(arena, i);
        } else if cmp > 0 {
            curr = get_r(arena, i);
        } else {
            return chain;
        }
    }
}

/// Recomputes a node's cached `height` and `bf` from its children.
///
/// Children must already carry final heights; the rebalancer guarantees
/// this by walking ancestor chains strictly bottom-up.
pub fn update<V, N: AvlNodeLike<V>>(arena: &mut [N], i: u32) {
    let lh = subtree_height(arena, get_l(arena, i));
    let rh = subtree_height(arena, get_r(arena, i));
    let n = &mut arena[i as usize];
    n.set_height(lh.max(rh) + 1);
    n.set_bf(rh - lh);
}

/// Right rotation pivoting on `node`'s left child, which must exist.
///
/// The pivot takes `node`'s position (parent slot, or the root), the
/// pivot's former right subtree becomes `node`'s left subtree, and `node`
/// becomes the pivot's right child. Heights are recomputed for `node`
/// first (now the lower of the two), then the pivot. Returns the tree
/// root, replaced when `node` was the root. O(1), no allocation.
pub fn right_rotation<V, N: AvlNodeLike<V>>(arena: &mut [N], root: u32, node: u32) -> u32 {
    let pivot = get_l(arena, node).expect("right rotation requires a left child");
    let p = get_p(arena, node);
    let inner = get_r(arena, pivot);

    set_l(arena, node, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(node));
    }
    set_r(arena, pivot, Some(node));
    set_p(arena, node, Some(pivot));
    set_p(arena, pivot, p);
    if let Some(p) = p {
        relink_child(arena, p, node, Some(pivot));
    }

    update(arena, node);
    update(arena, pivot);
    if p.is_some() {
        root
    } else {
        pivot
    }
}

/// Left rotation pivoting on `node`'s right child. Mirror of
/// [`right_rotation`].
pub fn left_rotation<V, N: AvlNodeLike<V>>(arena: &mut [N], root: u32, node: u32) -> u32 {
    let pivot = get_r(arena, node).expect("left rotation requires a right child");
    let p = get_p(arena, node);
    let inner = get_l(arena, pivot);

    set_r(arena, node, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(node));
    }
    set_l(arena, pivot, Some(node));
    set_p(arena, node, Some(pivot));
    set_p(arena, pivot, p);
    if let Some(p) = p {
        relink_child(arena, p, node, Some(pivot));
    }

    update(arena, node);
    update(arena, pivot);
    if p.is_some() {
        root
    } else {
        pivot
    }
}

/// Applies at most one rotation decision to restore `|bf| <= 1` at `node`.
///
/// `bf == -2` is the left-heavy pair of cases: a left child with `bf == 1`
/// is the left-right case (rotate the child left first), anything else is
/// left-left. `bf == 2` mirrors this on the right. Returns the tree root,
/// replaced when a rotation re-rooted the tree.
pub fn balance<V, N: AvlNodeLike<V>>(arena: &mut [N], root: u32, node: u32) -> u32 {
    match arena[node as usize].bf() {
        -2 => {
            let l = get_l(arena, node).expect("left-heavy node has a left child");
            let root = if arena[l as usize].bf() == 1 {
                left_rotation(arena, root, l)
            } else {
                root
            };
            right_rotation(arena, root, node)
        }
        2 => {
            let r = get_r(arena, node).expect("right-heavy node has a right child");
            let root = if arena[r as usize].bf() == -1 {
                right_rotation(arena, root, r)
            } else {
                root
            };
            left_rotation(arena, root, node)
        }
        _ => root,
    }
}

/// Unwinds an ancestor chain bottom-up: recompute each node's cached
/// height/balance, then rotate where the AVL bound broke.
///
/// A `None` top (the locator's absent marker) is skipped. The walk always
/// continues to the root even when no rotation fires, since heights still
/// have to propagate. Returns the tree root after all rotations.
pub fn unstack<V, N: AvlNodeLike<V>>(
    arena: &mut [N],
    chain: &mut Vec<Option<u32>>,
    mut root: u32,
) -> u32 {
    while let Some(entry) = chain.pop() {
        let Some(i) = entry else {
            continue;
        };
        update(arena, i);
        root = balance(arena, root, i);
    }
    root
}

/// Detaches a childless node from its parent's slot.
///
/// Returns the tree root, or `None` when the leaf was the last node.
pub fn leaf_remove<V, N: AvlNodeLike<V>>(arena: &mut [N], root: u32, node: u32) -> Option<u32> {
    match get_p(arena, node) {
        None => None,
        Some(p) => {
            relink_child(arena, p, node, None);
            set_p(arena, node, None);
            Some(root)
        }
    }
}

/// Splices a node's single child into its position. Returns the tree
/// root, replaced by the child when the node was the root.
pub fn one_subtree_remove<V, N: AvlNodeLike<V>>(arena: &mut [N], root: u32, node: u32) -> u32 {
    let child = get_l(arena, node)
        .or_else(|| get_r(arena, node))
        .expect("one-subtree node has a child");
    let p = get_p(arena, node);
    set_p(arena, child, p);
    set_l(arena, node, None);
    set_r(arena, node, None);
    set_p(arena, node, None);
    match p {
        None => child,
        Some(p) => {
            relink_child(arena, p, node, Some(child));
            root
        }
    }
}

/// Swaps the stored values of two distinct nodes; links are untouched.
pub fn swap_values<V, N: AvlNodeLike<V>>(arena: &mut [N], a: u32, b: u32) {
    debug_assert_ne!(a, b);
    let (lo, hi) = if a < b {
        (a as usize, b as usize)
    } else {
        (b as usize, a as usize)
    };
    let (left, right) = arena.split_at_mut(hi);
    std::mem::swap(left[lo].value_mut(), right[0].value_mut());
}

/// Three-way removal dispatch (leaf / one child / two children).
///
/// `chain` is the locator stack with the doomed node on top. A leaf is
/// detached outright; a one-child node is spliced over; a two-child node
/// swaps values with its in-order predecessor (rightmost node of the left
/// subtree), reducing to one of the first two cases on the predecessor,
/// which by construction has at most a left child. The vacated slot
/// therefore always carries the removed value. Surviving ancestors are
/// rebalanced from the vacated node's former parent up to the root.
///
/// Returns the new tree root (if any node survives) and the vacated
/// arena index, left fully detached for the container to reclaim.
pub fn remove_node<V, N: AvlNodeLike<V>>(
    arena: &mut [N],
    mut chain: Vec<Option<u32>>,
    root: u32,
    node: u32,
) -> (Option<u32>, u32) {
    debug_assert_eq!(chain.last().copied().flatten(), Some(node));
    let l = get_l(arena, node);
    let r = get_r(arena, node);

    match (l, r) {
        (None, None) => {
            chain.pop();
            match leaf_remove(arena, root, node) {
                None => (None, node),
                Some(root) => (Some(unstack(arena, &mut chain, root)), node),
            }
        }
        (Some(l), Some(_)) => {
            // The doomed node survives structurally, so it stays on the
            // chain; the descent to the predecessor extends it.
            let mut pred = l;
            while let Some(next) = get_r(arena, pred) {
                chain.push(Some(pred));
                pred = next;
            }
            swap_values(arena, node, pred);
            let root = if get_l(arena, pred).is_some() {
                one_subtree_remove(arena, root, pred)
            } else {
                leaf_remove(arena, root, pred).expect("predecessor is never the root")
            };
            (Some(unstack(arena, &mut chain, root)), pred)
        }
        _ => {
            chain.pop();
            let root = one_subtree_remove(arena, root, node);
            (Some(unstack(arena, &mut chain, root)), node)
        }
    }
}

/// Leftmost node of the subtree at `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        match get_l(arena, i) {
            Some(l) => curr = Some(l),
            None => return Some(i),
        }
    }
    curr
}

/// In-order successor of `node`.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        let mut curr = r;
        while let Some(l) = get_l(arena, curr) {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Structural height computed from links alone, ignoring cached fields.
fn tree_height<V, N: AvlNodeLike<V>>(arena: &[N], node: u32) -> i32 {
    let l = get_l(arena, node)
        .map(|i| tree_height(arena, i))
        .unwrap_or(-1);
    let r = get_r(arena, node)
        .map(|i| tree_height(arena, i))
        .unwrap_or(-1);
    1 + l.max(r)
}

/// Audits every tree invariant: parent links invert child links, cached
/// `height`/`bf` match recomputed subtree heights, `|bf| <= 1`, and an
/// in-order walk yields strictly increasing values.
pub fn assert_avl_tree<V, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: AvlNodeLike<V>,
    C: Fn(&V, &V) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    fn validate_links<V, N: AvlNodeLike<V>>(arena: &[N], node: u32) -> Result<(), String> {
        let l = get_l(arena, node);
        let r = get_r(arena, node);

        if let Some(l) = l {
            if get_p(arena, l) != Some(node) {
                return Err("Broken parent link on left child".to_string());
            }
            validate_links(arena, l)?;
        }
        if let Some(r) = r {
            if get_p(arena, r) != Some(node) {
                return Err("Broken parent link on right child".to_string());
            }
            validate_links(arena, r)?;
        }

        let lh = l.map(|i| tree_height(arena, i)).unwrap_or(-1);
        let rh = r.map(|i| tree_height(arena, i)).unwrap_or(-1);
        let expected_height = lh.max(rh) + 1;
        let actual_height = arena[node as usize].height();
        if actual_height != expected_height {
            return Err(format!(
                "Height mismatch: expected {expected_height}, got {actual_height}"
            ));
        }
        let expected_bf = rh - lh;
        let actual_bf = arena[node as usize].bf();
        if actual_bf != expected_bf {
            return Err(format!(
                "Balance factor mismatch: expected {expected_bf}, got {actual_bf}"
            ));
        }
        if !(-1..=1).contains(&actual_bf) {
            return Err("AVL balance violated".to_string());
        }

        Ok(())
    }

    validate_links(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev {
            let cmp = comparator(arena[prev as usize].value(), arena[i as usize].value());
            if cmp >= 0 {
                return Err("Node order violated".to_string());
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer for arena AVL trees.
pub fn print<V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    V: Debug,
    N: AvlNodeLike<V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={} bf={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.bf(),
                n.value()
            )
        }
    }
}
