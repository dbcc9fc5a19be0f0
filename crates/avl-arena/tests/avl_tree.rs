use avl_arena::{AvlError, AvlTree};

#[test]
fn empty_tree() {
    let tree = AvlTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.root(), None);
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.find(&1), None);
    tree.assert_valid().unwrap();
}

#[test]
fn ascending_inserts_left_rotate_at_root() {
    let mut tree = AvlTree::<i32>::new();
    assert_eq!(tree.insert(10), None);
    assert_eq!(tree.insert(20), None);
    assert_eq!(tree.insert(30), None);

    // The right-right imbalance from ascending inserts fires one left
    // rotation; 20 ends up at the root with 10 and 30 as leaves.
    assert_eq!(tree.root(), Some(&20));
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.height(), 1);
    tree.assert_valid().unwrap();
    for v in [10, 20, 30] {
        assert_eq!(tree.find(&v), Some(&v));
    }
}

#[test]
fn descending_inserts_right_rotate_at_root() {
    let mut tree = AvlTree::<i32>::new();
    tree.insert(30);
    tree.insert(20);
    tree.insert(10);

    assert_eq!(tree.root(), Some(&20));
    assert_eq!(tree.height(), 1);
    tree.assert_valid().unwrap();
}

#[test]
fn zig_zag_inserts_double_rotate() {
    // Right-left case.
    let mut tree = AvlTree::<i32>::new();
    tree.insert(10);
    tree.insert(30);
    tree.insert(20);
    assert_eq!(tree.root(), Some(&20));
    tree.assert_valid().unwrap();

    // Left-right case.
    let mut tree = AvlTree::<i32>::new();
    tree.insert(30);
    tree.insert(10);
    tree.insert(20);
    assert_eq!(tree.root(), Some(&20));
    tree.assert_valid().unwrap();
}

#[test]
fn ascending_run_builds_perfect_tree() {
    let mut tree = AvlTree::<i32>::new();
    for v in 1..=7 {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }

    // Seven ascending inserts settle into the perfect 7-node tree.
    assert_eq!(tree.size(), 7);
    assert_eq!(tree.root(), Some(&4));
    assert_eq!(tree.height(), 2);
}

#[test]
fn duplicate_insert_is_a_structural_noop() {
    let mut tree = AvlTree::<i32>::new();
    assert_eq!(tree.insert(5), None);
    assert_eq!(tree.insert(5), Some(&5));
    assert_eq!(tree.size(), 1);
    tree.assert_valid().unwrap();
}

#[test]
fn remove_missing_value_fails() {
    let mut tree = AvlTree::<i32>::new();
    assert_eq!(tree.remove(&1), Err(AvlError::NotFound));

    tree.insert(1);
    assert_eq!(tree.remove(&2), Err(AvlError::NotFound));
    assert_eq!(tree.remove(&1), Ok(1));
    assert_eq!(tree.remove(&1), Err(AvlError::NotFound));
    assert!(tree.is_empty());
}

#[test]
fn leaf_removal() {
    let mut tree = AvlTree::<i32>::new();
    tree.insert(20);
    tree.insert(10);
    tree.insert(30);

    assert_eq!(tree.remove(&10), Ok(10));
    assert_eq!(tree.size(), 2);
    assert_eq!(tree.find(&10), None);
    assert_eq!(tree.root(), Some(&20));
    tree.assert_valid().unwrap();
}

#[test]
fn one_child_removal_splices_the_child() {
    let mut tree = AvlTree::<i32>::new();
    tree.insert(3);
    tree.insert(2);

    // Root 3 has a single left child.
    assert_eq!(tree.remove(&3), Ok(3));
    assert_eq!(tree.root(), Some(&2));
    assert_eq!(tree.size(), 1);
    tree.assert_valid().unwrap();

    let mut tree = AvlTree::<i32>::new();
    for v in [4, 2, 6, 1] {
        tree.insert(v);
    }
    assert_eq!(tree.remove(&2), Ok(2));
    assert_eq!(tree.find(&1), Some(&1));
    assert_eq!(tree.size(), 3);
    tree.assert_valid().unwrap();
}

#[test]
fn two_child_root_removal_promotes_predecessor() {
    let mut tree = AvlTree::<i32>::new();
    tree.insert(20);
    tree.insert(10);
    tree.insert(30);

    assert_eq!(tree.remove(&20), Ok(20));
    assert_eq!(tree.root(), Some(&10));
    assert_eq!(tree.size(), 2);
    assert_eq!(tree.find(&20), None);
    assert_eq!(tree.find(&30), Some(&30));
    tree.assert_valid().unwrap();
}

#[test]
fn two_child_removal_in_larger_tree() {
    let mut tree = AvlTree::<i32>::new();
    for v in 1..=7 {
        tree.insert(v);
    }

    // Root 4 has two children; its in-order predecessor 3 is promoted.
    assert_eq!(tree.remove(&4), Ok(4));
    assert_eq!(tree.root(), Some(&3));
    assert_eq!(tree.size(), 6);
    assert_eq!(tree.find(&4), None);
    tree.assert_valid().unwrap();
    for v in [1, 2, 3, 5, 6, 7] {
        assert_eq!(tree.find(&v), Some(&v));
    }
}

#[test]
fn removal_ladder_keeps_invariants() {
    let mut tree = AvlTree::<i32>::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);

    for i in (0..300).step_by(3) {
        assert_eq!(tree.remove(&i), Ok(i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 200);

    for i in 0..300 {
        if i % 3 == 0 {
            assert_eq!(tree.find(&i), None);
        } else {
            assert_eq!(tree.find(&i), Some(&i));
        }
    }
}

#[test]
fn round_trip_insert_find_remove() {
    let values = [42, 7, 99, 3, 18, 56, 71, 12, 64, 1];
    let mut tree = AvlTree::<i32>::new();
    for v in values {
        tree.insert(v);
    }
    for v in values {
        assert_eq!(tree.find(&v), Some(&v));
    }
    for v in values {
        assert_eq!(tree.remove(&v), Ok(v));
        assert_eq!(tree.find(&v), None);
        assert_eq!(tree.remove(&v), Err(AvlError::NotFound));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
}

#[test]
fn clear_resets_the_container() {
    let mut tree = AvlTree::<i32>::new();
    for v in 0..32 {
        tree.insert(v);
    }
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.root(), None);
    tree.assert_valid().unwrap();

    tree.insert(5);
    assert_eq!(tree.root(), Some(&5));
    tree.assert_valid().unwrap();
}

#[test]
fn custom_comparator_orders_by_key_only() {
    // Entries compare on the key; find_mut can then patch the payload.
    let mut tree =
        AvlTree::<(u32, &str), _>::with_comparator(|a, b| a.0 as i32 - b.0 as i32);
    tree.insert((1, "one"));
    tree.insert((2, "two"));
    tree.insert((3, "three"));

    let probe = (2, "");
    assert_eq!(tree.find(&probe), Some(&(2, "two")));
    tree.find_mut(&probe).unwrap().1 = "zwei";
    assert_eq!(tree.find(&probe), Some(&(2, "zwei")));
    tree.assert_valid().unwrap();

    assert_eq!(tree.remove(&probe), Ok((2, "zwei")));
    assert_eq!(tree.size(), 2);
}

#[test]
fn print_renders_every_node() {
    let mut tree = AvlTree::<i32>::new();
    tree.insert(2);
    tree.insert(1);
    tree.insert(3);

    let out = tree.print();
    for needle in ["{ 1 }", "{ 2 }", "{ 3 }"] {
        assert!(out.contains(needle), "missing {needle} in:\n{out}");
    }
}
