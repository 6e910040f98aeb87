//! Stress tests for recursive destruction over deep and wide trees.

use warren_core::ThingRef;
use warren_pool::ThingPool;

#[test]
fn deep_chain_destroy_invalidates_full_chain() {
    let mut pool: ThingPool<i32, 64> = ThingPool::new();
    let mut chain = [ThingRef::NIL; 16];

    chain[0] = pool.spawn();
    assert!(pool.is_valid(chain[0]));
    for i in 1..chain.len() {
        chain[i] = pool.spawn();
        assert!(pool.is_valid(chain[i]));
        pool.attach_child(chain[i - 1], chain[i]);
    }

    pool.destroy(chain[0]);

    for r in chain {
        assert!(!pool.is_valid(r));
    }
    assert_eq!(pool.len(), 0);
}

#[test]
fn wide_fan_out_destroy_invalidates_all_children() {
    let mut pool: ThingPool<i32, 64> = ThingPool::new();
    let mut children = [ThingRef::NIL; 24];

    let root = pool.spawn();
    assert!(pool.is_valid(root));
    for child in children.iter_mut() {
        *child = pool.spawn();
        assert!(pool.is_valid(*child));
        pool.attach_child(root, *child);
    }

    pool.destroy(root);

    assert!(!pool.is_valid(root));
    for child in children {
        assert!(!pool.is_valid(child));
    }
}

#[test]
fn destroy_leaves_unrelated_things_alone() {
    let mut pool: ThingPool<i32, 16> = ThingPool::new();

    let root = pool.spawn();
    let child_a = pool.spawn();
    let child_b = pool.spawn();
    let grandchild = pool.spawn();
    let unrelated = pool.spawn();

    pool.attach_child(root, child_a);
    pool.attach_child(root, child_b);
    pool.attach_child(child_a, grandchild);

    pool.destroy(root);

    assert!(!pool.is_valid(root));
    assert!(!pool.is_valid(child_a));
    assert!(!pool.is_valid(child_b));
    assert!(!pool.is_valid(grandchild));
    assert!(pool.is_valid(unrelated));
}

#[test]
fn repeated_destroy_order_is_stable() {
    let mut pool: ThingPool<i32, 64> = ThingPool::new();

    let root = pool.spawn();
    let child_a = pool.spawn();
    let child_b = pool.spawn();
    let grandchild = pool.spawn();
    let survivor = pool.spawn();

    pool.attach_child(root, child_a);
    pool.attach_child(root, child_b);
    pool.attach_child(child_a, grandchild);

    pool.destroy(child_a);
    assert!(!pool.is_valid(child_a));
    assert!(!pool.is_valid(grandchild));
    assert!(pool.is_valid(root));
    assert!(pool.is_valid(child_b));
    assert!(pool.is_valid(survivor));

    // Destroying again, and destroying the rest twice, must be inert.
    pool.destroy(child_a);
    pool.destroy(root);
    pool.destroy(root);

    assert!(!pool.is_valid(root));
    assert!(!pool.is_valid(child_b));
    assert!(pool.is_valid(survivor));
}

#[test]
fn subtree_teardown_is_post_order_on_the_free_list() {
    // The last slot freed sits at the free-list head, so subsequent
    // spawns replay the teardown backwards: root first (freed last),
    // then its descendants in reverse destruction order.
    let mut pool: ThingPool<i32, 16> = ThingPool::new();

    let root = pool.spawn();
    let child = pool.spawn();
    let grandchild = pool.spawn();
    pool.attach_child(root, child);
    pool.attach_child(child, grandchild);

    pool.destroy(root);

    assert_eq!(pool.spawn().index, root.index);
    assert_eq!(pool.spawn().index, child.index);
    assert_eq!(pool.spawn().index, grandchild.index);
}

#[test]
fn detached_subtree_survives_parent_destroy() {
    let mut pool: ThingPool<i32, 16> = ThingPool::new();

    let root = pool.spawn();
    let child = pool.spawn();
    let grandchild = pool.spawn();
    pool.attach_child(root, child);
    pool.attach_child(child, grandchild);

    pool.detach(child);
    pool.destroy(root);

    assert!(!pool.is_valid(root));
    assert!(pool.is_valid(child));
    assert!(pool.is_valid(grandchild));
    assert_eq!(pool.children(child).count(), 1);
}

#[test]
fn mixed_churn_keeps_pool_consistent() {
    let mut pool: ThingPool<i32, 32> = ThingPool::new();

    for round in 0..8 {
        let root = pool.spawn();
        let mut leaves = Vec::new();
        for _ in 0..3 {
            let leaf = pool.spawn();
            pool.attach_child(root, leaf);
            leaves.push(leaf);
        }
        // Detach one leaf per round; it outlives its siblings.
        pool.detach(leaves[round % 3]);
        pool.destroy(root);

        assert!(pool.is_valid(leaves[round % 3]));
        pool.destroy(leaves[round % 3]);
    }

    assert_eq!(pool.len(), 0);
    assert_eq!(pool.free_count(), 31);
}
