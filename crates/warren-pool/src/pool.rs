//! The pool: slot store, free-list, and the spawn/destroy lifecycle.

use std::collections::VecDeque;

use smallvec::SmallVec;
use warren_core::ThingRef;

use crate::slot::Slot;

/// A fixed-capacity generational object pool.
///
/// `N` is the total slot count, fixed at compile time; slot 0 is
/// reserved as the nil sentinel, leaving `N − 1` usable slots. All
/// storage lives inline in the pool value — after construction the pool
/// never allocates.
///
/// Things are addressed exclusively through [`ThingRef`] handles.
/// Destroying a thing recursively destroys its attached subtree and
/// returns the slots to an intrusive free-list; the slot generation is
/// bumped on the next allocation, which is what invalidates any handle
/// still pointing at the previous occupant.
///
/// The pool is a plain value: no interior mutability, no locking.
/// Callers needing concurrent access must synchronise externally.
///
/// # Examples
///
/// ```
/// use warren_pool::ThingPool;
///
/// let mut pool: ThingPool<i32, 8> = ThingPool::new();
///
/// let a = pool.spawn();
/// *pool.get_mut(a) = 41;
/// assert!(pool.is_valid(a));
///
/// pool.destroy(a);
/// assert!(!pool.is_valid(a));
///
/// // The slot is reused with a bumped generation, so `a` stays dead.
/// let b = pool.spawn();
/// assert_eq!(b.index, a.index);
/// assert!(b.generation > a.generation);
/// ```
pub struct ThingPool<T, const N: usize> {
    /// The slot array. Index 0 is permanently inactive.
    pub(crate) slots: [Slot<T>; N],
    /// Intrusive free-list links, parallel to `slots`.
    pub(crate) next_free: [u32; N],
    /// Head of the free-list; 0 means the pool is full.
    pub(crate) first_free: u32,
    /// Deferred-destroy queue. Pre-allocated to capacity `N − 1` and
    /// never grown; runtime-only state, not part of a snapshot.
    pub(crate) pending: VecDeque<ThingRef>,
}

/// A point-in-time summary of pool occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolStats {
    /// Usable slot count (`N − 1`).
    pub capacity: usize,
    /// Number of live things.
    pub active: usize,
    /// Number of free slots.
    pub free: usize,
    /// Entries waiting in the deferred-destroy queue.
    pub pending_destroy: usize,
}

/// Initial free-list link for slot `i`: `1 → 2 → … → N−1 → 0`.
///
/// Slot 0 never joins the list; its link stays 0.
fn initial_link<const N: usize>(i: usize) -> u32 {
    if i == 0 || i == N - 1 {
        0
    } else {
        i as u32 + 1
    }
}

impl<T: Default, const N: usize> ThingPool<T, N> {
    /// Create an empty pool.
    ///
    /// # Panics
    ///
    /// Panics if `N < 2`. Slot 0 is the reserved nil sentinel, so a
    /// pool needs at least one more slot to be useful.
    pub fn new() -> Self {
        assert!(N >= 2, "ThingPool capacity must be >= 2, got {N}");
        Self {
            slots: std::array::from_fn(|_| Slot::default()),
            next_free: std::array::from_fn(initial_link::<N>),
            first_free: 1,
            pending: VecDeque::with_capacity(N - 1),
        }
    }

    /// Usable slot count (`N − 1`).
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Number of live things. O(N) scan.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Whether the pool holds no live things.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots available for allocation.
    pub fn free_count(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Occupancy summary.
    pub fn stats(&self) -> PoolStats {
        let active = self.len();
        PoolStats {
            capacity: self.capacity(),
            active,
            free: self.capacity() - active,
            pending_destroy: self.pending.len(),
        }
    }

    /// Whether `r` currently names a live thing.
    ///
    /// True iff the index is in range, the slot is active, and the
    /// slot's generation matches the handle's. A handle to a destroyed
    /// thing fails the active check until the slot is reused, and the
    /// generation check forever after.
    pub fn is_valid(&self, r: ThingRef) -> bool {
        let i = r.index as usize;
        i != 0 && i < N && self.slots[i].active && self.slots[i].generation == r.generation
    }

    /// Allocate a fresh thing and return its handle.
    ///
    /// The payload starts as `T::default()` and all hierarchy links are
    /// clear. Returns [`ThingRef::NIL`] when the pool is full; callers
    /// that must not drop spawns should check [`free_count`](Self::free_count)
    /// first or flush the deferred queue and retry.
    pub fn spawn(&mut self) -> ThingRef {
        let index = self.first_free;
        if index == 0 {
            return ThingRef::NIL;
        }
        self.first_free = self.next_free[index as usize];

        let generation = self.slots[index as usize].generation.wrapping_add(1);
        self.slots[index as usize] = Slot {
            generation,
            active: true,
            ..Slot::default()
        };
        ThingRef::new(index, generation)
    }

    /// Destroy a thing and its entire attached subtree.
    ///
    /// No-op for the nil handle and for stale handles, so destroying
    /// twice is harmless. Teardown is depth-first post-order: every
    /// descendant's slot is returned to the free-list before its
    /// parent's, and the destroyed node is spliced out of its own
    /// parent's sibling ring first.
    pub fn destroy(&mut self, r: ThingRef) {
        if !self.is_valid(r) {
            return;
        }
        self.unlink_from_parent(r.index as usize);

        // Two-phase teardown. Children are pushed in ring order and
        // popped in reverse, so `order` is a pre-order walk with
        // reversed children; releasing it back-to-front is exactly the
        // post-order of the recursive formulation. All links are read
        // in phase one, before any slot is cleared.
        let mut order: SmallVec<[u32; 32]> = SmallVec::new();
        let mut stack: SmallVec<[u32; 32]> = SmallVec::new();
        stack.push(r.index);
        while let Some(index) = stack.pop() {
            order.push(index);
            let head = self.slots[index as usize].first_child;
            if head != 0 {
                let mut child = head;
                loop {
                    stack.push(child);
                    child = self.slots[child as usize].next_sibling;
                    if child == head {
                        break;
                    }
                }
            }
        }
        for &index in order.iter().rev() {
            self.release_slot(index as usize);
        }
    }

    /// Read access to a thing's payload.
    ///
    /// An invalid handle resolves to the reserved slot 0 payload — a
    /// poison sink that keeps release builds crash-free at the cost of
    /// masking the bug; debug builds assert validity instead. Use
    /// [`try_get`](Self::try_get) when staleness is an expected case
    /// rather than a programming error.
    pub fn get(&self, r: ThingRef) -> &T {
        debug_assert!(self.is_valid(r), "get through invalid handle {r}");
        if self.is_valid(r) {
            &self.slots[r.index as usize].payload
        } else {
            &self.slots[0].payload
        }
    }

    /// Write access to a thing's payload.
    ///
    /// Same invalid-handle semantics as [`get`](Self::get): release
    /// builds hand out the slot 0 poison payload, debug builds assert.
    pub fn get_mut(&mut self, r: ThingRef) -> &mut T {
        debug_assert!(self.is_valid(r), "get_mut through invalid handle {r}");
        if self.is_valid(r) {
            &mut self.slots[r.index as usize].payload
        } else {
            &mut self.slots[0].payload
        }
    }

    /// Checked read access: `None` for invalid handles.
    pub fn try_get(&self, r: ThingRef) -> Option<&T> {
        if self.is_valid(r) {
            Some(&self.slots[r.index as usize].payload)
        } else {
            None
        }
    }

    /// Checked write access: `None` for invalid handles.
    pub fn try_get_mut(&mut self, r: ThingRef) -> Option<&mut T> {
        if self.is_valid(r) {
            Some(&mut self.slots[r.index as usize].payload)
        } else {
            None
        }
    }

    /// Return the pool to its freshly-constructed state.
    ///
    /// Every thing is destroyed, the free-list is relinked in ascending
    /// order, and the deferred queue is dropped. Slot generations are
    /// preserved, so handles issued before the reset stay invalid after
    /// their slots are reused.
    pub fn reset(&mut self) {
        for i in 0..N {
            let generation = self.slots[i].generation;
            self.slots[i] = Slot {
                generation,
                ..Slot::default()
            };
            self.next_free[i] = initial_link::<N>(i);
        }
        self.first_free = 1;
        self.pending.clear();
    }

    /// Clear a slot and push it onto the free-list head.
    ///
    /// The generation survives; the next allocation bumps it, which is
    /// what retires outstanding handles to this slot.
    fn release_slot(&mut self, index: usize) {
        let generation = self.slots[index].generation;
        self.slots[index] = Slot {
            generation,
            ..Slot::default()
        };
        self.next_free[index] = self.first_free;
        self.first_free = index as u32;
    }
}

impl<T: Default, const N: usize> Default for ThingPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_uses_free_list_and_returns_nil_when_full() {
        let mut pool: ThingPool<i32, 4> = ThingPool::new();
        let a = pool.spawn();
        let b = pool.spawn();
        let c = pool.spawn();
        let d = pool.spawn();

        assert!(pool.is_valid(a));
        assert!(pool.is_valid(b));
        assert!(pool.is_valid(c));
        assert_eq!(d, ThingRef::NIL);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.free_count(), 0);
    }

    #[test]
    fn destroyed_refs_become_invalid_and_reuse_bumps_generation() {
        let mut pool: ThingPool<i32, 4> = ThingPool::new();

        let first = pool.spawn();
        assert!(pool.is_valid(first));
        pool.destroy(first);
        assert!(!pool.is_valid(first));

        let reused = pool.spawn();
        assert!(pool.is_valid(reused));
        assert_eq!(reused.index, first.index);
        assert!(reused.generation > first.generation);
    }

    #[test]
    fn destroy_is_idempotent() {
        let mut pool: ThingPool<i32, 4> = ThingPool::new();
        let a = pool.spawn();
        pool.destroy(a);
        pool.destroy(a);
        pool.destroy(ThingRef::NIL);
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.free_count(), 3);
    }

    #[test]
    fn freed_slot_is_next_to_be_spawned() {
        // Free-list pushes go to the head, so the most recently
        // destroyed slot is the first one handed back out.
        let mut pool: ThingPool<i32, 8> = ThingPool::new();
        let _a = pool.spawn();
        let b = pool.spawn();
        let _c = pool.spawn();

        pool.destroy(b);
        let reused = pool.spawn();
        assert_eq!(reused.index, b.index);
    }

    #[test]
    fn payload_is_default_initialised_on_reuse() {
        let mut pool: ThingPool<i32, 4> = ThingPool::new();
        let a = pool.spawn();
        *pool.get_mut(a) = 99;
        pool.destroy(a);

        let b = pool.spawn();
        assert_eq!(*pool.get(b), 0);
    }

    #[test]
    fn try_get_filters_stale_handles() {
        let mut pool: ThingPool<i32, 4> = ThingPool::new();
        let a = pool.spawn();
        *pool.get_mut(a) = 5;
        assert_eq!(pool.try_get(a), Some(&5));

        pool.destroy(a);
        assert_eq!(pool.try_get(a), None);
        assert_eq!(pool.try_get_mut(a), None);
        assert_eq!(pool.try_get(ThingRef::NIL), None);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn get_poisons_to_slot_zero_in_release() {
        let mut pool: ThingPool<i32, 4> = ThingPool::new();
        let a = pool.spawn();
        pool.destroy(a);
        // Slot 0's payload is the default value and is never spawned.
        assert_eq!(*pool.get(a), 0);
    }

    #[test]
    fn out_of_range_index_is_invalid() {
        let pool: ThingPool<i32, 4> = ThingPool::new();
        assert!(!pool.is_valid(ThingRef::new(900, 1)));
        assert!(!pool.is_valid(ThingRef::new(0, 0)));
    }

    #[test]
    fn stats_track_occupancy() {
        let mut pool: ThingPool<i32, 8> = ThingPool::new();
        let a = pool.spawn();
        let _b = pool.spawn();
        pool.destroy_later(a);

        assert_eq!(
            pool.stats(),
            PoolStats {
                capacity: 7,
                active: 2,
                free: 5,
                pending_destroy: 1,
            }
        );
    }

    #[test]
    fn reset_restores_fresh_state_but_keeps_generations() {
        let mut pool: ThingPool<i32, 4> = ThingPool::new();
        let a = pool.spawn();
        let _b = pool.spawn();
        pool.destroy_later(a);

        pool.reset();
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.pending_destroy_count(), 0);
        assert!(!pool.is_valid(a));

        // Slots are handed out in ascending order again, and the old
        // handle's slot comes back with a higher generation.
        let fresh = pool.spawn();
        assert_eq!(fresh.index, a.index);
        assert!(fresh.generation > a.generation);
    }

    #[test]
    #[should_panic(expected = "capacity must be >= 2")]
    fn capacity_below_two_panics() {
        let _pool: ThingPool<i32, 1> = ThingPool::new();
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        const CAP: usize = 16;

        #[derive(Clone, Debug)]
        enum Op {
            Spawn,
            Destroy(usize),
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                2 => Just(Op::Spawn),
                1 => (0usize..64).prop_map(Op::Destroy),
            ]
        }

        /// Which slots are reachable from `first_free` via `next_free`.
        /// Bounded walk so a corrupt list can't hang the test.
        fn free_reachable(pool: &ThingPool<i32, CAP>) -> [bool; CAP] {
            let mut reachable = [false; CAP];
            let mut cursor = pool.first_free;
            for _ in 0..CAP {
                if cursor == 0 {
                    break;
                }
                reachable[cursor as usize] = true;
                cursor = pool.next_free[cursor as usize];
            }
            reachable
        }

        proptest! {
            #[test]
            fn free_list_always_matches_inactive_set(
                ops in prop::collection::vec(arb_op(), 1..80),
            ) {
                let mut pool: ThingPool<i32, CAP> = ThingPool::new();
                let mut live: Vec<ThingRef> = Vec::new();

                for op in ops {
                    match op {
                        Op::Spawn => {
                            let r = pool.spawn();
                            if r.is_some() {
                                prop_assert!(pool.is_valid(r));
                                live.push(r);
                            } else {
                                prop_assert_eq!(pool.free_count(), 0);
                            }
                        }
                        Op::Destroy(pick) => {
                            if !live.is_empty() {
                                let r = live.remove(pick % live.len());
                                pool.destroy(r);
                                prop_assert!(!pool.is_valid(r));
                            }
                        }
                    }

                    // Invariant: a slot is on the free-list iff inactive.
                    let reachable = free_reachable(&pool);
                    for i in 1..CAP {
                        prop_assert_eq!(
                            reachable[i],
                            !pool.slots[i].active,
                            "slot {} free-list/active disagreement", i
                        );
                    }
                    prop_assert_eq!(pool.len(), live.len());
                }
            }

            #[test]
            fn generations_never_decrease(
                ops in prop::collection::vec(arb_op(), 1..80),
            ) {
                let mut pool: ThingPool<i32, CAP> = ThingPool::new();
                let mut live: Vec<ThingRef> = Vec::new();
                let mut last_gen = [0u32; CAP];

                for op in ops {
                    match op {
                        Op::Spawn => {
                            let r = pool.spawn();
                            if r.is_some() {
                                let i = r.index as usize;
                                prop_assert!(r.generation > last_gen[i]);
                                last_gen[i] = r.generation;
                                live.push(r);
                            }
                        }
                        Op::Destroy(pick) => {
                            if !live.is_empty() {
                                let r = live.remove(pick % live.len());
                                pool.destroy(r);
                            }
                        }
                    }
                    for i in 1..CAP {
                        prop_assert!(pool.slots[i].generation >= last_gen[i]);
                    }
                }
            }
        }
    }

    #[test]
    fn minimum_pool_has_one_usable_slot() {
        let mut pool: ThingPool<i32, 2> = ThingPool::new();
        let a = pool.spawn();
        assert!(pool.is_valid(a));
        assert_eq!(pool.spawn(), ThingRef::NIL);
        pool.destroy(a);
        assert!(pool.spawn().is_some());
    }
}
