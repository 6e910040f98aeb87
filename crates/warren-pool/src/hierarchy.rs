//! Parent/child hierarchy over the intrusive sibling ring.
//!
//! Children of a parent form a circular doubly-linked ring threaded
//! through the slots themselves (`next_sibling`/`prev_sibling`), with
//! the parent's `first_child` naming the ring head. Attach and detach
//! are O(1); insertion is at the ring tail, so iteration over a ring
//! yields children in attach order.

use warren_core::ThingRef;

use crate::pool::ThingPool;

impl<T: Default, const N: usize> ThingPool<T, N> {
    /// Attach `child` under `parent`.
    ///
    /// No-op if either handle is invalid or if both name the same
    /// thing. A child that already has a parent is detached first, so
    /// a thing is in at most one ring at a time. The new child joins
    /// the tail of the parent's ring, preserving attach order for
    /// [`children`](Self::children).
    ///
    /// The hierarchy must stay a forest: attaching a thing underneath
    /// one of its own descendants is not detected and leaves the
    /// structure unfit for a later `destroy`. Callers must not form
    /// such cycles.
    pub fn attach_child(&mut self, parent: ThingRef, child: ThingRef) {
        if !self.is_valid(parent) || !self.is_valid(child) {
            return;
        }
        debug_assert!(
            parent.index != child.index,
            "attach_child: cannot attach {child} to itself"
        );
        if parent.index == child.index {
            return;
        }

        let p = parent.index as usize;
        let c = child.index as usize;
        if self.slots[c].parent != 0 {
            self.unlink_from_parent(c);
        }

        self.slots[c].parent = parent.index;
        let head = self.slots[p].first_child;
        if head == 0 {
            // First child: a ring of one.
            self.slots[p].first_child = child.index;
            self.slots[c].next_sibling = child.index;
            self.slots[c].prev_sibling = child.index;
        } else {
            // Splice in at the tail, immediately before the head.
            let tail = self.slots[head as usize].prev_sibling;
            self.slots[tail as usize].next_sibling = child.index;
            self.slots[c].prev_sibling = tail;
            self.slots[c].next_sibling = head;
            self.slots[head as usize].prev_sibling = child.index;
        }
    }

    /// Detach `child` from its parent, leaving it a root.
    ///
    /// No-op if the handle is invalid or the thing has no parent. The
    /// child itself, its payload, and its own children are untouched;
    /// no handle changes validity.
    pub fn detach(&mut self, child: ThingRef) {
        if !self.is_valid(child) {
            return;
        }
        self.unlink_from_parent(child.index as usize);
    }

    /// The parent of `r`, or nil if `r` is invalid or a root.
    pub fn parent_of(&self, r: ThingRef) -> ThingRef {
        if !self.is_valid(r) {
            return ThingRef::NIL;
        }
        self.ref_to(self.slots[r.index as usize].parent)
    }

    /// The first child of `r`, or nil if `r` is invalid or childless.
    pub fn first_child_of(&self, r: ThingRef) -> ThingRef {
        if !self.is_valid(r) {
            return ThingRef::NIL;
        }
        self.ref_to(self.slots[r.index as usize].first_child)
    }

    /// Splice slot `c` out of its parent's ring and clear its links.
    ///
    /// Index-level worker shared by `detach` and `destroy`; no
    /// validity checks. No-op when the slot has no parent.
    pub(crate) fn unlink_from_parent(&mut self, c: usize) {
        let p = self.slots[c].parent as usize;
        if p == 0 {
            return;
        }

        let next = self.slots[c].next_sibling;
        if next as usize == c {
            // Sole member of the ring.
            self.slots[p].first_child = 0;
        } else {
            let prev = self.slots[c].prev_sibling;
            self.slots[prev as usize].next_sibling = next;
            self.slots[next as usize].prev_sibling = prev;
            if self.slots[p].first_child as usize == c {
                self.slots[p].first_child = next;
            }
        }

        self.slots[c].parent = 0;
        self.slots[c].next_sibling = 0;
        self.slots[c].prev_sibling = 0;
    }

    /// Build a current-generation handle for slot `index` (0 → nil).
    fn ref_to(&self, index: u32) -> ThingRef {
        if index == 0 {
            ThingRef::NIL
        } else {
            ThingRef::new(index, self.slots[index as usize].generation)
        }
    }
}
