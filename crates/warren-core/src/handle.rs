//! Generational handles into a `ThingPool`.
//!
//! A [`ThingRef`] names a pool slot by `(index, generation)`. The
//! `generation` field allows O(1) staleness checks: a slot reused after
//! destruction bumps its generation, so handles to the previous occupant
//! stop resolving without any bookkeeping on the caller's side.

use std::fmt;

/// A copyable reference to an entry in a `ThingPool`.
///
/// Handles confer no ownership. They are plain data — freely copied,
/// stored inside payloads, and serialized as part of a snapshot. Index 0
/// names the reserved nil slot; a handle with `index == 0` refers to
/// nothing.
///
/// Equality is structural over both fields. Two handles to the same slot
/// from different generations compare unequal, which is exactly the
/// stale-reference property the pool relies on.
///
/// # Examples
///
/// ```
/// use warren_core::ThingRef;
///
/// let nil = ThingRef::NIL;
/// assert!(nil.is_nil());
///
/// let some = ThingRef::new(1, 7);
/// assert!(some.is_some());
/// assert_eq!(some, ThingRef::new(1, 7));
/// assert_ne!(some, ThingRef::new(2, 7));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct ThingRef {
    /// Slot index within the pool. 0 is the nil sentinel.
    pub index: u32,
    /// Generation of the slot when this handle was issued.
    pub generation: u32,
}

impl ThingRef {
    /// The nil handle, `(0, 0)`. Used for "absent" and for failed
    /// allocation. `ThingRef::default()` yields the same value.
    pub const NIL: ThingRef = ThingRef {
        index: 0,
        generation: 0,
    };

    /// Create a handle from raw parts.
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Whether this is the nil handle (`index == 0`).
    ///
    /// The generation does not participate: any handle with index 0
    /// refers to nothing, regardless of its generation bits.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.index == 0
    }

    /// Whether this handle names a slot (`index != 0`).
    ///
    /// Note that a non-nil handle may still be stale; only the owning
    /// pool can tell via `is_valid`.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        self.index != 0
    }
}

impl fmt::Display for ThingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thing({}@{})", self.index, self.generation)
    }
}
