//! Warren: a fixed-capacity generational object pool for game worlds.
//!
//! Gameplay code manipulates world objects exclusively through small
//! [`ThingRef`](types::ThingRef) handles — never owning pointers — so
//! the whole world serialises as a single flat buffer, slot reuse is
//! safe against dangling references, and system update passes are
//! cache-coherent scans over a dense array.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Warren sub-crates. For most users, adding `warren` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! // A tiny world of integer payloads with 7 usable slots.
//! let mut world: ThingPool<i32, 8> = ThingPool::new();
//!
//! let parent = world.spawn();
//! let child = world.spawn();
//! *world.get_mut(parent) = 1;
//! *world.get_mut(child) = 2;
//! world.attach_child(parent, child);
//!
//! // Handles stay copyable and comparable; payloads are reached
//! // through the pool.
//! let total: i32 = world.iter().map(|(_, v)| *v).sum();
//! assert_eq!(total, 3);
//!
//! // Destroying the parent tears down the whole subtree.
//! world.destroy(parent);
//! assert!(!world.is_valid(parent));
//! assert!(!world.is_valid(child));
//! assert!(world.is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | [`ThingRef`](types::ThingRef) handles and the [`Kinded`](types::Kinded) dispatch trait |
//! | [`pool`] | `warren-pool` | [`ThingPool`](pool::ThingPool), iterators, pool stats |
//! | [`snapshot`] | `warren-snapshot` | Snapshot format: codec, header, errors, [`PayloadCodec`](snapshot::PayloadCodec) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Handle and dispatch types (`warren-core`).
///
/// [`types::ThingRef`] is the handle gameplay code passes around;
/// [`types::Kinded`] is the dispatch hook for `for_kind`.
pub use warren_core as types;

/// The pool itself (`warren-pool`).
///
/// [`pool::ThingPool`] is the main entry point; it is also re-exported
/// in the [`prelude`].
pub use warren_pool as pool;

/// Snapshot binary format (`warren-snapshot`).
///
/// Implement [`snapshot::PayloadCodec`] for a payload type to make its
/// pools snapshottable.
pub use warren_snapshot as snapshot;

/// Common imports for typical Warren usage.
///
/// ```rust
/// use warren::prelude::*;
/// ```
pub mod prelude {
    pub use warren_core::{Kinded, ThingRef};
    pub use warren_pool::{PoolStats, ThingPool};
    pub use warren_snapshot::{PayloadCodec, SnapshotError};
}
