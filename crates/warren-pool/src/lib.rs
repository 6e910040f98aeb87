//! Fixed-capacity generational object pool for game worlds.
//!
//! [`ThingPool`] stores up to `N − 1` payloads in a contiguous inline
//! array and hands out [`ThingRef`](warren_core::ThingRef) handles
//! instead of references. Slot reuse bumps a per-slot generation, so a
//! handle to a destroyed thing stops resolving the moment its slot is
//! recycled. On top of the slot store the pool maintains an intrusive
//! parent/child hierarchy (destroying a thing tears down its whole
//! subtree), a bounded deferred-destroy queue for safe deletion during
//! scans, and a transactional binary snapshot of the entire world.
//!
//! # Architecture
//!
//! - [`pool`] — slot store, free-list, spawn/destroy lifecycle
//! - [`hierarchy`] — attach/detach over the circular sibling ring
//! - [`deferred`] — the bounded destroy-later queue
//! - [`iter`] — active-slot iteration and kind dispatch
//! - [`snapshot`] — transactional save/load via `warren-snapshot`
//!
//! The pool is single-threaded by contract: it has no interior
//! mutability and no internal locking. All operations are synchronous;
//! only the snapshot operations touch the file system.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod deferred;
pub mod hierarchy;
pub mod iter;
pub mod pool;
pub mod snapshot;

mod slot;

pub use iter::{Children, Things, ThingsMut};
pub use pool::{PoolStats, ThingPool};
