//! Core types for the Warren object pool.
//!
//! This is the leaf crate with no dependencies. It defines [`ThingRef`],
//! the copyable generational handle that gameplay code passes around
//! instead of pointers, and the [`Kinded`] trait that powers
//! kind-filtered iteration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod handle;
pub mod traits;

pub use handle::ThingRef;
pub use traits::Kinded;
