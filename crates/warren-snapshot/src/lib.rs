//! Binary snapshot format for the Warren object pool.
//!
//! A snapshot is the complete on-disk serialisation of a pool: a fixed
//! header, the raw free-list links, then one record per slot. The pool
//! crate drives the actual save/load; this crate owns the format — the
//! constants, the codec primitives, the header, the error type, and the
//! [`PayloadCodec`] trait payloads implement to cross the disk boundary.
//!
//! # Format
//!
//! ```text
//! [MAGIC "LOGC"] [VERSION u32] [max_things u32] [node_size u32] [first_free u32]
//! [next_free: max_things × u32]
//! [node records: max_things × node_size bytes]
//! ```
//!
//! All integers are little-endian. There is no compression, no alignment
//! padding, and no self-describing schema: `max_things` and `node_size`
//! are the only shape checks, so a snapshot only loads into a pool with
//! the same capacity and the same payload encoding.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod header;
pub mod payload;

pub use error::SnapshotError;
pub use header::SnapshotHeader;
pub use payload::PayloadCodec;

/// Magic bytes at the start of every snapshot file.
pub const MAGIC: [u8; 4] = *b"LOGC";

/// Current binary format version.
pub const FORMAT_VERSION: u32 = 1;
