//! Error types for snapshot save and load.

use std::fmt;
use std::io;

/// Errors that can occur while writing or reading a pool snapshot.
///
/// A failed load never mutates the receiving pool; every variant below
/// is reported before any live state is replaced.
#[derive(Debug)]
pub enum SnapshotError {
    /// An I/O error occurred during read or write. Short reads surface
    /// here as [`io::ErrorKind::UnexpectedEof`].
    Io(io::Error),
    /// The file does not start with the expected `b"LOGC"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the file.
        found: u32,
    },
    /// The snapshot was taken from a pool of a different capacity.
    CapacityMismatch {
        /// Capacity of the loading pool.
        expected: u32,
        /// `max_things` recorded in the file.
        found: u32,
    },
    /// The snapshot's node records have a different size than this
    /// pool's payload encoding produces.
    NodeSizeMismatch {
        /// Node size of the loading pool.
        expected: u32,
        /// `node_size` recorded in the file.
        found: u32,
    },
    /// The recorded free-list head is out of range for the pool.
    CorruptFreeList {
        /// `first_free` recorded in the file.
        first_free: u32,
        /// Capacity of the loading pool.
        capacity: u32,
    },
    /// A node record could not be decoded.
    MalformedNode {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"LOGC\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::CapacityMismatch { expected, found } => {
                write!(
                    f,
                    "capacity mismatch: pool holds {expected} slots, snapshot has {found}"
                )
            }
            Self::NodeSizeMismatch { expected, found } => {
                write!(
                    f,
                    "node size mismatch: pool encodes {expected} bytes per node, snapshot has {found}"
                )
            }
            Self::CorruptFreeList {
                first_free,
                capacity,
            } => {
                write!(
                    f,
                    "corrupt free list: first_free {first_free} out of range for capacity {capacity}"
                )
            }
            Self::MalformedNode { detail } => write!(f, "malformed node: {detail}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SnapshotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
