//! Snapshot file header.

use std::io::{Read, Write};

use crate::codec::{read_u32_le, write_u32_le};
use crate::error::SnapshotError;
use crate::{FORMAT_VERSION, MAGIC};

/// The fixed 20-byte header at the start of every snapshot.
///
/// Layout: 4 magic bytes, then `version`, `max_things`, `node_size`,
/// and `first_free` as little-endian u32.
///
/// [`decode`](SnapshotHeader::decode) validates magic and version; the
/// remaining fields are shape parameters that only the loading pool can
/// judge, so it performs those checks itself before committing anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapshotHeader {
    /// Total slot count of the pool that wrote the snapshot, including
    /// the reserved nil slot.
    pub max_things: u32,
    /// Size in bytes of one encoded node record.
    pub node_size: u32,
    /// Head of the free-list at save time. Zero means the pool was full.
    pub first_free: u32,
}

impl SnapshotHeader {
    /// Encoded size of the header in bytes.
    pub const ENCODED_SIZE: u32 = 20;

    /// Write the header, magic and version included.
    pub fn encode(&self, w: &mut dyn Write) -> Result<(), SnapshotError> {
        w.write_all(&MAGIC)?;
        write_u32_le(w, FORMAT_VERSION)?;
        write_u32_le(w, self.max_things)?;
        write_u32_le(w, self.node_size)?;
        write_u32_le(w, self.first_free)?;
        Ok(())
    }

    /// Read and validate a header.
    ///
    /// Fails with [`SnapshotError::InvalidMagic`] or
    /// [`SnapshotError::UnsupportedVersion`]; shape fields are returned
    /// as-is for the caller to check.
    pub fn decode(r: &mut dyn Read) -> Result<Self, SnapshotError> {
        let mut magic = [0u8; 4];
        r.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(SnapshotError::InvalidMagic);
        }

        let version = read_u32_le(r)?;
        if version != FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion { found: version });
        }

        Ok(Self {
            max_things: read_u32_le(r)?,
            node_size: read_u32_le(r)?,
            first_free: read_u32_le(r)?,
        })
    }
}
