//! The per-slot node record.

use std::io::{Read, Write};

use warren_snapshot::codec::{read_u32_le, read_u8, write_u32_le, write_u8};
use warren_snapshot::{PayloadCodec, SnapshotError};

/// One slot of the pool: lifecycle state, hierarchy links, payload.
///
/// Hierarchy links are slot indices, 0 meaning "none". `next_sibling`
/// and `prev_sibling` form a circular doubly-linked ring of the
/// children sharing a parent; a lone child links to itself in both
/// directions.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Slot<T> {
    /// Bumped on every allocation into this slot; never reset.
    pub generation: u32,
    /// Whether the slot currently holds a live thing.
    pub active: bool,
    /// Parent slot index, 0 if none.
    pub parent: u32,
    /// Head of this slot's child ring, 0 if childless.
    pub first_child: u32,
    /// Next child in the parent's ring.
    pub next_sibling: u32,
    /// Previous child in the parent's ring.
    pub prev_sibling: u32,
    /// Caller-supplied payload.
    pub payload: T,
}

impl<T: PayloadCodec> Slot<T> {
    /// On-disk size of one encoded slot record.
    pub const ENCODED_SIZE: u32 = 21 + T::ENCODED_SIZE;

    /// Write this slot as one snapshot node record.
    pub fn encode(&self, w: &mut dyn Write) -> Result<(), SnapshotError> {
        write_u32_le(w, self.generation)?;
        write_u8(w, self.active as u8)?;
        write_u32_le(w, self.parent)?;
        write_u32_le(w, self.first_child)?;
        write_u32_le(w, self.next_sibling)?;
        write_u32_le(w, self.prev_sibling)?;
        self.payload.encode(w)
    }

    /// Read one snapshot node record.
    pub fn decode(r: &mut dyn Read) -> Result<Self, SnapshotError> {
        let generation = read_u32_le(r)?;
        let active = match read_u8(r)? {
            0 => false,
            1 => true,
            flag => {
                return Err(SnapshotError::MalformedNode {
                    detail: format!("invalid active flag {flag}"),
                })
            }
        };
        Ok(Self {
            generation,
            active,
            parent: read_u32_le(r)?,
            first_child: read_u32_le(r)?,
            next_sibling: read_u32_le(r)?,
            prev_sibling: read_u32_le(r)?,
            payload: T::decode(r)?,
        })
    }
}
