//! The payload persistence trait.

use std::io::{Read, Write};

use crate::codec::{
    read_f32_le, read_i32_le, read_u32_le, read_u64_le, read_u8, write_f32_le, write_i32_le,
    write_u32_le, write_u64_le, write_u8,
};
use crate::error::SnapshotError;

/// Fixed-size binary encoding for pool payloads.
///
/// A pool can only be snapshotted when its payload type implements this
/// trait. The `Copy + Default` supertraits are the compile-time guard
/// against payloads with owning resources: a `Copy` type has no `Drop`,
/// so nothing is leaked or double-freed when a load overwrites live
/// slots wholesale.
///
/// # Contract
///
/// `encode` must write exactly [`ENCODED_SIZE`](PayloadCodec::ENCODED_SIZE)
/// bytes and `decode` must read exactly that many. The pool records the
/// per-node size in the snapshot header and refuses files that disagree,
/// so an encoding change is caught at load time rather than producing
/// garbage slots.
pub trait PayloadCodec: Copy + Default {
    /// Exact number of bytes `encode` writes.
    const ENCODED_SIZE: u32;

    /// Write this payload to the sink.
    fn encode(&self, w: &mut dyn Write) -> Result<(), SnapshotError>;

    /// Read a payload back from the source.
    fn decode(r: &mut dyn Read) -> Result<Self, SnapshotError>;
}

impl PayloadCodec for () {
    const ENCODED_SIZE: u32 = 0;

    fn encode(&self, _w: &mut dyn Write) -> Result<(), SnapshotError> {
        Ok(())
    }

    fn decode(_r: &mut dyn Read) -> Result<Self, SnapshotError> {
        Ok(())
    }
}

impl PayloadCodec for u8 {
    const ENCODED_SIZE: u32 = 1;

    fn encode(&self, w: &mut dyn Write) -> Result<(), SnapshotError> {
        write_u8(w, *self)
    }

    fn decode(r: &mut dyn Read) -> Result<Self, SnapshotError> {
        read_u8(r)
    }
}

impl PayloadCodec for u32 {
    const ENCODED_SIZE: u32 = 4;

    fn encode(&self, w: &mut dyn Write) -> Result<(), SnapshotError> {
        write_u32_le(w, *self)
    }

    fn decode(r: &mut dyn Read) -> Result<Self, SnapshotError> {
        read_u32_le(r)
    }
}

impl PayloadCodec for i32 {
    const ENCODED_SIZE: u32 = 4;

    fn encode(&self, w: &mut dyn Write) -> Result<(), SnapshotError> {
        write_i32_le(w, *self)
    }

    fn decode(r: &mut dyn Read) -> Result<Self, SnapshotError> {
        read_i32_le(r)
    }
}

impl PayloadCodec for u64 {
    const ENCODED_SIZE: u32 = 8;

    fn encode(&self, w: &mut dyn Write) -> Result<(), SnapshotError> {
        write_u64_le(w, *self)
    }

    fn decode(r: &mut dyn Read) -> Result<Self, SnapshotError> {
        read_u64_le(r)
    }
}

impl PayloadCodec for f32 {
    const ENCODED_SIZE: u32 = 4;

    fn encode(&self, w: &mut dyn Write) -> Result<(), SnapshotError> {
        write_f32_le(w, *self)
    }

    fn decode(r: &mut dyn Read) -> Result<Self, SnapshotError> {
        read_f32_le(r)
    }
}
