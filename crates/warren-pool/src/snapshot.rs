//! Transactional snapshot save/load for the pool.
//!
//! A snapshot captures the free-list and the full slot array; the
//! deferred-destroy queue is runtime-only state and is never written.
//! Loading is transactional: everything is decoded into temporaries
//! and validated before a single field of the live pool is replaced,
//! so a failed load of any kind leaves the pool exactly as it was.
//!
//! The generic [`write_snapshot`](ThingPool::write_snapshot) /
//! [`load_snapshot`](ThingPool::load_snapshot) pair works over any
//! `Write`/`Read`, so tests can round-trip through `Vec<u8>`;
//! [`save_to_file`](ThingPool::save_to_file) and
//! [`load_from_file`](ThingPool::load_from_file) wrap them in buffered
//! file I/O.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use warren_snapshot::codec::{read_u32_le, write_u32_le};
use warren_snapshot::{PayloadCodec, SnapshotError, SnapshotHeader};

use crate::pool::ThingPool;
use crate::slot::Slot;

impl<T: PayloadCodec, const N: usize> ThingPool<T, N> {
    /// Write a complete snapshot to `w`.
    ///
    /// Layout: header, then `N` little-endian u32 free-list links,
    /// then `N` node records of
    /// `Slot::ENCODED_SIZE` bytes each.
    pub fn write_snapshot<W: Write>(&self, w: &mut W) -> Result<(), SnapshotError> {
        let header = SnapshotHeader {
            max_things: N as u32,
            node_size: Slot::<T>::ENCODED_SIZE,
            first_free: self.first_free,
        };
        header.encode(w)?;
        for &link in &self.next_free {
            write_u32_le(w, link)?;
        }
        for slot in &self.slots {
            slot.encode(w)?;
        }
        Ok(())
    }

    /// Replace this pool's contents with a snapshot read from `r`.
    ///
    /// Transactional: the header is validated (magic, version, capacity,
    /// node size, free-list head range) and the whole free-list and slot
    /// array are decoded into temporary storage before anything is
    /// committed. On any error the pool — including its pending destroy
    /// queue — is left untouched. On success the deferred queue is
    /// cleared, since it refers to the pre-load world.
    ///
    /// Bytes after the node array are ignored.
    pub fn load_snapshot<R: Read>(&mut self, r: &mut R) -> Result<(), SnapshotError> {
        let header = SnapshotHeader::decode(r)?;
        if header.max_things != N as u32 {
            return Err(SnapshotError::CapacityMismatch {
                expected: N as u32,
                found: header.max_things,
            });
        }
        if header.node_size != Slot::<T>::ENCODED_SIZE {
            return Err(SnapshotError::NodeSizeMismatch {
                expected: Slot::<T>::ENCODED_SIZE,
                found: header.node_size,
            });
        }
        if header.first_free >= N as u32 {
            return Err(SnapshotError::CorruptFreeList {
                first_free: header.first_free,
                capacity: N as u32,
            });
        }

        // Stage into temporaries; the live pool is not touched until
        // every byte has decoded cleanly.
        let mut next_free = vec![0u32; N];
        for link in next_free.iter_mut() {
            *link = read_u32_le(r)?;
        }
        let mut slots = Vec::with_capacity(N);
        for _ in 0..N {
            slots.push(Slot::<T>::decode(r)?);
        }

        // Commit.
        for (dst, src) in self.next_free.iter_mut().zip(next_free) {
            *dst = src;
        }
        for (dst, src) in self.slots.iter_mut().zip(slots) {
            *dst = src;
        }
        self.first_free = header.first_free;
        self.pending.clear();
        Ok(())
    }

    /// Save a snapshot to a file, creating or truncating it.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        self.write_snapshot(&mut w)?;
        w.flush()?;
        Ok(())
    }

    /// Load a snapshot from a file. Same transactional guarantees as
    /// [`load_snapshot`](Self::load_snapshot).
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SnapshotError> {
        let file = File::open(path)?;
        let mut r = BufReader::new(file);
        self.load_snapshot(&mut r)
    }
}
