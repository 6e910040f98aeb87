//! Test fixtures for Warren development.
//!
//! Provides [`Critter`], a game-style payload with a kind tag, motion
//! state, health, and a handle-valued target field — the shape the pool
//! is designed around. Used by the integration tests and benches of the
//! other workspace crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::io::{Read, Write};

use warren_core::{Kinded, ThingRef};
use warren_snapshot::codec::{
    read_f32_le, read_i32_le, read_u32_le, read_u8, write_f32_le, write_i32_le, write_u32_le,
    write_u8,
};
use warren_snapshot::{PayloadCodec, SnapshotError};

/// Kind tag for [`Critter`] dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CritterKind {
    #[default]
    None,
    Player,
    Enemy,
    Projectile,
    Pickup,
}

impl CritterKind {
    fn to_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Player => 1,
            Self::Enemy => 2,
            Self::Projectile => 3,
            Self::Pickup => 4,
        }
    }

    fn from_u8(tag: u8) -> Result<Self, SnapshotError> {
        match tag {
            0 => Ok(Self::None),
            1 => Ok(Self::Player),
            2 => Ok(Self::Enemy),
            3 => Ok(Self::Projectile),
            4 => Ok(Self::Pickup),
            _ => Err(SnapshotError::MalformedNode {
                detail: format!("unknown critter kind tag {tag}"),
            }),
        }
    }
}

/// A game-style fat payload: kind, position, velocity, health, and a
/// target handle. Handles inside payloads are the whole point of the
/// pool — they stay safe when the target dies and its slot is reused.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Critter {
    pub kind: CritterKind,
    pub px: f32,
    pub py: f32,
    pub vx: f32,
    pub vy: f32,
    pub health: i32,
    pub target: ThingRef,
}

impl Critter {
    /// A player at the origin with full health.
    pub fn player() -> Self {
        Self {
            kind: CritterKind::Player,
            health: 100,
            ..Self::default()
        }
    }

    /// An enemy with the given health.
    pub fn enemy(health: i32) -> Self {
        Self {
            kind: CritterKind::Enemy,
            health,
            ..Self::default()
        }
    }

    /// A projectile homing on `target`.
    pub fn projectile(target: ThingRef) -> Self {
        Self {
            kind: CritterKind::Projectile,
            health: 1,
            target,
            ..Self::default()
        }
    }

    /// A pickup sitting at the given position.
    pub fn pickup(px: f32, py: f32) -> Self {
        Self {
            kind: CritterKind::Pickup,
            px,
            py,
            health: 1,
            ..Self::default()
        }
    }
}

impl Kinded for Critter {
    type Kind = CritterKind;

    fn kind(&self) -> CritterKind {
        self.kind
    }
}

impl PayloadCodec for Critter {
    // kind u8 + four f32 + health i32 + target (two u32)
    const ENCODED_SIZE: u32 = 1 + 16 + 4 + 8;

    fn encode(&self, w: &mut dyn Write) -> Result<(), SnapshotError> {
        write_u8(w, self.kind.to_u8())?;
        write_f32_le(w, self.px)?;
        write_f32_le(w, self.py)?;
        write_f32_le(w, self.vx)?;
        write_f32_le(w, self.vy)?;
        write_i32_le(w, self.health)?;
        write_u32_le(w, self.target.index)?;
        write_u32_le(w, self.target.generation)?;
        Ok(())
    }

    fn decode(r: &mut dyn Read) -> Result<Self, SnapshotError> {
        Ok(Self {
            kind: CritterKind::from_u8(read_u8(r)?)?,
            px: read_f32_le(r)?,
            py: read_f32_le(r)?,
            vx: read_f32_le(r)?,
            vy: read_f32_le(r)?,
            health: read_i32_le(r)?,
            target: ThingRef::new(read_u32_le(r)?, read_u32_le(r)?),
        })
    }
}
