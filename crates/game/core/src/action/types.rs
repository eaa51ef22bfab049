//! Payload types carried by decisions.
//!
//! - `Coord`: a signed tile coordinate
//! - `ItemId`: the 256-bit identifier of an item
//! - `Wish`: what the `!wish` cheat asks for
//! - `GenerateMonster`: what the `!monster` cheat spawns, and where

use crate::catalog::{DecisionMakerType, PotionId, SpeciesId, ThingType, WandId};

// ============================================================================
// Coordinates
// ============================================================================

/// Discrete grid coordinate expressed in tile units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Item Identifier
// ============================================================================

/// 256-bit item identifier.
///
/// Stored as four 64-bit chunks, most significant chunk first. The textual
/// form concatenates the chunks as 64 lowercase hex digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub [u64; 4]);

impl ItemId {
    pub const CHUNKS: usize = 4;

    pub const fn new(chunks: [u64; 4]) -> Self {
        Self(chunks)
    }

    /// Builds an identifier from 32 big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut chunks = [0u64; 4];
        for (chunk, window) in chunks.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(window);
            *chunk = u64::from_be_bytes(buf);
        }
        Self(chunks)
    }

    pub fn chunks(&self) -> &[u64; 4] {
        &self.0
    }
}

// ============================================================================
// Cheat Payloads
// ============================================================================

/// Item requested by the wish cheat.
///
/// Only wands and potions can be wished for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wish {
    Wand(WandId),
    Potion(PotionId),
}

impl Wish {
    /// Returns the category this wish belongs to.
    pub const fn thing_type(&self) -> ThingType {
        match self {
            Wish::Wand(_) => ThingType::Wand,
            Wish::Potion(_) => ThingType::Potion,
        }
    }
}

/// Monster spawned by the generate-monster cheat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerateMonster {
    pub species: SpeciesId,
    pub decision_maker: DecisionMakerType,
    pub location: Coord,
}

impl GenerateMonster {
    pub const fn new(species: SpeciesId, decision_maker: DecisionMakerType, location: Coord) -> Self {
        Self {
            species,
            decision_maker,
            location,
        }
    }
}
