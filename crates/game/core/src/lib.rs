//! Decision vocabulary shared between the simulation and the script engine.
//!
//! `game-core` defines every decision a simulation step can take ([`Action`])
//! together with the domain enumerations its payloads refer to. Each
//! enumeration carries one canonical lowercase name per value, which is the
//! text the `replay` crate writes into scripts.
pub mod action;
pub mod catalog;

pub use action::{Action, ActionArgs, ActionKind, Coord, GenerateMonster, ItemId, Layout, Wish};
pub use catalog::{DecisionMakerType, PotionId, SpeciesId, ThingType, WandId};
