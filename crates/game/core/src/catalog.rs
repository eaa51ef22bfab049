//! Domain enumerations referenced by decision payloads.
//!
//! Every value maps to exactly one canonical name through `strum`. Names are
//! the script-level spelling and must stay unique within an enumeration.

/// Monster species that can be spawned by the `!monster` cheat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SpeciesId {
    Human,
    Ogre,
    Lich,
    PinkBlob,
    AirElemental,
    Dog,
    Ant,
    Bee,
    Beetle,
    Scorpion,
    Snake,
}

/// Who chooses the decisions of a spawned individual.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DecisionMakerType {
    Player,
    Ai,
}

/// Category of a thing in the world.
///
/// `Individual` has a name so that scripts naming it get a precise
/// diagnostic, but it is never a valid wish category.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ThingType {
    Individual,
    Wand,
    Potion,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WandId {
    Confusion,
    Digging,
    Striking,
    Speed,
    Remedy,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PotionId {
    Healing,
    Poison,
    EtherealVision,
    Cogniscopy,
    Blindness,
    Invisibility,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_multi_word_names_are_snake_case() {
        let blob: &'static str = SpeciesId::PinkBlob.into();
        let elemental: &'static str = SpeciesId::AirElemental.into();
        let vision: &'static str = PotionId::EtherealVision.into();
        assert_eq!(blob, "pink_blob");
        assert_eq!(elemental, "air_elemental");
        assert_eq!(vision, "ethereal_vision");
    }

    #[test]
    fn test_names_are_lowercase() {
        for species in SpeciesId::iter() {
            let name: &'static str = species.into();
            assert_eq!(name, name.to_lowercase());
        }
        for maker in DecisionMakerType::iter() {
            let name: &'static str = maker.into();
            assert_eq!(name, name.to_lowercase());
        }
    }
}
