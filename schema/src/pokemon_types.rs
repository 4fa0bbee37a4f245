use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The eighteen elemental types. Declaration order is the row/column order of
/// the type chart, so `index()` can be used to address it directly.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(try_from = "String", into = "&'static str")]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Number of types, and the side length of the type chart.
pub const TYPE_COUNT: usize = PokemonType::COUNT;

impl PokemonType {
    #[rustfmt::skip]
    pub const ALL: [PokemonType; TYPE_COUNT] = [
        PokemonType::Normal, PokemonType::Fire, PokemonType::Water, PokemonType::Electric,
        PokemonType::Grass, PokemonType::Ice, PokemonType::Fighting, PokemonType::Poison,
        PokemonType::Ground, PokemonType::Flying, PokemonType::Psychic, PokemonType::Bug,
        PokemonType::Rock, PokemonType::Ghost, PokemonType::Dragon, PokemonType::Dark,
        PokemonType::Steel, PokemonType::Fairy,
    ];

    /// All types in chart order.
    pub fn all() -> impl Iterator<Item = PokemonType> {
        Self::iter()
    }

    /// Position of this type in the type chart.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Case-insensitive parse used at ingestion boundaries. Surrounding
    /// whitespace is ignored.
    pub fn parse(name: &str) -> Option<PokemonType> {
        name.trim().parse().ok()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<String> for PokemonType {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

/// Qualitative result of a single attacking type hitting a single defending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeEffectiveness {
    /// No effect.
    Immune,
    /// Not very effective.
    Resisted,
    /// Normal effectiveness.
    Neutral,
    /// Super effective.
    SuperEffective,
}

impl TypeEffectiveness {
    /// Returns: 2.0 = Super Effective, 1.0 = Neutral, 0.5 = Resisted, 0.0 = Immune
    pub fn multiplier(self) -> f32 {
        match self {
            TypeEffectiveness::Immune => 0.0,
            TypeEffectiveness::Resisted => 0.5,
            TypeEffectiveness::Neutral => 1.0,
            TypeEffectiveness::SuperEffective => 2.0,
        }
    }
}

impl fmt::Display for TypeEffectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            TypeEffectiveness::Immune => "No Effect",
            TypeEffectiveness::Resisted => "Not Very Effective",
            TypeEffectiveness::Neutral => "Neutral",
            TypeEffectiveness::SuperEffective => "Super Effective",
        };
        write!(f, "{}", display_name)
    }
}
