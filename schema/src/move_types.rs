use crate::pokemon_types::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(try_from = "String", into = "&'static str")]
#[strum(ascii_case_insensitive)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    /// Status moves deal no direct damage.
    pub fn is_damaging(self) -> bool {
        !matches!(self, MoveCategory::Status)
    }
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = (*self).into();
        write!(f, "{}", name)
    }
}

impl TryFrom<String> for MoveCategory {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

/// One move as seen by coverage analysis: the type it attacks with and its
/// category.
///
/// The type is kept as the raw string supplied by the data source so that a
/// single malformed record can be scored as zero instead of rejecting the
/// whole roster at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveContribution {
    #[serde(rename = "type")]
    pub move_type: String,
    pub category: MoveCategory,
}

impl MoveContribution {
    pub fn new(move_type: PokemonType, category: MoveCategory) -> Self {
        Self {
            move_type: move_type.name().to_string(),
            category,
        }
    }

    /// Builds a contribution from unvalidated data.
    pub fn from_raw(move_type: impl Into<String>, category: MoveCategory) -> Self {
        Self {
            move_type: move_type.into(),
            category,
        }
    }

    /// The attacking type, or `None` when the raw type is outside the closed set.
    pub fn attacking_type(&self) -> Option<PokemonType> {
        PokemonType::parse(&self.move_type)
    }

    pub fn is_damaging(&self) -> bool {
        self.category.is_damaging()
    }
}
