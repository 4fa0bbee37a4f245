//! Single- and dual-type effectiveness on top of the constant type chart.

use crate::errors::{TypeDataError, TypeDataResult};
use crate::type_map::TypeMap;
use schema::{type_effectiveness, PokemonType, TypeEffectiveness};

/// Numeric damage scaling. Values produced by this crate are always one of
/// 0, 0.25, 0.5, 1, 2 or 4.
pub type Multiplier = f32;

/// Every multiplier a one- or two-type defender can produce, ascending.
pub const MULTIPLIER_RANGE: [Multiplier; 6] = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];

/// Looks up a single attacker/defender pair.
pub fn lookup(attacker: PokemonType, defender: PokemonType) -> TypeEffectiveness {
    type_effectiveness(attacker, defender)
}

/// Looks up a single pair from type names, failing on any name outside the
/// eighteen known types.
pub fn lookup_by_name(attacker: &str, defender: &str) -> TypeDataResult<TypeEffectiveness> {
    Ok(lookup(parse_type(attacker)?, parse_type(defender)?))
}

/// Parses a type name case-insensitively.
pub fn parse_type(name: &str) -> TypeDataResult<PokemonType> {
    PokemonType::parse(name).ok_or_else(|| TypeDataError::UnknownType(name.to_string()))
}

/// Combined multiplier of `attacker` against a one- or two-type defender.
///
/// A second type equal to the first is ignored.
pub fn dual_effectiveness(
    attacker: PokemonType,
    defender1: PokemonType,
    defender2: Option<PokemonType>,
) -> Multiplier {
    let first = lookup(attacker, defender1).multiplier();
    match defender2 {
        Some(second) if second != defender1 => first * lookup(attacker, second).multiplier(),
        _ => first,
    }
}

/// Named form of [`dual_effectiveness`].
pub fn dual_effectiveness_by_name(
    attacker: &str,
    defender1: &str,
    defender2: Option<&str>,
) -> TypeDataResult<Multiplier> {
    let attacker = parse_type(attacker)?;
    let defender1 = parse_type(defender1)?;
    let defender2 = defender2.map(parse_type).transpose()?;
    Ok(dual_effectiveness(attacker, defender1, defender2))
}

/// How hard each of the eighteen attacking types hits the given defender.
pub fn defensive_profile(primary: PokemonType, secondary: Option<PokemonType>) -> TypeMap<Multiplier> {
    TypeMap::from_fn(|attacker| dual_effectiveness(attacker, primary, secondary))
}
