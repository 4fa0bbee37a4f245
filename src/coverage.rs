//! Team-wide offensive coverage.
//!
//! Each defending type is evaluated on its own; no simulated dual-type enemy
//! is ever formed.

use crate::display::CoverageRating;
use crate::effectiveness::{lookup, Multiplier};
use crate::errors::TypeDataError;
use crate::type_map::TypeMap;
use ordered_float::OrderedFloat;
use schema::{MoveContribution, PokemonType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Best multiplier a team can reach against each defending type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TeamCoverage {
    best: TypeMap<Multiplier>,
}

impl TeamCoverage {
    pub fn get(&self, defender: PokemonType) -> Multiplier {
        self.best[defender]
    }

    pub fn rating(&self, defender: PokemonType) -> CoverageRating {
        CoverageRating::classify(self.get(defender))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PokemonType, Multiplier)> + '_ {
        self.best.iter().map(|(t, &m)| (t, m))
    }

    /// Defending types some member hits for at least 2×.
    pub fn super_effective_types(&self) -> Vec<PokemonType> {
        self.iter()
            .filter(|&(_, m)| m >= 2.0)
            .map(|(t, _)| t)
            .collect()
    }

    /// Defending types no member can damage at all.
    pub fn uncovered_types(&self) -> Vec<PokemonType> {
        self.iter()
            .filter(|&(_, m)| m == 0.0)
            .map(|(t, _)| t)
            .collect()
    }

    pub fn to_map(&self) -> BTreeMap<PokemonType, Multiplier> {
        self.best.to_btree_map()
    }
}

/// Best multiplier one roster member reaches against `defender`.
///
/// Status moves are dropped before the max is taken, and a member left with no
/// damaging moves scores 0. Moves with an unrecognised type score 0.
pub fn member_best(moves: &[MoveContribution], defender: PokemonType) -> Multiplier {
    moves
        .iter()
        .filter(|contribution| contribution.is_damaging())
        .map(|contribution| match contribution.attacking_type() {
            Some(attacker) => lookup(attacker, defender).multiplier(),
            None => 0.0,
        })
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |best| best.0)
}

/// For every defending type, the maximum multiplier any member's damaging
/// move achieves against it.
///
/// Member order and move order do not affect the result.
pub fn team_offensive_coverage<M>(roster: &[M]) -> TeamCoverage
where
    M: AsRef<[MoveContribution]>,
{
    for error in roster_diagnostics(roster) {
        tracing::warn!("{error}; scoring it as no coverage");
    }

    let best = TypeMap::from_fn(|defender| {
        roster
            .iter()
            .map(|member| OrderedFloat(member_best(member.as_ref(), defender)))
            .max()
            .map_or(0.0, |best| best.0)
    });

    tracing::debug!(
        members = roster.len(),
        uncovered = best.values().filter(|&&m| m == 0.0).count(),
        "computed team coverage"
    );

    TeamCoverage { best }
}

/// Lists every damaging move whose type is outside the known set. These are
/// the moves `team_offensive_coverage` scores as zero.
pub fn roster_diagnostics<M>(roster: &[M]) -> Vec<TypeDataError>
where
    M: AsRef<[MoveContribution]>,
{
    roster
        .iter()
        .enumerate()
        .flat_map(|(member, moves)| {
            moves
                .as_ref()
                .iter()
                .enumerate()
                .filter(|(_, contribution)| {
                    contribution.is_damaging() && contribution.attacking_type().is_none()
                })
                .map(move |(index, contribution)| TypeDataError::MalformedMoveContribution {
                    member,
                    index,
                    move_type: contribution.move_type.clone(),
                })
        })
        .collect()
}
