// In: src/lib.rs

//! Pokemon Type Engine
//!
//! The constant 18x18 type chart, dual-type effectiveness, and team-wide
//! offensive coverage analysis. Every operation is a pure function of its
//! inputs; the only shared data is the immutable chart.

// --- MODULE DECLARATIONS ---
pub mod coverage;
pub mod display;
pub mod effectiveness;
pub mod errors;
pub mod report;
pub mod teams;
pub mod type_map;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    type_effectiveness, MoveCategory, MoveContribution, PokemonType, TypeEffectiveness,
    TYPE_CHART, TYPE_COUNT,
};

// --- From this crate's modules (`src/`) ---
pub use coverage::{member_best, roster_diagnostics, team_offensive_coverage, TeamCoverage};
pub use display::{CoverageRating, DefensiveRating, ResistedDepth};
pub use effectiveness::{
    defensive_profile, dual_effectiveness, dual_effectiveness_by_name, lookup, lookup_by_name,
    parse_type, Multiplier, MULTIPLIER_RANGE,
};
pub use teams::{DefensiveTally, Team, TeamMember};
pub use type_map::TypeMap;

// Crate-specific error and result types.
pub use errors::{RosterError, RosterResult, TypeDataError, TypeDataResult};
