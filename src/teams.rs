use crate::coverage::{roster_diagnostics, team_offensive_coverage, TeamCoverage};
use crate::display::DefensiveRating;
use crate::effectiveness::{dual_effectiveness, Multiplier};
use crate::errors::{RosterError, RosterResult, TypeDataError};
use crate::type_map::TypeMap;
use schema::{MoveContribution, PokemonType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A battle team holds at most six members.
pub const MAX_TEAM_SIZE: usize = 6;

/// A member knows at most four moves.
pub const MAX_MOVES: usize = 4;

/// One slot of a team as the team builder hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub moves: Vec<MoveContribution>,
}

impl TeamMember {
    pub fn primary_type(&self) -> Option<PokemonType> {
        self.types.first().copied()
    }

    pub fn secondary_type(&self) -> Option<PokemonType> {
        self.types.get(1).copied()
    }

    /// Multiplier this member takes from `attacker`, or `None` for a member
    /// with no types.
    pub fn damage_taken(&self, attacker: PokemonType) -> Option<Multiplier> {
        self.primary_type()
            .map(|primary| dual_effectiveness(attacker, primary, self.secondary_type()))
    }
}

impl AsRef<[MoveContribution]> for TeamMember {
    fn as_ref(&self) -> &[MoveContribution] {
        &self.moves
    }
}

/// How many members are hit hard, resist, or are immune to one attacking type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DefensiveTally {
    pub weak: usize,
    pub resistant: usize,
    pub immune: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub members: Vec<TeamMember>,
}

impl Team {
    /// Load a team from a `.ron` or `.json` file
    pub fn load(path: &Path) -> RosterResult<Team> {
        let raw = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let team = match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::from_ron(&raw)?,
            Some("json") => Self::from_json(&raw)?,
            _ => return Err(RosterError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!(
            path = %path.display(),
            members = team.members.len(),
            "loaded team"
        );
        Ok(team)
    }

    pub fn from_ron(raw: &str) -> RosterResult<Team> {
        Ok(ron::from_str(raw)?)
    }

    pub fn from_json(raw: &str) -> RosterResult<Team> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Check the team against battle limits: team size, moves per member and
    /// types per member.
    pub fn validate(&self) -> RosterResult<()> {
        if self.members.len() > MAX_TEAM_SIZE {
            return Err(RosterError::TooManyMembers {
                count: self.members.len(),
                max: MAX_TEAM_SIZE,
            });
        }

        for member in &self.members {
            if member.moves.len() > MAX_MOVES {
                return Err(RosterError::TooManyMoves {
                    member: member.name.clone(),
                    count: member.moves.len(),
                    max: MAX_MOVES,
                });
            }
            if member.types.is_empty() || member.types.len() > 2 {
                return Err(RosterError::InvalidTypeCount {
                    member: member.name.clone(),
                    count: member.types.len(),
                });
            }
        }

        Ok(())
    }

    pub fn offensive_coverage(&self) -> TeamCoverage {
        team_offensive_coverage(&self.members)
    }

    /// Moves whose type could not be recognised, by member and move index.
    pub fn diagnostics(&self) -> Vec<TypeDataError> {
        roster_diagnostics(&self.members)
    }

    /// For each attacking type, count the members that are weak to it, resist
    /// it, or are immune to it.
    pub fn defensive_summary(&self) -> TypeMap<DefensiveTally> {
        TypeMap::from_fn(|attacker| {
            let mut tally = DefensiveTally::default();
            for taken in self.members.iter().filter_map(|m| m.damage_taken(attacker)) {
                match DefensiveRating::classify(taken) {
                    DefensiveRating::QuadrupleWeak | DefensiveRating::Weak => tally.weak += 1,
                    DefensiveRating::Resisted | DefensiveRating::QuadrupleResisted => {
                        tally.resistant += 1
                    }
                    DefensiveRating::Immune => tally.immune += 1,
                    DefensiveRating::Neutral => {}
                }
            }
            tally
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::MoveCategory;
    use PokemonType::*;

    fn member(name: &str, types: Vec<PokemonType>, moves: Vec<MoveContribution>) -> TeamMember {
        TeamMember {
            name: name.to_string(),
            types,
            moves,
        }
    }

    #[test]
    fn test_validate_rejects_oversized_team() {
        let team = Team {
            name: "too many".to_string(),
            members: (0..7).map(|i| member(&format!("m{i}"), vec![Normal], vec![])).collect(),
        };
        assert!(matches!(
            team.validate(),
            Err(RosterError::TooManyMembers { count: 7, max: 6 })
        ));
    }

    #[test]
    fn test_validate_rejects_five_moves() {
        let moves = vec![MoveContribution::new(Normal, MoveCategory::Physical); 5];
        let team = Team {
            name: "greedy".to_string(),
            members: vec![member("Smeargle", vec![Normal], moves)],
        };
        assert!(matches!(
            team.validate(),
            Err(RosterError::TooManyMoves { count: 5, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_typeless_member() {
        let team = Team {
            name: "odd".to_string(),
            members: vec![member("Missingno", vec![], vec![])],
        };
        assert!(matches!(
            team.validate(),
            Err(RosterError::InvalidTypeCount { count: 0, .. })
        ));
    }

    #[test]
    fn test_defensive_summary_counts_members() {
        let team = Team {
            name: "pair".to_string(),
            members: vec![
                member("Charizard", vec![Fire, Flying], vec![]),
                member("Garchomp", vec![Dragon, Ground], vec![]),
            ],
        };
        let summary = team.defensive_summary();

        // Charizard takes 4x from Rock, Garchomp resists it.
        assert_eq!(summary[Rock], DefensiveTally { weak: 1, resistant: 1, immune: 0 });
        // Charizard is immune to Ground, Garchomp takes it neutrally.
        assert_eq!(summary[Ground], DefensiveTally { weak: 0, resistant: 0, immune: 1 });
        // Garchomp takes 4x from Ice, Charizard's two types cancel out.
        assert_eq!(summary[Ice], DefensiveTally { weak: 1, resistant: 0, immune: 0 });
        // Garchomp is immune to Electric, Charizard is weak.
        assert_eq!(summary[Electric], DefensiveTally { weak: 1, resistant: 0, immune: 1 });
    }

    #[test]
    fn test_defensive_summary_of_unvalidated_large_team() {
        let team = Team {
            name: "swarm".to_string(),
            members: vec![member("Tangela", vec![Grass], vec![]); 300],
        };
        let summary = team.defensive_summary();

        assert_eq!(summary[Fire], DefensiveTally { weak: 300, resistant: 0, immune: 0 });
        assert_eq!(summary[Water], DefensiveTally { weak: 0, resistant: 300, immune: 0 });
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Team::load(Path::new("does/not/exist.ron"));
        assert!(matches!(result, Err(RosterError::Io { .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let result = Team::load(&manifest);
        assert!(matches!(result, Err(RosterError::UnsupportedFormat(_))));
    }
}
