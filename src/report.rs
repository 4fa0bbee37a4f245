//! Plain-text rendering of charts for the command line.

use crate::coverage::TeamCoverage;
use crate::display::DefensiveRating;
use crate::effectiveness::Multiplier;
use crate::teams::Team;
use crate::type_map::TypeMap;
use schema::{type_effectiveness, PokemonType, TypeEffectiveness};
use std::fmt::{self, Write};

const LABEL_WIDTH: usize = 10;

/// Short three-letter heading used for chart columns.
fn abbreviation(pokemon_type: PokemonType) -> &'static str {
    &pokemon_type.name()[..3]
}

/// Write the full 18x18 chart, attackers down the side and defenders across.
pub fn write_type_chart(out: &mut impl Write) -> fmt::Result {
    write!(out, "{:<LABEL_WIDTH$}", "ATK \\ DEF")?;
    for defender in PokemonType::all() {
        write!(out, " {:>3}", abbreviation(defender))?;
    }
    writeln!(out)?;

    for attacker in PokemonType::all() {
        write!(out, "{:<LABEL_WIDTH$}", attacker.name())?;
        for defender in PokemonType::all() {
            let cell = match type_effectiveness(attacker, defender) {
                TypeEffectiveness::Immune => "0",
                TypeEffectiveness::Resisted => "½",
                TypeEffectiveness::Neutral => ".",
                TypeEffectiveness::SuperEffective => "2",
            };
            write!(out, " {:>3}", cell)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write a species' weakness chart. Neutral matchups are left out.
pub fn write_defensive_profile(
    out: &mut impl Write,
    primary: PokemonType,
    secondary: Option<PokemonType>,
    profile: &TypeMap<Multiplier>,
) -> fmt::Result {
    match secondary {
        Some(second) if second != primary => writeln!(out, "Defending as {} / {}", primary, second)?,
        _ => writeln!(out, "Defending as {}", primary)?,
    }
    writeln!(out, "--------------------")?;

    for (attacker, &multiplier) in profile.iter() {
        let rating = DefensiveRating::classify(multiplier);
        if rating.is_marked() {
            writeln!(out, "{:<LABEL_WIDTH$} : {:<3} {}", attacker.name(), rating.label(), rating)?;
        }
    }
    Ok(())
}

/// Write the team's best coverage against each defending type.
pub fn write_team_coverage(out: &mut impl Write, coverage: &TeamCoverage) -> fmt::Result {
    writeln!(out, "Offensive coverage")?;
    writeln!(out, "--------------------")?;
    for (defender, _) in coverage.iter() {
        let rating = coverage.rating(defender);
        if rating.is_highlighted() {
            writeln!(out, "{:<LABEL_WIDTH$} : {:<3} {}", defender.name(), rating.label(), rating)?;
        } else {
            writeln!(out, "{:<LABEL_WIDTH$} : {}", defender.name(), rating.label())?;
        }
    }

    let uncovered = coverage.uncovered_types();
    if !uncovered.is_empty() {
        let names: Vec<&str> = uncovered.iter().map(|t| t.name()).collect();
        writeln!(out, "No damaging move reaches: {}", names.join(", "))?;
    }
    Ok(())
}

/// Write the per-type weakness/resistance counts for a team.
pub fn write_team_defense(out: &mut impl Write, team: &Team) -> fmt::Result {
    writeln!(out, "Defensive summary for {}", team.name)?;
    writeln!(out, "--------------------")?;
    writeln!(out, "{:<LABEL_WIDTH$} : weak resist immune", "")?;
    for (attacker, tally) in team.defensive_summary().iter() {
        writeln!(
            out,
            "{:<LABEL_WIDTH$} : {:>4} {:>6} {:>6}",
            attacker.name(),
            tally.weak,
            tally.resistant,
            tally.immune
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effectiveness::defensive_profile;
    use PokemonType::*;

    #[test]
    fn test_type_chart_has_header_and_eighteen_rows() {
        let mut out = String::new();
        write_type_chart(&mut out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 19);
        assert!(lines[0].contains("Fai"));
        assert!(lines[4].starts_with("Electric"));
    }

    #[test]
    fn test_profile_hides_neutral_rows() {
        let mut out = String::new();
        let profile = defensive_profile(Normal, None);
        write_defensive_profile(&mut out, Normal, None, &profile).unwrap();
        assert!(out.contains("Fighting"));
        assert!(out.contains("Ghost"));
        assert!(!out.contains("Water"));
    }
}
