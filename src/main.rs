use clap::{Parser, Subcommand};
use pokemon_type_engine::report::{
    write_defensive_profile, write_team_coverage, write_team_defense, write_type_chart,
};
use pokemon_type_engine::{
    defensive_profile, dual_effectiveness_by_name, parse_type, DefensiveRating, PokemonType, Team,
    TypeDataResult,
};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pokemon-type-engine", about = "Type matchups and team coverage")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiplier of one attacking type against a one- or two-type defender
    Matchup {
        attacker: String,
        defender1: String,
        defender2: Option<String>,
    },

    /// Weakness chart for a one- or two-type defender
    Profile {
        primary: String,
        secondary: Option<String>,
    },

    /// Offensive coverage and defensive summary for a .ron or .json team file
    Coverage { team: PathBuf },

    /// Print the full type chart
    Chart,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_matchup(
    attacker: &str,
    defender1: &str,
    defender2: Option<&str>,
) -> TypeDataResult<String> {
    let multiplier = dual_effectiveness_by_name(attacker, defender1, defender2)?;
    let rating = DefensiveRating::classify(multiplier);
    Ok(format!(
        "{} -> {}: {} ({})",
        parse_type(attacker)?,
        describe(parse_type(defender1)?, defender2.map(parse_type).transpose()?),
        rating.label(),
        rating
    ))
}

fn describe(primary: PokemonType, secondary: Option<PokemonType>) -> String {
    match secondary {
        Some(second) if second != primary => format!("{} / {}", primary, second),
        _ => primary.to_string(),
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    match cli.command {
        Commands::Matchup {
            attacker,
            defender1,
            defender2,
        } => {
            out = run_matchup(&attacker, &defender1, defender2.as_deref())?;
            out.push('\n');
        }
        Commands::Profile { primary, secondary } => {
            let primary = parse_type(&primary)?;
            let secondary = secondary.as_deref().map(parse_type).transpose()?;
            let profile = defensive_profile(primary, secondary);
            write_defensive_profile(&mut out, primary, secondary, &profile)?;
        }
        Commands::Coverage { team } => {
            let team = Team::load(&team)?;
            team.validate()?;

            write_team_coverage(&mut out, &team.offensive_coverage())?;
            out.push('\n');
            write_team_defense(&mut out, &team)?;

            let diagnostics = team.diagnostics();
            if !diagnostics.is_empty() {
                out.push('\n');
                out.push_str("Data warnings\n");
                for diagnostic in diagnostics {
                    out.push_str(&format!("  {}\n", diagnostic));
                }
            }
        }
        Commands::Chart => write_type_chart(&mut out)?,
    }
    Ok(out)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
