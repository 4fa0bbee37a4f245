//! Display buckets for multipliers.
//!
//! Defensive charts and team coverage charts collapse multipliers differently,
//! so each gets its own rating. Both are total over every `f32`.

use crate::effectiveness::Multiplier;
use serde::Serialize;
use std::fmt;

/// How a defender fares against one attacking type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DefensiveRating {
    QuadrupleWeak,
    Weak,
    Neutral,
    Resisted,
    QuadrupleResisted,
    Immune,
}

impl DefensiveRating {
    /// NaN and negative inputs classify as `Immune`.
    pub fn classify(multiplier: Multiplier) -> Self {
        if multiplier >= 4.0 {
            DefensiveRating::QuadrupleWeak
        } else if multiplier >= 2.0 {
            DefensiveRating::Weak
        } else if multiplier >= 1.0 {
            DefensiveRating::Neutral
        } else if multiplier >= 0.5 {
            DefensiveRating::Resisted
        } else if multiplier > 0.0 {
            DefensiveRating::QuadrupleResisted
        } else {
            DefensiveRating::Immune
        }
    }

    pub fn multiplier(self) -> Multiplier {
        match self {
            DefensiveRating::QuadrupleWeak => 4.0,
            DefensiveRating::Weak => 2.0,
            DefensiveRating::Neutral => 1.0,
            DefensiveRating::Resisted => 0.5,
            DefensiveRating::QuadrupleResisted => 0.25,
            DefensiveRating::Immune => 0.0,
        }
    }

    /// Neutral matchups are rendered without any marking.
    pub fn is_marked(self) -> bool {
        self != DefensiveRating::Neutral
    }

    pub fn label(self) -> &'static str {
        match self {
            DefensiveRating::QuadrupleWeak => "4×",
            DefensiveRating::Weak => "2×",
            DefensiveRating::Neutral => "1×",
            DefensiveRating::Resisted => "½×",
            DefensiveRating::QuadrupleResisted => "¼×",
            DefensiveRating::Immune => "0×",
        }
    }
}

impl fmt::Display for DefensiveRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            DefensiveRating::QuadrupleWeak => "Quadruple Weak",
            DefensiveRating::Weak => "Weak",
            DefensiveRating::Neutral => "Neutral",
            DefensiveRating::Resisted => "Resisted",
            DefensiveRating::QuadrupleResisted => "Quadruple Resisted",
            DefensiveRating::Immune => "Immune",
        };
        write!(f, "{}", display_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResistedDepth {
    Half,
    Quarter,
}

/// How well a team's best move hits one defending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CoverageRating {
    QuadrupleSuperEffective,
    SuperEffective,
    Neutral,
    Resisted(ResistedDepth),
    NoCoverage,
}

impl CoverageRating {
    /// Classifies an already-maximised multiplier. Values in [1, 2), which no
    /// chart lookup produces, are treated as neutral. NaN and negative inputs
    /// classify as `NoCoverage`.
    pub fn classify(multiplier: Multiplier) -> Self {
        if multiplier >= 4.0 {
            CoverageRating::QuadrupleSuperEffective
        } else if multiplier >= 2.0 {
            CoverageRating::SuperEffective
        } else if multiplier >= 1.0 {
            CoverageRating::Neutral
        } else if multiplier >= 0.5 {
            CoverageRating::Resisted(ResistedDepth::Half)
        } else if multiplier > 0.0 {
            CoverageRating::Resisted(ResistedDepth::Quarter)
        } else {
            CoverageRating::NoCoverage
        }
    }

    /// Neutral coverage is not highlighted.
    pub fn is_highlighted(self) -> bool {
        self != CoverageRating::Neutral
    }

    pub fn label(self) -> &'static str {
        match self {
            CoverageRating::QuadrupleSuperEffective => "4×",
            CoverageRating::SuperEffective => "2×",
            CoverageRating::Neutral => "1×",
            CoverageRating::Resisted(ResistedDepth::Half) => "½×",
            CoverageRating::Resisted(ResistedDepth::Quarter) => "¼×",
            CoverageRating::NoCoverage => "-",
        }
    }
}

impl fmt::Display for CoverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            CoverageRating::QuadrupleSuperEffective => "Quadruple Super Effective",
            CoverageRating::SuperEffective => "Super Effective",
            CoverageRating::Neutral => "Neutral",
            CoverageRating::Resisted(_) => "Resisted",
            CoverageRating::NoCoverage => "No Coverage",
        };
        write!(f, "{}", display_name)
    }
}
