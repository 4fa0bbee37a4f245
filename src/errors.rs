use std::path::PathBuf;
use thiserror::Error;

/// Errors related to type data supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeDataError {
    /// A type name outside the eighteen known types was passed to a direct lookup
    #[error("Unknown type: {0:?}")]
    UnknownType(String),
    /// A roster member's move has a type outside the known set. Team coverage
    /// recovers from this by scoring the move as zero.
    #[error("Malformed move {index} of roster member {member}: unknown type {move_type:?}")]
    MalformedMoveContribution {
        member: usize,
        index: usize,
        move_type: String,
    },
}

/// Errors related to loading and validating team files
#[derive(Debug, Error)]
pub enum RosterError {
    /// The team file could not be read
    #[error("Failed to read team file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The team file is not valid RON
    #[error("Failed to parse RON team file: {0}")]
    Ron(#[from] ron::error::SpannedError),
    /// The team file is not valid JSON
    #[error("Failed to parse JSON team file: {0}")]
    Json(#[from] serde_json::Error),
    /// Only `.ron` and `.json` team files are understood
    #[error("Unsupported team file format: {0}")]
    UnsupportedFormat(PathBuf),
    /// A team holds more members than a battle allows
    #[error("Team has {count} members, at most {max} are allowed")]
    TooManyMembers { count: usize, max: usize },
    /// A member knows more moves than a battle allows
    #[error("{member} knows {count} moves, at most {max} are allowed")]
    TooManyMoves {
        member: String,
        count: usize,
        max: usize,
    },
    /// A member must have one or two types
    #[error("{member} has {count} types, expected 1 or 2")]
    InvalidTypeCount { member: String, count: usize },
}

/// Type alias for Results using TypeDataError
pub type TypeDataResult<T> = Result<T, TypeDataError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;
