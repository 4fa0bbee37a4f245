// Type Engine Schema - Shared value definitions
// This crate holds the closed type set, move categories and the constant
// type chart, shared by the calculator crate and anything that ingests
// roster data.

// Re-export the main types
pub use move_types::*;
pub use pokemon_types::*;
pub use type_chart::*;

pub mod move_types;
pub mod pokemon_types;
pub mod type_chart;
