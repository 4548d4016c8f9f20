// Core algorithm exports
pub mod characteristics;
pub mod matcher;
pub mod scoring;

pub use characteristics::{characteristics_for_group, resolve_breed};
pub use matcher::{BreedMatcher, MatchOutcome};
pub use scoring::{calculate_match_score, ScoringDimension, DIMENSIONS};
