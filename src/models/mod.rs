// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ActivityLevel, BreedCategory, BreedCharacteristics, BreedProfile, BreedRecord,
    ExperienceLevel, LivingSpace, MatchPreferences, PuppyListing, PuppyMatch, ScoredBreed,
    ScoringWeights, SizeClass,
};
pub use requests::MatchRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchResponse};
