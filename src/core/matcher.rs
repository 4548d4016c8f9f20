use crate::core::scoring::calculate_match_score;
use crate::models::{BreedProfile, MatchPreferences, ScoredBreed, ScoringWeights};

/// Result of ranking a breed catalog
#[derive(Debug)]
pub struct MatchOutcome {
    pub ranked: Vec<ScoredBreed>,
    pub total_scored: usize,
}

/// Breed ranking orchestrator
///
/// # Pipeline Stages
/// 1. Score every candidate breed against the adopter preferences
/// 2. Stable sort descending by score
/// 3. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct BreedMatcher {
    weights: ScoringWeights,
}

impl BreedMatcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank candidate breeds for an adopter's preferences.
    ///
    /// Every candidate is scored and stays rankable: a size or lifestyle
    /// mismatch lowers the score but never removes a breed from the
    /// results. An empty catalog yields an empty ranking.
    ///
    /// # Arguments
    /// * `preferences` - The adopter's normalized preferences
    /// * `breeds` - The breed catalog snapshot to rank
    /// * `limit` - Maximum number of recommendations to return
    pub fn rank_breeds(
        &self,
        preferences: &MatchPreferences,
        breeds: Vec<BreedProfile>,
        limit: usize,
    ) -> MatchOutcome {
        let total_scored = breeds.len();

        let mut ranked: Vec<ScoredBreed> = breeds
            .into_iter()
            .map(|breed| {
                let (score, breakdown, match_reasons) =
                    calculate_match_score(&breed, preferences, &self.weights);

                ScoredBreed {
                    id: breed.id,
                    name: breed.name,
                    alt_names: breed.alt_names,
                    category: breed.category,
                    size: breed.size,
                    breed_type: breed.breed_type,
                    image: breed.image,
                    characteristics: breed.characteristics,
                    score,
                    breakdown,
                    match_reasons,
                }
            })
            .collect();

        // sort_by is stable: breeds with equal scores keep catalog order
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked.truncate(limit);

        MatchOutcome {
            ranked,
            total_scored,
        }
    }
}

impl Default for BreedMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
