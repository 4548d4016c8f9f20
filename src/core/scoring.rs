use crate::models::{BreedProfile, ExperienceLevel, MatchPreferences, ScoringWeights};
use std::collections::BTreeMap;

/// Sub-score used when a preference field could not be normalized.
/// Unknown input degrades to a weak-but-present match, never an error.
const NEUTRAL_RATE: f64 = 0.5;

/// A dimension whose rate crosses this threshold contributes a match reason
const STRONG_MATCH_THRESHOLD: f64 = 0.75;

/// One entry of the scoring table: a named dimension with a rate function
/// (0.0-1.0) and a human-readable explanation for strong matches.
pub struct ScoringDimension {
    pub name: &'static str,
    pub rate: fn(&BreedProfile, &MatchPreferences) -> f64,
    pub reason: fn(&BreedProfile, &MatchPreferences) -> Option<String>,
}

/// The full scoring table, in the order sub-scores and reasons are produced
pub const DIMENSIONS: [ScoringDimension; 5] = [
    ScoringDimension { name: "activity", rate: rate_activity, reason: reason_activity },
    ScoringDimension { name: "space", rate: rate_space, reason: reason_space },
    ScoringDimension { name: "family", rate: rate_family, reason: reason_family },
    ScoringDimension { name: "experience", rate: rate_experience, reason: reason_experience },
    ScoringDimension { name: "size", rate: rate_size, reason: reason_size },
];

/// Calculate a compatibility score (0-100) for a breed against adopter
/// preferences.
///
/// Scoring formula:
/// score = (
///     activity_rate * 0.30 +       # Energy aligned with lifestyle
///     space_rate * 0.20 +          # Fits the living situation
///     family_rate * 0.25 +         # Household and children fit
///     experience_rate * 0.15 +     # Manageable for the owner
///     size_rate * 0.10             # Within preferred sizes
/// ) * 100
///
/// Pure and deterministic: identical inputs produce the identical score,
/// breakdown, and reasons in the same order. Size mismatches lower the
/// size sub-score but never exclude a breed.
pub fn calculate_match_score(
    breed: &BreedProfile,
    preferences: &MatchPreferences,
    weights: &ScoringWeights,
) -> (f64, BTreeMap<String, f64>, Vec<String>) {
    let mut breakdown = BTreeMap::new();
    let mut reasons = Vec::new();
    let mut total = 0.0;

    for dimension in &DIMENSIONS {
        let rate = (dimension.rate)(breed, preferences).clamp(0.0, 1.0);
        let contribution = rate * weights.for_dimension(dimension.name) * 100.0;

        breakdown.insert(dimension.name.to_string(), contribution);
        total += contribution;

        if rate >= STRONG_MATCH_THRESHOLD {
            if let Some(reason) = (dimension.reason)(breed, preferences) {
                reasons.push(reason);
            }
        }
    }

    (total.clamp(0.0, 100.0), breakdown, reasons)
}

/// Closeness of a 1-10 trait to a target value (1.0 at the target,
/// falling off linearly across the scale)
#[inline]
fn closeness(trait_value: u8, target: f64) -> f64 {
    1.0 - ((trait_value as f64 - target).abs() / 9.0)
}

#[inline]
fn trait_rate(trait_value: u8) -> f64 {
    trait_value as f64 / 10.0
}

/// Activity rate: breed energy and exercise needs against the adopter's
/// stated lifestyle
fn rate_activity(breed: &BreedProfile, preferences: &MatchPreferences) -> f64 {
    let Some(level) = preferences.activity_level else {
        return NEUTRAL_RATE;
    };

    let target = level.target_energy();
    let energy = closeness(breed.characteristics.energy_level, target);
    let exercise = closeness(breed.characteristics.exercise_needs, target);

    0.7 * energy + 0.3 * exercise
}

fn reason_activity(breed: &BreedProfile, preferences: &MatchPreferences) -> Option<String> {
    let level = preferences.activity_level?;
    Some(format!(
        "{}'s energy level is a great fit for your {} activity lifestyle",
        breed.name,
        level.label()
    ))
}

/// Space rate: size and exercise demand against the living space capacity
fn rate_space(breed: &BreedProfile, preferences: &MatchPreferences) -> f64 {
    let Some(space) = preferences.living_space else {
        return NEUTRAL_RATE;
    };

    let capacity = space.capacity();
    let demand =
        0.6 * breed.size.space_demand() + 0.4 * breed.characteristics.exercise_needs as f64;

    if demand <= capacity {
        1.0
    } else {
        1.0 - (demand - capacity) / 9.0
    }
}

fn reason_space(breed: &BreedProfile, preferences: &MatchPreferences) -> Option<String> {
    let space = preferences.living_space?;
    Some(format!("{} is comfortable in a {}", breed.name, space.label()))
}

/// Family rate: household composition against temperament traits.
///
/// Households with children lean on goodWithKids (heaviest), patience,
/// and gentleness; the youngest-under-6 case shifts more onto patience.
/// Without children the dimension reads sociability for larger
/// households and companionship traits for singles and couples.
fn rate_family(breed: &BreedProfile, preferences: &MatchPreferences) -> f64 {
    let c = &breed.characteristics;

    if preferences.has_children() {
        let toddlers = preferences.youngest_child().is_some_and(|age| age < 6);
        let (kids_w, patient_w, gentle_w) = if toddlers { (0.5, 0.3, 0.2) } else { (0.6, 0.2, 0.2) };

        kids_w * trait_rate(c.good_with_kids)
            + patient_w * trait_rate(c.patient)
            + gentle_w * trait_rate(c.gentle)
    } else if preferences.family_size > 2 {
        0.5 * trait_rate(c.friendliness) + 0.3 * trait_rate(c.social) + 0.2 * trait_rate(c.adaptable)
    } else {
        0.6 * trait_rate(c.affectionate) + 0.4 * trait_rate(c.adaptable)
    }
}

fn reason_family(breed: &BreedProfile, preferences: &MatchPreferences) -> Option<String> {
    if preferences.has_children() && breed.characteristics.good_with_kids >= 7 {
        Some(format!("{} is known for being great with kids", breed.name))
    } else if !preferences.has_children() {
        Some(format!("{} settles in well with your household", breed.name))
    } else {
        None
    }
}

/// Experience rate: how forgiving the breed is for the adopter's level
fn rate_experience(breed: &BreedProfile, preferences: &MatchPreferences) -> f64 {
    let Some(level) = preferences.experience_level else {
        return NEUTRAL_RATE;
    };

    let c = &breed.characteristics;
    let ease = (c.trainability as f64
        + (10.0 - c.stubborn as f64)
        + (10.0 - c.independent as f64))
        / 30.0;

    match level {
        ExperienceLevel::FirstTime => ease,
        ExperienceLevel::SomeExperience => 0.4 + 0.6 * ease,
        ExperienceLevel::VeryExperienced => 1.0,
    }
}

fn reason_experience(breed: &BreedProfile, preferences: &MatchPreferences) -> Option<String> {
    match preferences.experience_level? {
        ExperienceLevel::FirstTime => Some(format!(
            "{} is trainable enough for a first-time owner",
            breed.name
        )),
        ExperienceLevel::SomeExperience => Some(format!(
            "{} is a manageable match for your experience level",
            breed.name
        )),
        ExperienceLevel::VeryExperienced => None,
    }
}

/// Size rate: a soft preference, not an exclusion. Breeds outside the
/// desired sizes score low (near-miss sizes keep a little credit) but
/// always remain rankable.
fn rate_size(breed: &BreedProfile, preferences: &MatchPreferences) -> f64 {
    if preferences.sizes.is_empty() {
        return 1.0;
    }
    if preferences.sizes.contains(&breed.size) {
        return 1.0;
    }

    let nearest = preferences
        .sizes
        .iter()
        .map(|size| (size.rank() - breed.size.rank()).abs())
        .min()
        .unwrap_or(4);

    if nearest == 1 {
        0.3
    } else {
        0.0
    }
}

fn reason_size(breed: &BreedProfile, preferences: &MatchPreferences) -> Option<String> {
    if !preferences.sizes.is_empty() && preferences.sizes.contains(&breed.size) {
        Some(format!(
            "{} size matches what you're looking for",
            breed.size.label()
        ))
    } else {
        None
    }
}
