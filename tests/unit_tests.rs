// Unit tests for Pup Algo

use pup_algo::core::{calculate_match_score, characteristics_for_group, resolve_breed};
use pup_algo::models::{
    ActivityLevel, BreedCategory, BreedCharacteristics, BreedProfile, BreedRecord,
    ExperienceLevel, LivingSpace, MatchPreferences, ScoringWeights, SizeClass,
};

fn create_record(id: &str, group: &str, size: &str) -> BreedRecord {
    BreedRecord {
        id: id.to_string(),
        name: format!("Breed {}", id),
        alt_names: vec![],
        breed_group: group.to_string(),
        size: size.to_string(),
        breed_type: "purebred".to_string(),
        image: None,
    }
}

fn create_breed(group: &str, size: SizeClass) -> BreedProfile {
    BreedProfile {
        id: "test".to_string(),
        name: "Test Breed".to_string(),
        alt_names: vec![],
        category: BreedCategory::from_raw(group),
        size,
        breed_type: "purebred".to_string(),
        image: None,
        characteristics: characteristics_for_group(group),
    }
}

fn create_preferences() -> MatchPreferences {
    MatchPreferences {
        activity_level: Some(ActivityLevel::High),
        living_space: Some(LivingSpace::HouseLargeYard),
        family_size: 4,
        children_ages: vec![6, 9],
        experience_level: Some(ExperienceLevel::SomeExperience),
        sizes: vec![SizeClass::Large],
    }
}

#[test]
fn test_category_normalization_case_insensitive() {
    for raw in ["sporting", "SPORTING", "Sporting"] {
        assert_eq!(BreedCategory::from_raw(raw), BreedCategory::Sporting);
    }
}

#[test]
fn test_category_normalization_defaults_to_mixed() {
    assert_eq!(BreedCategory::from_raw("exotic"), BreedCategory::Mixed);
    assert_eq!(BreedCategory::from_raw(""), BreedCategory::Mixed);
}

#[test]
fn test_size_normalization_defaults_to_medium() {
    assert_eq!(SizeClass::from_raw("pocket"), SizeClass::Medium);
    assert_eq!(SizeClass::from_raw("LARGE"), SizeClass::Large);
}

#[test]
fn test_every_group_override_row() {
    let sporting = characteristics_for_group("sporting");
    assert_eq!(
        (sporting.energy_level, sporting.exercise_needs, sporting.trainability, sporting.friendliness),
        (8, 8, 8, 7)
    );

    let working = characteristics_for_group("working");
    assert_eq!(
        (working.energy_level, working.protective, working.intelligent, working.loyal),
        (7, 8, 8, 9)
    );

    let herding = characteristics_for_group("herding");
    assert_eq!(
        (herding.energy_level, herding.intelligent, herding.trainability, herding.alert),
        (9, 9, 9, 8)
    );

    let hound = characteristics_for_group("hound");
    assert_eq!(
        (hound.independent, hound.vocal, hound.stubborn, hound.energy_level),
        (7, 7, 6, 6)
    );

    let terrier = characteristics_for_group("terrier");
    assert_eq!(
        (terrier.energy_level, terrier.stubborn, terrier.vocal, terrier.brave),
        (8, 7, 7, 8)
    );

    let toy = characteristics_for_group("toy");
    assert_eq!(
        (toy.energy_level, toy.good_with_kids, toy.barking, toy.shedding),
        (4, 6, 7, 3)
    );
}

#[test]
fn test_unknown_group_is_pure_baseline() {
    assert_eq!(characteristics_for_group("designer"), BreedCharacteristics::baseline());
    assert_eq!(characteristics_for_group("mixed"), BreedCharacteristics::baseline());
}

#[test]
fn test_resolve_breed_end_to_end() {
    let profile = resolve_breed(create_record("golden", "Sporting", "Large"));

    assert_eq!(profile.category, BreedCategory::Sporting);
    assert_eq!(profile.size, SizeClass::Large);
    assert_eq!(profile.characteristics.energy_level, 8);
    assert_eq!(profile.characteristics.good_with_kids, 5);
}

#[test]
fn test_score_is_pure_function_of_inputs() {
    let breed = create_breed("sporting", SizeClass::Large);
    let preferences = create_preferences();
    let weights = ScoringWeights::default();

    let first = calculate_match_score(&breed, &preferences, &weights);
    let second = calculate_match_score(&breed, &preferences, &weights);

    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
    assert_eq!(first.2, second.2);
}

#[test]
fn test_good_with_kids_monotonicity() {
    let preferences = create_preferences();
    let weights = ScoringWeights::default();

    let mut previous = f64::NEG_INFINITY;
    for kids_score in [3, 5, 7, 9] {
        let mut breed = create_breed("mixed", SizeClass::Large);
        breed.characteristics.good_with_kids = kids_score;

        let (score, _, _) = calculate_match_score(&breed, &preferences, &weights);
        assert!(
            score >= previous,
            "raising goodWithKids from lower value dropped score: {} < {}",
            score,
            previous
        );
        previous = score;
    }
}

#[test]
fn test_energy_alignment_monotonicity() {
    // For a high-activity adopter (target energy 7), moving energy level
    // toward the target must never decrease the score
    let preferences = create_preferences();
    let weights = ScoringWeights::default();

    let mut previous = f64::NEG_INFINITY;
    for energy in [1, 3, 5, 7] {
        let mut breed = create_breed("mixed", SizeClass::Large);
        breed.characteristics.energy_level = energy;

        let (score, _, _) = calculate_match_score(&breed, &preferences, &weights);
        assert!(score >= previous);
        previous = score;
    }
}

#[test]
fn test_size_outside_preference_scores_low_not_excluded() {
    let preferences = create_preferences();
    let weights = ScoringWeights::default();

    let out_of_size = create_breed("mixed", SizeClass::Toy);
    let (score, breakdown, _) = calculate_match_score(&out_of_size, &preferences, &weights);

    assert_eq!(breakdown["size"], 0.0);
    // The breed still earns a score from the remaining dimensions
    assert!(score > 0.0);
}

#[test]
fn test_neutral_scoring_for_unrecognized_preferences() {
    let neutral_prefs = MatchPreferences {
        activity_level: None,
        living_space: None,
        family_size: 1,
        children_ages: vec![],
        experience_level: None,
        sizes: vec![],
    };
    let weights = ScoringWeights::default();
    let breed = create_breed("mixed", SizeClass::Medium);

    let (score, breakdown, _) = calculate_match_score(&breed, &neutral_prefs, &weights);

    // Unknown lifestyle fields earn half credit; no size restriction earns full
    assert_eq!(breakdown["activity"], 0.5 * weights.activity * 100.0);
    assert_eq!(breakdown["space"], 0.5 * weights.space * 100.0);
    assert_eq!(breakdown["experience"], 0.5 * weights.experience * 100.0);
    assert_eq!(breakdown["size"], weights.size * 100.0);
    assert!(score > 0.0 && score <= 100.0);
}

#[test]
fn test_children_raise_good_with_kids_influence() {
    let weights = ScoringWeights::default();

    let mut with_children = create_preferences();
    with_children.children_ages = vec![8];
    let mut without_children = create_preferences();
    without_children.children_ages = vec![];

    let mut indifferent = create_breed("mixed", SizeClass::Large);
    indifferent.characteristics.good_with_kids = 2;
    let mut devoted = indifferent.clone();
    devoted.characteristics.good_with_kids = 10;

    let kids_delta = calculate_match_score(&devoted, &with_children, &weights).0
        - calculate_match_score(&indifferent, &with_children, &weights).0;
    let no_kids_delta = calculate_match_score(&devoted, &without_children, &weights).0
        - calculate_match_score(&indifferent, &without_children, &weights).0;

    assert!(kids_delta > no_kids_delta);
    assert!(kids_delta > 0.0);
}

#[test]
fn test_breed_type_does_not_affect_score() {
    let preferences = create_preferences();
    let weights = ScoringWeights::default();

    let purebred = create_breed("sporting", SizeClass::Large);
    let mut designer = purebred.clone();
    designer.breed_type = "designer".to_string();

    let (purebred_score, _, _) = calculate_match_score(&purebred, &preferences, &weights);
    let (designer_score, _, _) = calculate_match_score(&designer, &preferences, &weights);

    assert_eq!(purebred_score, designer_score);
}
