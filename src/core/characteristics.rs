use crate::models::{BreedCategory, BreedCharacteristics, BreedProfile, BreedRecord, SizeClass};

/// Build the characteristic vector for a raw breed group string.
///
/// Every breed starts from the all-5 baseline; a recognized group
/// (case-insensitive) overrides a fixed subset of traits. Unknown or
/// missing groups keep the pure baseline.
pub fn characteristics_for_group(breed_group: &str) -> BreedCharacteristics {
    let mut traits = BreedCharacteristics::baseline();

    match breed_group.trim().to_lowercase().as_str() {
        "sporting" => {
            traits.energy_level = 8;
            traits.exercise_needs = 8;
            traits.trainability = 8;
            traits.friendliness = 7;
        }
        "working" => {
            traits.energy_level = 7;
            traits.protective = 8;
            traits.intelligent = 8;
            traits.loyal = 9;
        }
        "herding" => {
            traits.energy_level = 9;
            traits.intelligent = 9;
            traits.trainability = 9;
            traits.alert = 8;
        }
        "hound" => {
            traits.independent = 7;
            traits.vocal = 7;
            traits.stubborn = 6;
            traits.energy_level = 6;
        }
        "terrier" => {
            traits.energy_level = 8;
            traits.stubborn = 7;
            traits.vocal = 7;
            traits.brave = 8;
        }
        "toy" => {
            traits.energy_level = 4;
            traits.good_with_kids = 6;
            traits.barking = 7;
            traits.shedding = 3;
        }
        _ => {}
    }

    traits
}

/// Normalize a raw catalog row into a scoreable breed profile
pub fn resolve_breed(record: BreedRecord) -> BreedProfile {
    let characteristics = characteristics_for_group(&record.breed_group);

    BreedProfile {
        id: record.id,
        name: record.name,
        alt_names: record.alt_names,
        category: BreedCategory::from_raw(&record.breed_group),
        size: SizeClass::from_raw(&record.size),
        breed_type: record.breed_type,
        image: record.image,
        characteristics,
    }
}
