use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical breed size classes, ordered smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Toy,
    Small,
    Medium,
    Large,
    Giant,
}

impl SizeClass {
    /// Normalize a raw catalog size string (case-insensitive).
    /// Unrecognized input maps to `Medium`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "toy" => SizeClass::Toy,
            "small" => SizeClass::Small,
            "medium" => SizeClass::Medium,
            "large" => SizeClass::Large,
            "giant" => SizeClass::Giant,
            _ => SizeClass::Medium,
        }
    }

    /// Rough living-space demand on the 1-10 trait scale
    pub fn space_demand(&self) -> f64 {
        match self {
            SizeClass::Toy => 1.0,
            SizeClass::Small => 3.0,
            SizeClass::Medium => 5.0,
            SizeClass::Large => 7.0,
            SizeClass::Giant => 9.0,
        }
    }

    /// Position in the size ordering, used for near-miss size credit
    pub fn rank(&self) -> i8 {
        match self {
            SizeClass::Toy => 0,
            SizeClass::Small => 1,
            SizeClass::Medium => 2,
            SizeClass::Large => 3,
            SizeClass::Giant => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeClass::Toy => "Toy",
            SizeClass::Small => "Small",
            SizeClass::Medium => "Medium",
            SizeClass::Large => "Large",
            SizeClass::Giant => "Giant",
        }
    }
}

/// Canonical AKC-style breed categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreedCategory {
    Sporting,
    Hound,
    Working,
    Terrier,
    Toy,
    #[serde(rename = "Non-Sporting")]
    NonSporting,
    Herding,
    Mixed,
}

impl BreedCategory {
    /// Normalize a raw catalog group string (case-insensitive).
    /// Unrecognized input maps to `Mixed`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "sporting" => BreedCategory::Sporting,
            "hound" => BreedCategory::Hound,
            "working" => BreedCategory::Working,
            "terrier" => BreedCategory::Terrier,
            "toy" => BreedCategory::Toy,
            "non-sporting" => BreedCategory::NonSporting,
            "herding" => BreedCategory::Herding,
            _ => BreedCategory::Mixed,
        }
    }
}

/// Adopter activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ActivityLevel {
    /// Returns `None` for unrecognized input; unknown levels score
    /// neutrally downstream instead of failing the request.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "low" => Some(ActivityLevel::Low),
            "moderate" => Some(ActivityLevel::Moderate),
            "high" => Some(ActivityLevel::High),
            "very-high" => Some(ActivityLevel::VeryHigh),
            _ => None,
        }
    }

    /// Ideal breed energy on the 1-10 trait scale for this lifestyle
    pub fn target_energy(&self) -> f64 {
        match self {
            ActivityLevel::Low => 3.0,
            ActivityLevel::Moderate => 5.0,
            ActivityLevel::High => 7.0,
            ActivityLevel::VeryHigh => 9.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
            ActivityLevel::VeryHigh => "very high",
        }
    }
}

/// Adopter living situation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivingSpace {
    Apartment,
    HouseSmallYard,
    HouseLargeYard,
    Farm,
}

impl LivingSpace {
    /// Returns `None` for unrecognized input (neutral scoring downstream)
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "apartment" => Some(LivingSpace::Apartment),
            "house-small-yard" => Some(LivingSpace::HouseSmallYard),
            "house-large-yard" => Some(LivingSpace::HouseLargeYard),
            "farm" | "acreage" | "farm/acreage" => Some(LivingSpace::Farm),
            _ => None,
        }
    }

    /// How much size and exercise demand the space can absorb (1-10)
    pub fn capacity(&self) -> f64 {
        match self {
            LivingSpace::Apartment => 2.0,
            LivingSpace::HouseSmallYard => 5.0,
            LivingSpace::HouseLargeYard => 8.0,
            LivingSpace::Farm => 10.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LivingSpace::Apartment => "apartment",
            LivingSpace::HouseSmallYard => "house with a small yard",
            LivingSpace::HouseLargeYard => "house with a large yard",
            LivingSpace::Farm => "farm or acreage",
        }
    }
}

/// Adopter dog-ownership experience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    FirstTime,
    SomeExperience,
    VeryExperienced,
}

impl ExperienceLevel {
    /// Returns `None` for unrecognized input (neutral scoring downstream)
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "first-time" => Some(ExperienceLevel::FirstTime),
            "some-experience" => Some(ExperienceLevel::SomeExperience),
            "very-experienced" => Some(ExperienceLevel::VeryExperienced),
            _ => None,
        }
    }
}

/// Normalized temperament and care traits, each on a 1-10 scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedCharacteristics {
    pub energy_level: u8,
    pub trainability: u8,
    pub friendliness: u8,
    pub grooming_needs: u8,
    pub exercise_needs: u8,
    pub barking: u8,
    pub shedding: u8,
    pub good_with_kids: u8,
    pub good_with_dogs: u8,
    pub good_with_cats: u8,
    pub good_with_strangers: u8,
    pub protective: u8,
    pub playful: u8,
    pub calm: u8,
    pub intelligent: u8,
    pub independent: u8,
    pub affectionate: u8,
    pub social: u8,
    pub confident: u8,
    pub gentle: u8,
    pub patient: u8,
    pub energetic: u8,
    pub loyal: u8,
    pub alert: u8,
    pub brave: u8,
    pub stubborn: u8,
    pub sensitive: u8,
    pub adaptable: u8,
    pub vocal: u8,
    pub territorial: u8,
}

impl BreedCharacteristics {
    /// Neutral baseline: every trait sits at the middle of the 1-10 scale
    pub fn baseline() -> Self {
        Self {
            energy_level: 5,
            trainability: 5,
            friendliness: 5,
            grooming_needs: 5,
            exercise_needs: 5,
            barking: 5,
            shedding: 5,
            good_with_kids: 5,
            good_with_dogs: 5,
            good_with_cats: 5,
            good_with_strangers: 5,
            protective: 5,
            playful: 5,
            calm: 5,
            intelligent: 5,
            independent: 5,
            affectionate: 5,
            social: 5,
            confident: 5,
            gentle: 5,
            patient: 5,
            energetic: 5,
            loyal: 5,
            alert: 5,
            brave: 5,
            stubborn: 5,
            sensitive: 5,
            adaptable: 5,
            vocal: 5,
            territorial: 5,
        }
    }
}

impl Default for BreedCharacteristics {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Breed row as stored by the platform catalog, prior to normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "altNames", default)]
    pub alt_names: Vec<String>,
    #[serde(rename = "breedGroup", default)]
    pub breed_group: String,
    #[serde(default)]
    pub size: String,
    #[serde(rename = "breedType", default = "default_breed_type")]
    pub breed_type: String,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_breed_type() -> String {
    "purebred".to_string()
}

/// Breed with normalized category, size, and characteristic vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedProfile {
    pub id: String,
    pub name: String,
    #[serde(rename = "altNames", default)]
    pub alt_names: Vec<String>,
    pub category: BreedCategory,
    pub size: SizeClass,
    #[serde(rename = "breedType")]
    pub breed_type: String,
    #[serde(default)]
    pub image: Option<String>,
    pub characteristics: BreedCharacteristics,
}

/// Canonical adopter preferences, one per match request
#[derive(Debug, Clone)]
pub struct MatchPreferences {
    pub activity_level: Option<ActivityLevel>,
    pub living_space: Option<LivingSpace>,
    pub family_size: u32,
    pub children_ages: Vec<u8>,
    pub experience_level: Option<ExperienceLevel>,
    pub sizes: Vec<SizeClass>,
}

impl MatchPreferences {
    pub fn has_children(&self) -> bool {
        !self.children_ages.is_empty()
    }

    pub fn youngest_child(&self) -> Option<u8> {
        self.children_ages.iter().copied().min()
    }
}

/// Scored breed recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredBreed {
    pub id: String,
    pub name: String,
    #[serde(rename = "altNames")]
    pub alt_names: Vec<String>,
    pub category: BreedCategory,
    pub size: SizeClass,
    #[serde(rename = "breedType")]
    pub breed_type: String,
    pub image: Option<String>,
    pub characteristics: BreedCharacteristics,
    pub score: f64,
    pub breakdown: BTreeMap<String, f64>,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Puppy listing as returned by the platform listings API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuppyListing {
    pub id: String,
    pub name: String,
    pub breed: String,
    #[serde(rename = "breederName", default)]
    pub breeder_name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Puppy listing annotated with the score of the breed that matched it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuppyMatch {
    pub id: String,
    pub name: String,
    pub breed: String,
    #[serde(rename = "breederName")]
    pub breeder_name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub activity: f64,
    pub space: f64,
    pub family: f64,
    pub experience: f64,
    pub size: f64,
}

impl ScoringWeights {
    /// Weight for a named scoring dimension (unknown names carry no weight)
    pub fn for_dimension(&self, name: &str) -> f64 {
        match name {
            "activity" => self.activity,
            "space" => self.space,
            "family" => self.family,
            "experience" => self.experience,
            "size" => self.size,
            _ => 0.0,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            activity: 0.30,
            space: 0.20,
            family: 0.25,
            experience: 0.15,
            size: 0.10,
        }
    }
}
