use crate::models::domain::{
    ActivityLevel, ExperienceLevel, LivingSpace, MatchPreferences, SizeClass,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank breeds for an adopter.
///
/// Fields arrive as free-form strings and are normalized permissively:
/// unknown values score neutrally instead of failing the request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[serde(alias = "activity_level", rename = "activityLevel")]
    pub activity_level: Option<String>,
    #[serde(alias = "living_space", rename = "livingSpace")]
    pub living_space: Option<String>,
    #[serde(alias = "family_size", rename = "familySize", default = "default_family_size")]
    pub family_size: u32,
    #[serde(alias = "children_ages", rename = "childrenAges", default)]
    pub children_ages: Vec<u8>,
    #[serde(alias = "experience_level", rename = "experienceLevel")]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub size: Vec<String>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_family_size() -> u32 {
    1
}

fn default_limit() -> u16 {
    10
}

impl MatchRequest {
    /// Normalize the raw request into canonical preferences
    pub fn to_preferences(&self) -> MatchPreferences {
        MatchPreferences {
            activity_level: self
                .activity_level
                .as_deref()
                .and_then(ActivityLevel::from_raw),
            living_space: self.living_space.as_deref().and_then(LivingSpace::from_raw),
            family_size: self.family_size.max(1),
            children_ages: self.children_ages.clone(),
            experience_level: self
                .experience_level
                .as_deref()
                .and_then(ExperienceLevel::from_raw),
            sizes: self.size.iter().map(|raw| SizeClass::from_raw(raw)).collect(),
        }
    }
}
