use crate::models::domain::{PuppyMatch, ScoredBreed};
use serde::{Deserialize, Serialize};

/// Response for the breed match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub breeds: Vec<ScoredBreed>,
    pub puppies: Vec<PuppyMatch>,
    #[serde(rename = "totalBreedsScored")]
    pub total_breeds_scored: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
