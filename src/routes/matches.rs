use crate::core::{resolve_breed, BreedMatcher};
use crate::models::{
    BreedProfile, BreedRecord, ErrorResponse, HealthResponse, MatchRequest, MatchResponse,
    PuppyMatch, ScoredBreed,
};
use crate::services::{CacheKey, CacheManager, CatalogClient};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: BreedMatcher,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/breeds/match", web::post().to(match_breeds));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Degraded when the cache tier is unreachable; matching still works
    let cache_healthy = state.cache.ping().await.is_ok();

    let status = if cache_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Breed match endpoint
///
/// POST /api/v1/breeds/match
///
/// Request body:
/// ```json
/// {
///   "activityLevel": "high",
///   "livingSpace": "house-large-yard",
///   "familySize": 4,
///   "childrenAges": [6, 9],
///   "experienceLevel": "some-experience",
///   "size": ["Large"],
///   "limit": 10
/// }
/// ```
async fn match_breeds(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let match_id = uuid::Uuid::new_v4();
    let limit = (req.limit as usize).min(state.max_limit);

    tracing::info!("Matching breeds for request {}, limit: {}", match_id, limit);

    // Fetch the breed catalog, served from cache when warm
    let records = match fetch_catalog(&state).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to fetch breed catalog for {}: {}", match_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch breed catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Scoring {} catalog breeds for {}", records.len(), match_id);

    // Normalize preferences and resolve catalog rows, then rank
    let preferences = req.to_preferences();
    let breeds: Vec<BreedProfile> = records.into_iter().map(resolve_breed).collect();

    let outcome = state.matcher.rank_breeds(&preferences, breeds, limit);

    // Attach available puppy listings for the top breeds (best-effort)
    let puppies = attach_puppies(&state, &outcome.ranked).await;

    let response = MatchResponse {
        breeds: outcome.ranked,
        puppies,
        total_breeds_scored: outcome.total_scored,
    };

    tracing::info!(
        "Returning {} breeds and {} puppies for {} (scored {})",
        response.breeds.len(),
        response.puppies.len(),
        match_id,
        response.total_breeds_scored
    );

    HttpResponse::Ok().json(response)
}

/// Fetch the breed catalog, trying the cache before the platform API
async fn fetch_catalog(
    state: &web::Data<AppState>,
) -> Result<Vec<BreedRecord>, crate::services::CatalogError> {
    let key = CacheKey::breed_catalog();

    if let Ok(records) = state.cache.get::<Vec<BreedRecord>>(&key).await {
        return Ok(records);
    }

    let records = state.catalog.list_breeds().await?;

    if let Err(e) = state.cache.set(&key, &records).await {
        tracing::warn!("Failed to cache breed catalog: {}", e);
    }

    Ok(records)
}

/// Match available puppy listings against the ranked breeds and annotate
/// each listing with the originating breed's score and reasons.
///
/// Listing lookup is best-effort: a platform failure logs a warning and
/// yields an empty list rather than failing the match request.
async fn attach_puppies(state: &web::Data<AppState>, ranked: &[ScoredBreed]) -> Vec<PuppyMatch> {
    if ranked.is_empty() {
        return vec![];
    }

    let breed_names: Vec<String> = ranked.iter().map(|breed| breed.name.clone()).collect();

    let listings = match state.catalog.list_available_puppies(&breed_names).await {
        Ok(listings) => listings,
        Err(e) => {
            tracing::warn!("Failed to fetch puppy listings, returning none: {}", e);
            return vec![];
        }
    };

    listings
        .into_iter()
        .filter_map(|listing| {
            ranked
                .iter()
                .find(|breed| breed_name_matches(breed, &listing.breed))
                .map(|breed| PuppyMatch {
                    id: listing.id,
                    name: listing.name,
                    breed: listing.breed.clone(),
                    breeder_name: listing.breeder_name,
                    price: listing.price,
                    image: listing.image,
                    location: listing.location,
                    match_score: breed.score,
                    match_reasons: breed.match_reasons.clone(),
                })
        })
        .collect()
}

/// Case-insensitive match of a listing's breed against a ranked breed's
/// name or alternate names
fn breed_name_matches(breed: &ScoredBreed, listing_breed: &str) -> bool {
    breed.name.eq_ignore_ascii_case(listing_breed)
        || breed
            .alt_names
            .iter()
            .any(|alt| alt.eq_ignore_ascii_case(listing_breed))
}
