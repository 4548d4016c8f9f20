use crate::models::{BreedRecord, PuppyListing};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the platform catalog API
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// HomeForPup platform API client
///
/// Handles all communication with the platform backend including:
/// - Fetching the breed catalog
/// - Fetching available puppy listings for matched breeds
pub struct CatalogClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch the full breed catalog
    pub async fn list_breeds(&self) -> Result<Vec<BreedRecord>, CatalogError> {
        let url = format!("{}/breeds?limit=500", self.base_url.trim_end_matches('/'));

        tracing::debug!("Fetching breed catalog from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch breed catalog: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .get("breeds")
            .and_then(|b| b.as_array())
            .ok_or_else(|| CatalogError::InvalidResponse("Missing breeds array".into()))?;

        // Rows that fail to parse are skipped rather than failing the catalog
        let breeds: Vec<BreedRecord> = rows
            .iter()
            .filter_map(|row| match serde_json::from_value(row.clone()) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!("Skipping unparseable breed row: {}", e);
                    None
                }
            })
            .collect();

        if breeds.is_empty() && !rows.is_empty() {
            return Err(CatalogError::InvalidResponse(
                "No breed row could be parsed".into(),
            ));
        }

        tracing::debug!("Fetched {} breeds from catalog", breeds.len());

        Ok(breeds)
    }

    /// Fetch available puppy listings for the given breed names
    pub async fn list_available_puppies(
        &self,
        breed_names: &[String],
    ) -> Result<Vec<PuppyListing>, CatalogError> {
        let joined_names = breed_names.join(",");
        let breeds_param = urlencoding::encode(&joined_names);
        let url = format!(
            "{}/puppies?status=available&breeds={}",
            self.base_url.trim_end_matches('/'),
            breeds_param
        );

        tracing::debug!("Fetching available puppies for {} breeds", breed_names.len());

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch puppy listings: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .get("puppies")
            .and_then(|p| p.as_array())
            .ok_or_else(|| CatalogError::InvalidResponse("Missing puppies array".into()))?;

        let puppies: Vec<PuppyListing> = rows
            .iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect();

        tracing::debug!("Fetched {} available puppies", puppies.len());

        Ok(puppies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_client_creation() {
        let client = CatalogClient::new(
            "https://api.homeforpup.test/v1".to_string(),
            "test_key".to_string(),
        );

        assert_eq!(client.base_url, "https://api.homeforpup.test/v1");
        assert_eq!(client.api_key, "test_key");
    }

    #[tokio::test]
    async fn test_list_breeds_parses_catalog() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/breeds")
            .match_query(mockito::Matcher::UrlEncoded("limit".into(), "500".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "breeds": [
                        {
                            "id": "golden-retriever",
                            "name": "Golden Retriever",
                            "breedGroup": "Sporting",
                            "size": "Large",
                            "breedType": "purebred"
                        },
                        {
                            "id": "chihuahua",
                            "name": "Chihuahua",
                            "breedGroup": "Toy",
                            "size": "Toy"
                        }
                    ],
                    "total": 2
                }"#,
            )
            .create_async()
            .await;

        let client = CatalogClient::new(server.url(), "test_key".to_string());
        let breeds = client.list_breeds().await.unwrap();

        mock.assert_async().await;
        assert_eq!(breeds.len(), 2);
        assert_eq!(breeds[0].name, "Golden Retriever");
        assert_eq!(breeds[0].breed_group, "Sporting");
        // breedType falls back to purebred when the catalog omits it
        assert_eq!(breeds[1].breed_type, "purebred");
    }

    #[tokio::test]
    async fn test_list_breeds_skips_bad_rows() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/breeds")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "breeds": [
                        {"id": "ok", "name": "Good Row", "breedGroup": "Hound", "size": "Medium"},
                        {"name": 42}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = CatalogClient::new(server.url(), "test_key".to_string());
        let breeds = client.list_breeds().await.unwrap();

        assert_eq!(breeds.len(), 1);
        assert_eq!(breeds[0].id, "ok");
    }

    #[tokio::test]
    async fn test_list_breeds_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/breeds")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let client = CatalogClient::new(server.url(), "bad_key".to_string());
        let result = client.list_breeds().await;

        assert!(matches!(result, Err(CatalogError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_list_available_puppies() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/puppies")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "puppies": [
                        {
                            "id": "pup_1",
                            "name": "Daisy",
                            "breed": "Golden Retriever",
                            "breederName": "Sunny Acres",
                            "price": 1800.0
                        }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = CatalogClient::new(server.url(), "test_key".to_string());
        let puppies = client
            .list_available_puppies(&["Golden Retriever".to_string()])
            .await
            .unwrap();

        assert_eq!(puppies.len(), 1);
        assert_eq!(puppies[0].breed, "Golden Retriever");
        assert_eq!(puppies[0].breeder_name.as_deref(), Some("Sunny Acres"));
    }
}
