// src/services/google_client.rs
// DOCUMENTATION: Google API client
// PURPOSE: Handle communication with the Places text-search and Address
// Validation APIs

use crate::config::Config;
use crate::errors::GatewayError;
use crate::models::{AddressValidationResult, PlaceSummary};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Google API client
/// DOCUMENTATION: Holds the shared HTTP client, API key and upstream base
/// URLs. Built once at startup and injected into handlers
pub struct GoogleApiClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key (also used for address validation)
    api_key: String,
    /// Base URL for the Places text-search API
    places_base_url: String,
    /// Base URL for the Address Validation API
    address_validation_base_url: String,
}

/// Response from the Places Text Search API
/// DOCUMENTATION: Only the results array is consumed; a missing array
/// decodes as empty
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub results: Vec<TextSearchPlace>,
}

/// Individual place from the Text Search API
/// DOCUMENTATION: Every field is optional; absent fields stay None
#[derive(Debug, Clone, Deserialize)]
pub struct TextSearchPlace {
    /// Place name
    pub name: Option<String>,
    /// Formatted address
    pub formatted_address: Option<String>,
    /// Rating (0-5)
    pub rating: Option<f64>,
    /// Number of user ratings
    pub user_ratings_total: Option<i64>,
    /// Google's unique place identifier
    pub place_id: Option<String>,
}

impl TextSearchPlace {
    /// Reduce an upstream place to the five fields clients consume
    pub fn into_summary(self) -> PlaceSummary {
        PlaceSummary {
            name: self.name,
            address: self.formatted_address,
            rating: self.rating,
            user_ratings_total: self.user_ratings_total,
            place_id: self.place_id,
        }
    }
}

/// JSON payload for the address-validation call
#[derive(Debug, Serialize)]
struct AddressPayload<'a> {
    address: AddressBody<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressBody<'a> {
    region_code: Option<&'a str>,
    locality: Option<&'a str>,
    /// The single provided line wrapped as a one-element list
    address_lines: [Option<&'a str>; 1],
}

impl GoogleApiClient {
    /// Create a client from application configuration
    /// DOCUMENTATION: Base URLs come from config so tests can substitute a
    /// local mock server
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.google_places_api_key.clone(),
            places_base_url: config.places_base_url.clone(),
            address_validation_base_url: config.address_validation_base_url.clone(),
        }
    }

    /// Perform a free-text place search
    /// DOCUMENTATION: Issues a single GET against the text-search endpoint
    ///
    /// # Arguments
    /// * `text_query` - Free-text query, e.g. "hotels in Paris"
    ///
    /// # Returns
    /// Raw upstream places; a non-2xx status or transport failure is an error
    pub async fn text_search(&self, text_query: &str) -> Result<Vec<TextSearchPlace>, GatewayError> {
        let url = format!("{}/textsearch/json", self.places_base_url);

        let mut params = HashMap::new();
        params.insert("query", text_query.to_string());
        params.insert("key", self.api_key.clone());

        log::debug!("Places text search: query={}", text_query);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Places API request failed: {}", e);
                GatewayError::ExternalApiError(format!("Request failed: {}", e))
            })?
            .error_for_status()
            .map_err(|e| {
                log::error!("Places API returned error status: {}", e);
                GatewayError::ExternalApiError(format!("Status error: {}", e))
            })?;

        let api_response: TextSearchResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Places API response: {}", e);
            GatewayError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        Ok(api_response.results)
    }

    /// Validate a postal address
    /// DOCUMENTATION: Posts the address payload and passes the upstream
    /// verdict through
    ///
    /// # Arguments
    /// * `region_code` - CLDR region code, e.g. "US"
    /// * `locality` - City or locality name
    /// * `address_line` - Single free-form address line
    ///
    /// # Returns
    /// The upstream JSON with status 200, or an empty-string response
    /// carrying the real status code. Transport failures are errors
    pub async fn validate_address(
        &self,
        region_code: Option<&str>,
        locality: Option<&str>,
        address_line: Option<&str>,
    ) -> Result<AddressValidationResult, GatewayError> {
        let url = format!("{}/v1:validateAddress", self.address_validation_base_url);

        let payload = AddressPayload {
            address: AddressBody {
                region_code,
                locality,
                address_lines: [address_line],
            },
        };

        log::debug!(
            "Address validation: region_code={:?}, locality={:?}",
            region_code,
            locality
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Address Validation API request failed: {}", e);
                GatewayError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Address Validation API returned status {}", status);
            return Ok(AddressValidationResult::rejected(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(|e| {
            log::error!("Failed to parse Address Validation response: {}", e);
            GatewayError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        Ok(AddressValidationResult {
            response: body,
            status: status.as_u16(),
        })
    }
}
