// src/services/search_service.rs
// DOCUMENTATION: Business logic for the façade routes
// PURPOSE: Shape upstream responses, degrade failures to empty results,
// and run the multi-preference fan-out

use crate::models::{AddressValidationResult, PlaceSummary};
use crate::services::GoogleApiClient;
use rand::seq::SliceRandom;
use rand::Rng;

/// Default number of places returned per search
pub const DEFAULT_PAGE_SIZE: usize = 3;
/// Default number of places returned by the hotel search
pub const DEFAULT_NUM_RESULTS: usize = 6;
/// Default activity when the caller supplies none
pub const DEFAULT_ACTIVITY: &str = "tourist attractions";

pub struct SearchService;

impl SearchService {
    /// Build the free-text query sent to the text-search API.
    /// An absent city renders as the empty string.
    pub fn build_text_query(activity: &str, city: Option<&str>) -> String {
        format!("{} in {}", activity, city.unwrap_or(""))
    }

    /// Combine place and city into one location query.
    /// Both must be present and non-empty to combine; otherwise the city
    /// alone is used.
    pub fn build_city_query(place: Option<&str>, city: Option<&str>) -> Option<String> {
        match (place, city) {
            (Some(p), Some(c)) if !p.is_empty() && !c.is_empty() => Some(format!("{} {}", p, c)),
            _ => city.map(str::to_string),
        }
    }

    /// Per-activity result count for the fan-out: round(page_size / n) + 1
    pub fn per_activity_page_size(page_size: usize, activity_count: usize) -> usize {
        (page_size as f64 / activity_count as f64).round() as usize + 1
    }

    /// Search places and reduce each hit to a PlaceSummary
    /// DOCUMENTATION: Returns at most `page_size` entries. Any upstream
    /// failure is logged and degrades to an empty list, so the caller cannot
    /// distinguish "no results" from "request failed"
    pub async fn search_places(
        client: &GoogleApiClient,
        city: Option<&str>,
        activity: &str,
        page_size: usize,
    ) -> Vec<PlaceSummary> {
        let text_query = Self::build_text_query(activity, city);
        log::info!("Searching places: {}", text_query);

        match client.text_search(&text_query).await {
            Ok(places) => places
                .into_iter()
                .take(page_size)
                .map(|p| p.into_summary())
                .collect(),
            Err(e) => {
                log::error!("Error fetching places: {}", e);
                Vec::new()
            }
        }
    }

    /// Validate an address and wrap the outcome in a result list
    /// DOCUMENTATION: A non-200 upstream status still yields one populated
    /// entry (empty-string response, real status); a transport failure
    /// yields an empty list. The two shapes are intentionally distinct
    pub async fn validate_address(
        client: &GoogleApiClient,
        region_code: Option<&str>,
        locality: Option<&str>,
        address_line: Option<&str>,
    ) -> Vec<AddressValidationResult> {
        match client
            .validate_address(region_code, locality, address_line)
            .await
        {
            Ok(result) => vec![result],
            Err(e) => {
                log::error!("Error validating address: {}", e);
                Vec::new()
            }
        }
    }

    /// Fan out one search per preference, then shuffle and truncate
    /// DOCUMENTATION: Splits the comma-separated preferences (pieces are not
    /// trimmed), searches each sequentially with a per-activity page size of
    /// round(page_size / n) + 1, concatenates, shuffles with the caller's
    /// RNG and truncates to `page_size`
    pub async fn multi_preference_search<R: Rng>(
        client: &GoogleApiClient,
        city: Option<&str>,
        place: Option<&str>,
        preferences: Option<&str>,
        page_size: usize,
        rng: &mut R,
    ) -> Vec<PlaceSummary> {
        let city_query = Self::build_city_query(place, city);
        log::debug!("city_query: {:?}", city_query);

        let preferences = preferences.unwrap_or(DEFAULT_ACTIVITY);
        let activities: Vec<&str> = preferences.split(',').collect();
        let per_activity = Self::per_activity_page_size(page_size, activities.len());

        let mut combined = Vec::new();
        for activity in &activities {
            let mut batch =
                Self::search_places(client, city_query.as_deref(), activity, per_activity).await;
            combined.append(&mut batch);
        }

        combined.shuffle(rng);
        combined.truncate(page_size);
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use httpmock::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn test_client(base_url: &str) -> GoogleApiClient {
        let config = Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8080,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            google_places_api_key: "test_key".to_string(),
            places_base_url: base_url.to_string(),
            address_validation_base_url: base_url.to_string(),
        };
        GoogleApiClient::from_config(&config)
    }

    fn place_body(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "formatted_address": format!("{} street", name),
            "rating": 4.0,
            "user_ratings_total": 10,
            "place_id": format!("id_{}", name)
        })
    }

    #[test]
    fn test_build_text_query() {
        assert_eq!(
            SearchService::build_text_query("hotels", Some("Paris")),
            "hotels in Paris"
        );
        assert_eq!(SearchService::build_text_query("hotels", None), "hotels in ");
    }

    #[test]
    fn test_build_city_query() {
        assert_eq!(
            SearchService::build_city_query(Some("Hilton"), Some("Paris")),
            Some("Hilton Paris".to_string())
        );
        assert_eq!(
            SearchService::build_city_query(None, Some("Paris")),
            Some("Paris".to_string())
        );
        assert_eq!(SearchService::build_city_query(Some("Hilton"), None), None);
        // Empty strings do not combine
        assert_eq!(
            SearchService::build_city_query(Some(""), Some("Paris")),
            Some("Paris".to_string())
        );
    }

    #[test]
    fn test_per_activity_page_size() {
        assert_eq!(SearchService::per_activity_page_size(4, 2), 3);
        assert_eq!(SearchService::per_activity_page_size(3, 1), 4);
        assert_eq!(SearchService::per_activity_page_size(3, 2), 3);
        assert_eq!(SearchService::per_activity_page_size(6, 3), 3);
    }

    #[tokio::test]
    async fn test_search_places_truncates_to_page_size() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/textsearch/json")
                .query_param("query", "museums in Berlin");
            then.status(200).json_body(json!({
                "results": [
                    place_body("a"), place_body("b"), place_body("c"),
                    place_body("d"), place_body("e")
                ]
            }));
        });

        let client = test_client(&server.base_url());
        let results = SearchService::search_places(&client, Some("Berlin"), "museums", 2).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name.as_deref(), Some("a"));
        assert_eq!(results[0].address.as_deref(), Some("a street"));
        assert_eq!(results[0].place_id.as_deref(), Some("id_a"));
    }

    #[tokio::test]
    async fn test_search_places_failure_degrades_to_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/textsearch/json");
            then.status(500);
        });

        let client = test_client(&server.base_url());
        let results = SearchService::search_places(&client, Some("Berlin"), "museums", 3).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_validate_address_transport_error_is_empty_list() {
        // Nothing listens on this address; the connection is refused
        let client = test_client("http://127.0.0.1:1");
        let results =
            SearchService::validate_address(&client, Some("US"), None, Some("somewhere")).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_validate_address_non_200_is_single_entry() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1:validateAddress");
            then.status(403).json_body(json!({"error": "forbidden"}));
        });

        let client = test_client(&server.base_url());
        let results =
            SearchService::validate_address(&client, Some("US"), Some("Austin"), Some("x")).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, 403);
        assert_eq!(results[0].response, json!(""));
    }

    #[tokio::test]
    async fn test_multi_preference_search_fans_out_and_truncates() {
        let server = MockServer::start();
        let hotels = server.mock(|when, then| {
            when.method(GET)
                .path("/textsearch/json")
                .query_param("query", "hotels in Paris");
            then.status(200).json_body(json!({
                "results": [place_body("h1"), place_body("h2"), place_body("h3")]
            }));
        });
        let restaurants = server.mock(|when, then| {
            when.method(GET)
                .path("/textsearch/json")
                .query_param("query", "restaurants in Paris");
            then.status(200).json_body(json!({
                "results": [place_body("r1"), place_body("r2"), place_body("r3")]
            }));
        });

        let client = test_client(&server.base_url());
        let mut rng = StdRng::seed_from_u64(42);
        let results = SearchService::multi_preference_search(
            &client,
            Some("Paris"),
            None,
            Some("hotels,restaurants"),
            4,
            &mut rng,
        )
        .await;

        hotels.assert();
        restaurants.assert();
        assert_eq!(results.len(), 4);
        for summary in &results {
            let name = summary.name.as_deref().unwrap();
            assert!(name.starts_with('h') || name.starts_with('r'));
        }
    }

    #[tokio::test]
    async fn test_multi_preference_search_is_deterministic_per_seed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/textsearch/json");
            then.status(200).json_body(json!({
                "results": [
                    place_body("a"), place_body("b"), place_body("c"), place_body("d")
                ]
            }));
        });

        let client = test_client(&server.base_url());

        let mut first_rng = StdRng::seed_from_u64(7);
        let first = SearchService::multi_preference_search(
            &client,
            Some("Rome"),
            None,
            Some("parks"),
            3,
            &mut first_rng,
        )
        .await;

        let mut second_rng = StdRng::seed_from_u64(7);
        let second = SearchService::multi_preference_search(
            &client,
            Some("Rome"),
            None,
            Some("parks"),
            3,
            &mut second_rng,
        )
        .await;

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[tokio::test]
    async fn test_multi_preference_search_does_not_trim_pieces() {
        let server = MockServer::start();
        let spaced = server.mock(|when, then| {
            when.method(GET)
                .path("/textsearch/json")
                .query_param("query", " museums in Madrid");
            then.status(200).json_body(json!({"results": [place_body("m1")]}));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/textsearch/json")
                .query_param("query", "parks in Madrid");
            then.status(200).json_body(json!({"results": [place_body("p1")]}));
        });

        let client = test_client(&server.base_url());
        let mut rng = StdRng::seed_from_u64(0);
        let results = SearchService::multi_preference_search(
            &client,
            Some("Madrid"),
            None,
            Some("parks, museums"),
            4,
            &mut rng,
        )
        .await;

        spaced.assert();
        assert_eq!(results.len(), 2);
    }
}
