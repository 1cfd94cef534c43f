// src/handlers/search.rs
// DOCUMENTATION: HTTP handlers for the façade routes
// PURPOSE: Parse requests, call services, return {"results": ...} bodies

use crate::handlers::params::RequestParams;
use crate::services::{
    GoogleApiClient, SearchService, DEFAULT_ACTIVITY, DEFAULT_NUM_RESULTS, DEFAULT_PAGE_SIZE,
};
use actix_web::{web, HttpResponse, Responder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::collections::HashMap;

/// GET/POST /tourist_attractions
/// Fixed-activity search for the caller's city
pub async fn tourist_attractions(
    client: web::Data<GoogleApiClient>,
    query: web::Query<HashMap<String, String>>,
    payload: web::Bytes,
) -> impl Responder {
    let params = RequestParams::from_parts(&payload, query.into_inner());
    let city = params.get("city", None);

    let results = SearchService::search_places(
        client.get_ref(),
        city.as_deref(),
        DEFAULT_ACTIVITY,
        DEFAULT_PAGE_SIZE,
    )
    .await;

    HttpResponse::Ok().json(json!({ "results": results }))
}

/// GET/POST /places_search
/// Free-form search: city and activity both from the caller
pub async fn places_search(
    client: web::Data<GoogleApiClient>,
    query: web::Query<HashMap<String, String>>,
    payload: web::Bytes,
) -> impl Responder {
    let params = RequestParams::from_parts(&payload, query.into_inner());
    let city = params.get("city", None);
    let activity = params.get("activity", None).unwrap_or_default();

    log::debug!("Searching {} in {:?}", activity, city);

    let results = SearchService::search_places(
        client.get_ref(),
        city.as_deref(),
        &activity,
        DEFAULT_PAGE_SIZE,
    )
    .await;

    HttpResponse::Ok().json(json!({ "results": results }))
}

/// POST /address_validation
/// Pass-through address validation
pub async fn address_validation(
    client: web::Data<GoogleApiClient>,
    query: web::Query<HashMap<String, String>>,
    payload: web::Bytes,
) -> impl Responder {
    let params = RequestParams::from_parts(&payload, query.into_inner());
    let region_code = params.get("regionCode", None);
    let locality = params.get("locality", None);
    let address_lines = params.get("addressLines", None);

    let results = SearchService::validate_address(
        client.get_ref(),
        region_code.as_deref(),
        locality.as_deref(),
        address_lines.as_deref(),
    )
    .await;

    HttpResponse::Ok().json(json!({ "results": results }))
}

/// GET/POST /hotel_search
/// Fixed-activity hotel search; num_results overrides the page size
pub async fn hotel_search(
    client: web::Data<GoogleApiClient>,
    query: web::Query<HashMap<String, String>>,
    payload: web::Bytes,
) -> impl Responder {
    let params = RequestParams::from_parts(&payload, query.into_inner());
    let city = params.get("city", None);
    let num_results = params.get_usize("num_results").unwrap_or(DEFAULT_NUM_RESULTS);

    let results =
        SearchService::search_places(client.get_ref(), city.as_deref(), "hotels", num_results)
            .await;

    HttpResponse::Ok().json(json!({ "results": results }))
}

/// GET/POST /places_search_tool
/// Multi-preference search: one search per comma-separated preference,
/// combined, shuffled and truncated to page_size
pub async fn places_search_tool(
    client: web::Data<GoogleApiClient>,
    query: web::Query<HashMap<String, String>>,
    payload: web::Bytes,
) -> impl Responder {
    let params = RequestParams::from_parts(&payload, query.into_inner());
    let city = params.get("city", None);
    let place = params.get("place", None);
    let preferences = params.get("preferences", Some(DEFAULT_ACTIVITY));
    let page_size = params.get_usize("page_size").unwrap_or(DEFAULT_PAGE_SIZE);

    // Fresh entropy per request; the result ordering is deliberately random
    let mut rng = StdRng::from_entropy();
    let results = SearchService::multi_preference_search(
        client.get_ref(),
        city.as_deref(),
        place.as_deref(),
        preferences.as_deref(),
        page_size,
        &mut rng,
    )
    .await;

    HttpResponse::Ok().json(json!({ "results": results }))
}

/// Configuration for the façade routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/tourist_attractions", web::get().to(tourist_attractions))
        .route("/tourist_attractions", web::post().to(tourist_attractions))
        .route("/places_search", web::get().to(places_search))
        .route("/places_search", web::post().to(places_search))
        .route("/address_validation", web::post().to(address_validation))
        .route("/hotel_search", web::get().to(hotel_search))
        .route("/hotel_search", web::post().to(hotel_search))
        .route("/places_search_tool", web::get().to(places_search_tool))
        .route("/places_search_tool", web::post().to(places_search_tool));
}
