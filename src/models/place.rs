// src/models/place.rs
// DOCUMENTATION: Core data structures for place search
// PURPOSE: Defines the reduced place shape returned to clients

use serde::{Deserialize, Serialize};

/// Reduced representation of one text-search result
/// DOCUMENTATION: Exactly the five fields clients consume; anything the
/// upstream omits stays `None` and serializes as JSON null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    /// Place name
    pub name: Option<String>,

    /// Formatted street address
    pub address: Option<String>,

    /// Rating (0-5)
    pub rating: Option<f64>,

    /// Number of user ratings
    pub user_ratings_total: Option<i64>,

    /// Google's unique place identifier
    pub place_id: Option<String>,
}
