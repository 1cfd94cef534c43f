// src/errors.rs
// DOCUMENTATION: Custom error types
// PURPOSE: Centralized error handling for upstream API failures

use thiserror::Error;

/// Errors raised while talking to the upstream Google APIs.
///
/// These never escape to the HTTP surface: the service layer degrades every
/// failure to an empty result list, so façade routes always answer 200.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("External API error: {0}")]
    ExternalApiError(String),
}
