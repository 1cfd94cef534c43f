// src/models/address.rs
// DOCUMENTATION: Data structures for address validation
// PURPOSE: Defines the pass-through result shape returned to clients

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one address-validation call
/// DOCUMENTATION: `response` carries the upstream JSON verbatim on HTTP 200
/// and the empty string otherwise; `status` is the raw upstream status code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressValidationResult {
    pub response: Value,
    pub status: u16,
}

impl AddressValidationResult {
    /// Result for a non-200 upstream status: empty-string body, real code
    pub fn rejected(status: u16) -> Self {
        Self {
            response: Value::String(String::new()),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_shape() {
        let result = AddressValidationResult::rejected(403);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["response"], "");
        assert_eq!(value["status"], 403);
    }
}
