// src/handlers/params.rs
// DOCUMENTATION: Request parameter extraction
// PURPOSE: Uniform body-first parameter lookup shared by all routes

use serde_json::Value;
use std::collections::HashMap;

/// Parameters of one façade request
/// DOCUMENTATION: Built per request from the raw body bytes and the parsed
/// query string. The body is parsed as JSON silently; a malformed or absent
/// body yields no parameters
pub struct RequestParams {
    body: Option<Value>,
    query: HashMap<String, String>,
}

impl RequestParams {
    pub fn from_parts(payload: &[u8], query: HashMap<String, String>) -> Self {
        let body = serde_json::from_slice(payload).ok();
        Self { body, query }
    }

    /// Look up a string parameter.
    ///
    /// Only the JSON body is consulted. The query string is logged for
    /// diagnostics but never read back, and `default` is accepted without
    /// ever being returned; an absent key is always `None`.
    pub fn get(&self, name: &str, _default: Option<&str>) -> Option<String> {
        log::debug!("Getting request param: {}", name);
        log::debug!("request body: {:?}", self.body);
        log::debug!("request query: {:?}", self.query);

        self.body
            .as_ref()
            .and_then(|body| body.get(name))
            .and_then(value_as_string)
    }

    /// Look up an integer parameter, body-only like `get`.
    pub fn get_usize(&self, name: &str) -> Option<usize> {
        log::debug!("Getting request param: {}", name);

        self.body
            .as_ref()
            .and_then(|body| body.get(name))
            .and_then(Value::as_u64)
            .map(|n| n as usize)
    }
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
