//! Response envelope normalization.
//!
//! The backend wraps payloads inconsistently. The same list can arrive as
//! `{ "success": true, "data": { "data": [...] } }`, as
//! `{ "success": true, "data": [...] }` or as a bare array. Every resource call goes
//! through these functions so the unwrap logic lives in one place.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::User;

/// unwrap_payload
///
/// Peels at most two `data` layers. Bodies without a `data` key are returned as-is.
pub fn unwrap_payload(body: Value) -> Value {
    match body {
        Value::Object(mut outer) if outer.contains_key("data") => {
            match outer.remove("data").unwrap_or(Value::Null) {
                Value::Object(mut inner) if inner.contains_key("data") => {
                    inner.remove("data").unwrap_or(Value::Null)
                }
                data => data,
            }
        }
        other => other,
    }
}

/// unwrap_list
///
/// Lists never fail. A payload that is not an array yields an empty list; elements
/// that do not match `T` are dropped. Both cases are logged.
pub fn unwrap_list<T: DeserializeOwned>(body: Value) -> Vec<T> {
    match unwrap_payload(body) {
        Value::Array(items) => {
            let total = items.len();
            let parsed: Vec<T> = items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<T>(item) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!("Dropping malformed list element: {}", e);
                        None
                    }
                })
                .collect();
            if parsed.len() != total {
                tracing::warn!("Kept {} of {} list elements", parsed.len(), total);
            }
            parsed
        }
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(
                "Expected a list payload, got {}; treating as empty",
                kind_of(&other)
            );
            Vec::new()
        }
    }
}

/// unwrap_item
///
/// Single records are strict: a payload that does not match `T` is an
/// `ApiError::Decode`.
pub fn unwrap_item<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(unwrap_payload(body))?)
}

/// unwrap_user
///
/// Finds the user in an auth response: `body.user`, then `body.data.user`, then the
/// unwrapped payload itself. A user without an id is not a user.
pub fn unwrap_user(body: Value) -> Option<User> {
    if let Some(user) = body.get("user").and_then(parse_user) {
        return Some(user);
    }
    if let Some(user) = body
        .get("data")
        .and_then(|data| data.get("user"))
        .and_then(parse_user)
    {
        return Some(user);
    }
    parse_user(&unwrap_payload(body))
}

fn parse_user(value: &Value) -> Option<User> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value::<User>(value.clone())
        .ok()
        .filter(|user| !user.id.is_empty())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
