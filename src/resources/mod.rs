//! Resource Access modules.
//!
//! One borrowed view per backend resource, obtained from the client
//! (`api.courses()`, `api.grades()`, ...). Reads come back typed through the
//! envelope contract; writes return the backend's response body untouched.
//! Nothing here validates input: the backend does, and its rejections surface as
//! `ApiError::Rejected`.

use std::borrow::Cow;

pub mod attendance;
pub mod auth;
pub mod certificates;
pub mod courses;
pub mod dashboard;
pub mod documents;
pub mod exams;
pub mod grades;
pub mod lessons;
pub mod messages;
pub mod search;
pub mod spots;
pub mod users;

/// Encodes an id or code for use as a single path segment.
pub(crate) fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Query pairs for the set fields only, in order.
pub(crate) fn query_pairs<'a>(fields: &[(&'a str, Option<&str>)]) -> Vec<(&'a str, String)> {
    fields
        .iter()
        .filter_map(|(key, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| (*key, v.to_string()))
        })
        .collect()
}
