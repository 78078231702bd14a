//! Text forms of a criteria list.
//!
//! The durable form is a JSON array of `{id, field, direction}` objects. The
//! shareable form is the same JSON, percent-encoded so it can sit in a query
//! string as the value of the `sort` parameter.

use crate::domain::sort::{SortCriteria, SortCriterion};

/// Serializes `criteria` to its durable JSON form.
pub fn encode_criteria(criteria: &SortCriteria) -> String {
    // Plain strings and unit enums only; this cannot fail.
    serde_json::to_string(criteria).unwrap_or_else(|_| "[]".to_string())
}

/// Parses the durable JSON form. Anything that is not a list of well-formed
/// criteria yields `None`.
pub fn decode_criteria(text: &str) -> Option<SortCriteria> {
    match serde_json::from_str::<Vec<SortCriterion>>(text) {
        Ok(list) => Some(SortCriteria::from_criteria(list)),
        Err(err) => {
            log::debug!("Ignoring unreadable sort state: {err}");
            None
        }
    }
}

/// Percent-encoded form for the `sort` query parameter.
pub fn encode_share_param(criteria: &SortCriteria) -> String {
    urlencoding::encode(&encode_criteria(criteria)).into_owned()
}

/// Reads a `sort` parameter value.
///
/// The web framework usually hands over the value already decoded, so it is
/// parsed as is first. Only when that fails is it percent-decoded once more.
pub fn decode_share_param(value: &str) -> Option<SortCriteria> {
    if let Ok(list) = serde_json::from_str::<Vec<SortCriterion>>(value) {
        return Some(SortCriteria::from_criteria(list));
    }
    match urlencoding::decode(value) {
        Ok(decoded) => decode_criteria(&decoded),
        Err(err) => {
            log::debug!("Ignoring undecodable sort parameter: {err}");
            None
        }
    }
}
