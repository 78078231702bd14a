//! Multi-criterion ordering of client rows.
//!
//! Values are extracted per [`SortField`] into a [`SortValue`], compared
//! criterion by criterion, and the first criterion that discriminates decides
//! the order. Sorting is stable, so rows that tie on every criterion keep the
//! order they came in.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::client::Client;
use crate::domain::sort::{SortCriteria, SortField};

/// Stand-in for timestamps that cannot be parsed. Sorts after every real
/// date when ascending.
pub const UNPARSEABLE_TIMESTAMP: i64 = i64::MAX;

/// Comparable projection of a single client field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortValue {
    Number(i64),
    Text(String),
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => locale_compare(a, b),
            // A field always yields the same variant; keep the order total anyway.
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reads `field` from `client` as a comparable value.
pub fn extract_value(client: &Client, field: SortField) -> SortValue {
    match field {
        SortField::CreatedAt => SortValue::Number(
            client
                .created_at
                .epoch_millis()
                .unwrap_or(UNPARSEABLE_TIMESTAMP),
        ),
        SortField::UpdatedAt => SortValue::Number(
            client
                .updated_at
                .epoch_millis()
                .unwrap_or(UNPARSEABLE_TIMESTAMP),
        ),
        SortField::Id => SortValue::Number(i64::from(client.id.get())),
        SortField::Status => SortValue::Text(client.status.as_str().to_string()),
        SortField::Name => SortValue::Text(client.name.as_str().to_string()),
        SortField::Email => SortValue::Text(client.email.as_str().to_string()),
    }
}

/// Collation in three levels: base letters ignoring accents and case, then
/// accents, then case with lower case first. Keeps `"Émile"` next to
/// `"Emile"` rather than after `"Zed"`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

/// Three-way comparison of two clients under `criteria`.
pub fn compare_clients(a: &Client, b: &Client, criteria: &SortCriteria) -> Ordering {
    for criterion in criteria {
        let ordering = extract_value(a, criterion.field).cmp(&extract_value(b, criterion.field));
        if ordering != Ordering::Equal {
            return criterion.direction.apply(ordering);
        }
    }
    Ordering::Equal
}

/// Stable in-place sort. An empty criteria list leaves the slice untouched.
pub fn sort_clients(clients: &mut [Client], criteria: &SortCriteria) {
    if criteria.is_empty() {
        return;
    }
    clients.sort_by(|a, b| compare_clients(a, b, criteria));
}
