//! Sort criteria and the pure operations that edit them.
//!
//! A [`SortCriteria`] list is never mutated in place: every operation returns
//! a new list, leaving the previous snapshot untouched.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{CriterionId, TypeConstraintError};

/// Attribute of a client row that can participate in sorting.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Email,
    CreatedAt,
    UpdatedAt,
    Id,
    Status,
}

impl SortField {
    /// Every field, in declaration order.
    pub const ALL: [SortField; 6] = [
        SortField::Name,
        SortField::Email,
        SortField::CreatedAt,
        SortField::UpdatedAt,
        SortField::Id,
        SortField::Status,
    ];

    /// Wire name, as used in the persisted state.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::Id => "id",
            SortField::Status => "status",
        }
    }

    /// Column label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Client Name",
            SortField::Email => "Email",
            SortField::CreatedAt => "Created At",
            SortField::UpdatedAt => "Updated At",
            SortField::Id => "Client ID",
            SortField::Status => "Status",
        }
    }

    /// Text fields get `A-Z` style direction labels, the rest `Low→High`.
    pub fn is_alphabetical(self) -> bool {
        matches!(self, SortField::Name | SortField::Email | SortField::Status)
    }

    /// Recency fields start out "most recent first".
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortField::CreatedAt | SortField::UpdatedAt => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown sort field `{s}`")))
    }
}

/// Ordering direction of a single criterion.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(field, direction)` rule with a stable identity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortCriterion {
    pub id: CriterionId,
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn new(id: CriterionId, field: SortField, direction: SortDirection) -> Self {
        Self {
            id,
            field,
            direction,
        }
    }
}

/// Capability producing fresh criterion identities.
///
/// Implementations must not hand out the same identity twice within a session.
pub trait IdentitySource {
    fn new_identity(&self, field: SortField) -> CriterionId;
}

/// Random identities of the form `<field>-<uuid v4>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdentitySource;

impl IdentitySource for UuidIdentitySource {
    fn new_identity(&self, field: SortField) -> CriterionId {
        CriterionId::new(format!("{}-{}", field.as_str(), Uuid::new_v4()))
    }
}

/// Deterministic identities of the form `<field>-<n>`; handy in tests.
#[derive(Debug, Default)]
pub struct SequentialIdentitySource {
    next: AtomicU64,
}

impl SequentialIdentitySource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentitySource for SequentialIdentitySource {
    fn new_identity(&self, field: SortField) -> CriterionId {
        let n = self.next.fetch_add(1, AtomicOrdering::Relaxed) + 1;
        CriterionId::new(format!("{}-{n}", field.as_str()))
    }
}

/// Ordered list of criteria; index 0 is the primary key.
///
/// Holds no duplicate fields and no duplicate identities.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SortCriteria(Vec<SortCriterion>);

impl SortCriteria {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a list from untrusted input, keeping only the first occurrence
    /// of every field and of every identity.
    pub fn from_criteria(criteria: Vec<SortCriterion>) -> Self {
        let mut kept: Vec<SortCriterion> = Vec::with_capacity(criteria.len());
        for criterion in criteria {
            let duplicate = kept
                .iter()
                .any(|c| c.field == criterion.field || c.id == criterion.id);
            if !duplicate {
                kept.push(criterion);
            }
        }
        Self(kept)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortCriterion> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[SortCriterion] {
        &self.0
    }

    pub fn get(&self, id: &CriterionId) -> Option<&SortCriterion> {
        self.0.iter().find(|c| &c.id == id)
    }

    pub fn position(&self, id: &CriterionId) -> Option<usize> {
        self.0.iter().position(|c| &c.id == id)
    }

    pub fn contains_field(&self, field: SortField) -> bool {
        self.0.iter().any(|c| c.field == field)
    }

    /// Fields not yet used, in declaration order.
    pub fn available_fields(&self) -> Vec<SortField> {
        SortField::ALL
            .into_iter()
            .filter(|field| !self.contains_field(*field))
            .collect()
    }

    /// Appends `field` with its default direction and a fresh identity.
    /// Returns an unchanged copy if the field is already used.
    pub fn add(&self, field: SortField, ids: &dyn IdentitySource) -> Self {
        if self.contains_field(field) {
            return self.clone();
        }
        let mut next = self.0.clone();
        next.push(SortCriterion::new(
            ids.new_identity(field),
            field,
            field.default_direction(),
        ));
        Self(next)
    }

    pub fn remove(&self, id: &CriterionId) -> Self {
        Self(self.0.iter().filter(|c| &c.id != id).cloned().collect())
    }

    /// Moves `moved` so that it sits immediately before `before`.
    ///
    /// No-op when either identity is unknown or both are the same.
    pub fn reorder(&self, moved: &CriterionId, before: &CriterionId) -> Self {
        if moved == before {
            return self.clone();
        }
        let (Some(from), Some(_)) = (self.position(moved), self.position(before)) else {
            return self.clone();
        };

        let mut next = self.0.clone();
        let criterion = next.remove(from);
        let to = next
            .iter()
            .position(|c| &c.id == before)
            .unwrap_or(next.len());
        next.insert(to, criterion);
        Self(next)
    }

    pub fn set_direction(&self, id: &CriterionId, direction: SortDirection) -> Self {
        Self(
            self.0
                .iter()
                .map(|c| {
                    if &c.id == id {
                        SortCriterion {
                            direction,
                            ..c.clone()
                        }
                    } else {
                        c.clone()
                    }
                })
                .collect(),
        )
    }

    pub fn toggle_direction(&self, id: &CriterionId) -> Self {
        match self.get(id) {
            Some(criterion) => self.set_direction(id, criterion.direction.reversed()),
            None => self.clone(),
        }
    }

    pub fn clear(&self) -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a SortCriteria {
    type Item = &'a SortCriterion;
    type IntoIter = std::slice::Iter<'a, SortCriterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(criteria: &SortCriteria) -> Vec<SortField> {
        criteria.iter().map(|c| c.field).collect()
    }

    fn build(list: &[SortField]) -> (SortCriteria, SequentialIdentitySource) {
        let ids = SequentialIdentitySource::new();
        let criteria = list
            .iter()
            .fold(SortCriteria::new(), |acc, field| acc.add(*field, &ids));
        (criteria, ids)
    }

    #[test]
    fn add_uses_field_default_direction() {
        let (criteria, _) = build(&[SortField::CreatedAt, SortField::Name, SortField::UpdatedAt]);
        let directions: Vec<_> = criteria.iter().map(|c| c.direction).collect();
        assert_eq!(
            directions,
            vec![SortDirection::Desc, SortDirection::Asc, SortDirection::Desc]
        );
    }

    #[test]
    fn add_ignores_fields_already_in_use() {
        let (criteria, ids) = build(&[SortField::Name, SortField::Email]);
        let again = criteria.add(SortField::Name, &ids);
        assert_eq!(again, criteria);
    }

    #[test]
    fn no_field_appears_twice_after_any_adds() {
        let ids = SequentialIdentitySource::new();
        let mut criteria = SortCriteria::new();
        for field in SortField::ALL.iter().chain(SortField::ALL.iter()).rev() {
            criteria = criteria.add(*field, &ids);
        }
        assert_eq!(criteria.len(), SortField::ALL.len());
        for field in SortField::ALL {
            assert_eq!(criteria.iter().filter(|c| c.field == field).count(), 1);
        }
    }

    #[test]
    fn readding_a_removed_field_gets_a_fresh_identity() {
        let (criteria, ids) = build(&[SortField::Name]);
        let first = criteria.as_slice()[0].id.clone();
        let readded = criteria.remove(&first).add(SortField::Name, &ids);
        assert_ne!(readded.as_slice()[0].id, first);
    }

    #[test]
    fn operations_leave_previous_snapshot_untouched() {
        let (criteria, ids) = build(&[SortField::Name, SortField::Id]);
        let snapshot = criteria.clone();
        let id = criteria.as_slice()[0].id.clone();
        let _ = criteria.remove(&id);
        let _ = criteria.toggle_direction(&id);
        let _ = criteria.add(SortField::Status, &ids);
        assert_eq!(criteria, snapshot);
    }

    #[test]
    fn remove_unknown_identity_is_noop() {
        let (criteria, _) = build(&[SortField::Name]);
        assert_eq!(criteria.remove(&CriterionId::from("missing")), criteria);
    }

    #[test]
    fn reorder_moves_third_criterion_to_front() {
        let (criteria, _) = build(&[SortField::Name, SortField::Email, SortField::Status]);
        let moved = criteria.as_slice()[2].id.clone();
        let target = criteria.as_slice()[0].id.clone();
        let next = criteria.reorder(&moved, &target);
        assert_eq!(
            fields(&next),
            vec![SortField::Status, SortField::Name, SortField::Email]
        );
    }

    #[test]
    fn reorder_downwards_lands_before_target() {
        let (criteria, _) = build(&[
            SortField::Name,
            SortField::Email,
            SortField::Status,
            SortField::Id,
        ]);
        let moved = criteria.as_slice()[0].id.clone();
        let target = criteria.as_slice()[3].id.clone();
        let next = criteria.reorder(&moved, &target);
        assert_eq!(
            fields(&next),
            vec![
                SortField::Email,
                SortField::Status,
                SortField::Name,
                SortField::Id
            ]
        );
    }

    #[test]
    fn reorder_noop_cases() {
        let (criteria, _) = build(&[SortField::Name, SortField::Email]);
        let first = criteria.as_slice()[0].id.clone();
        let unknown = CriterionId::from("unknown");
        assert_eq!(criteria.reorder(&first, &first), criteria);
        assert_eq!(criteria.reorder(&first, &unknown), criteria);
        assert_eq!(criteria.reorder(&unknown, &first), criteria);
    }

    #[test]
    fn set_and_toggle_direction() {
        let (criteria, _) = build(&[SortField::Name, SortField::CreatedAt]);
        let name = criteria.as_slice()[0].id.clone();
        let desc = criteria.set_direction(&name, SortDirection::Desc);
        assert_eq!(desc.as_slice()[0].direction, SortDirection::Desc);
        assert_eq!(desc.as_slice()[1].direction, SortDirection::Desc);

        let back = desc.toggle_direction(&name);
        assert_eq!(back, criteria);

        let unknown = CriterionId::from("unknown");
        assert_eq!(criteria.set_direction(&unknown, SortDirection::Desc), criteria);
    }

    #[test]
    fn available_fields_keep_declaration_order() {
        let (criteria, _) = build(&[SortField::CreatedAt, SortField::Name]);
        assert_eq!(
            criteria.available_fields(),
            vec![
                SortField::Email,
                SortField::UpdatedAt,
                SortField::Id,
                SortField::Status
            ]
        );
        assert!(criteria.clear().is_empty());
    }

    #[test]
    fn from_criteria_drops_duplicates() {
        let criteria = SortCriteria::from_criteria(vec![
            SortCriterion::new("a".into(), SortField::Name, SortDirection::Asc),
            SortCriterion::new("b".into(), SortField::Name, SortDirection::Desc),
            SortCriterion::new("a".into(), SortField::Email, SortDirection::Asc),
            SortCriterion::new("c".into(), SortField::Id, SortDirection::Desc),
        ]);
        assert_eq!(fields(&criteria), vec![SortField::Name, SortField::Id]);
    }

    #[test]
    fn field_parses_from_wire_name() {
        assert_eq!("createdAt".parse::<SortField>(), Ok(SortField::CreatedAt));
        assert!("created_at".parse::<SortField>().is_err());
    }
}
