//! Interaction state of the "Sort By" panel.

use serde::Serialize;

use crate::domain::sort::{IdentitySource, SortCriteria, SortDirection, SortField};
use crate::domain::types::CriterionId;

/// Visibility of the editor panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open,
}

/// A user intent coming from the editor controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorAction {
    Add(SortField),
    Remove(CriterionId),
    /// Drag-end: place `moved` immediately before `before`.
    Reorder {
        moved: CriterionId,
        before: CriterionId,
    },
    SetDirection(CriterionId, SortDirection),
    Toggle(CriterionId),
    Clear,
}

/// One line of the editor, in priority order.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EditorRow {
    /// 1-based priority.
    pub priority: usize,
    pub id: CriterionId,
    pub field: SortField,
    pub label: &'static str,
    pub direction: SortDirection,
    pub asc_label: &'static str,
    pub desc_label: &'static str,
    /// Criterion directly above, the drop target for "move up".
    pub above: Option<CriterionId>,
    /// Criterion directly below, which "move down" places before this one.
    pub below: Option<CriterionId>,
}

/// A field that can still be added.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FieldOption {
    pub field: SortField,
    pub label: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct SortEditor {
    state: EditorState,
    criteria: SortCriteria,
}

impl SortEditor {
    pub fn new(criteria: SortCriteria) -> Self {
        Self {
            state: EditorState::Closed,
            criteria,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == EditorState::Open
    }

    pub fn open(&mut self) {
        self.state = EditorState::Open;
    }

    /// Closing and applying are the same transition: the criteria are already
    /// live.
    pub fn close(&mut self) {
        self.state = EditorState::Closed;
    }

    pub fn criteria(&self) -> &SortCriteria {
        &self.criteria
    }

    /// Applies `action` and returns the resulting criteria snapshot.
    pub fn apply(&mut self, action: EditorAction, ids: &dyn IdentitySource) -> SortCriteria {
        let next = match action {
            EditorAction::Add(field) => self.criteria.add(field, ids),
            EditorAction::Remove(id) => self.criteria.remove(&id),
            EditorAction::Reorder { moved, before } => self.criteria.reorder(&moved, &before),
            EditorAction::SetDirection(id, direction) => {
                self.criteria.set_direction(&id, direction)
            }
            EditorAction::Toggle(id) => self.criteria.toggle_direction(&id),
            EditorAction::Clear => self.criteria.clear(),
        };
        self.criteria = next.clone();
        next
    }

    /// Drag-and-drop completion hook.
    pub fn on_reorder_requested(
        &mut self,
        moved: CriterionId,
        target: CriterionId,
    ) -> SortCriteria {
        self.criteria = self.criteria.reorder(&moved, &target);
        self.criteria.clone()
    }

    pub fn available_fields(&self) -> Vec<FieldOption> {
        self.criteria
            .available_fields()
            .into_iter()
            .map(|field| FieldOption {
                field,
                label: field.label(),
            })
            .collect()
    }

    pub fn rows(&self) -> Vec<EditorRow> {
        let list = self.criteria.as_slice();
        list.iter()
            .enumerate()
            .map(|(index, criterion)| {
                let (asc_label, desc_label) = if criterion.field.is_alphabetical() {
                    ("A-Z", "Z-A")
                } else {
                    ("Low→High", "High→Low")
                };
                EditorRow {
                    priority: index + 1,
                    id: criterion.id.clone(),
                    field: criterion.field,
                    label: criterion.field.label(),
                    direction: criterion.direction,
                    asc_label,
                    desc_label,
                    above: index
                        .checked_sub(1)
                        .and_then(|i| list.get(i))
                        .map(|c| c.id.clone()),
                    below: list.get(index + 1).map(|c| c.id.clone()),
                }
            })
            .collect()
    }
}
