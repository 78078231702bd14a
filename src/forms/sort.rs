//! Forms posted by the "Sort By" panel.
//!
//! Every form carries the page state it was rendered with (`sort` and `q`)
//! so the service can rebuild the criteria and the return location.

use serde::Deserialize;
use validator::Validate;

use crate::domain::sort::{SortDirection, SortField};
use crate::domain::sort_editor::EditorAction;
use crate::domain::types::CriterionId;

/// Page state echoed back by the editor forms.
#[derive(Debug, Default, Clone)]
pub struct SortFormContext {
    pub sort: Option<String>,
    pub search: Option<String>,
}

/// Common shape of the editor forms.
pub trait SortForm: Validate {
    fn context(&self) -> SortFormContext;
    fn action(&self) -> EditorAction;
}

#[derive(Debug, Deserialize, Validate)]
/// Adds a field to the end of the criteria.
pub struct AddSortFieldForm {
    pub field: SortField,
    pub sort: Option<String>,
    pub q: Option<String>,
}

impl SortForm for AddSortFieldForm {
    fn context(&self) -> SortFormContext {
        SortFormContext {
            sort: self.sort.clone(),
            search: self.q.clone(),
        }
    }

    fn action(&self) -> EditorAction {
        EditorAction::Add(self.field)
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Removes one criterion.
pub struct RemoveSortFieldForm {
    #[validate(length(min = 1))]
    pub id: String,
    pub sort: Option<String>,
    pub q: Option<String>,
}

impl SortForm for RemoveSortFieldForm {
    fn context(&self) -> SortFormContext {
        SortFormContext {
            sort: self.sort.clone(),
            search: self.q.clone(),
        }
    }

    fn action(&self) -> EditorAction {
        EditorAction::Remove(CriterionId::new(self.id.as_str()))
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Drops criterion `id` right before criterion `before`.
pub struct MoveSortFieldForm {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub before: String,
    pub sort: Option<String>,
    pub q: Option<String>,
}

impl SortForm for MoveSortFieldForm {
    fn context(&self) -> SortFormContext {
        SortFormContext {
            sort: self.sort.clone(),
            search: self.q.clone(),
        }
    }

    fn action(&self) -> EditorAction {
        EditorAction::Reorder {
            moved: CriterionId::new(self.id.as_str()),
            before: CriterionId::new(self.before.as_str()),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Sets the direction of a criterion, or flips it when none is given.
pub struct SortDirectionForm {
    #[validate(length(min = 1))]
    pub id: String,
    pub direction: Option<SortDirection>,
    pub sort: Option<String>,
    pub q: Option<String>,
}

impl SortForm for SortDirectionForm {
    fn context(&self) -> SortFormContext {
        SortFormContext {
            sort: self.sort.clone(),
            search: self.q.clone(),
        }
    }

    fn action(&self) -> EditorAction {
        let id = CriterionId::new(self.id.as_str());
        match self.direction {
            Some(direction) => EditorAction::SetDirection(id, direction),
            None => EditorAction::Toggle(id),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Removes every criterion.
pub struct ClearSortForm {
    pub q: Option<String>,
}

impl SortForm for ClearSortForm {
    fn context(&self) -> SortFormContext {
        SortFormContext {
            sort: None,
            search: self.q.clone(),
        }
    }

    fn action(&self) -> EditorAction {
        EditorAction::Clear
    }
}
