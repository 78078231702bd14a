//! Applies editor actions and persists the result.

use crate::domain::sort::{IdentitySource, SortCriteria};
use crate::domain::sort_editor::SortEditor;
use crate::forms::FormError;
use crate::forms::sort::SortForm;
use crate::persistence::{SortStateStore, hydrate, sort_location};
use crate::services::ServiceResult;

/// New criteria together with the location the browser should land on.
#[derive(Debug)]
pub struct SortUpdate {
    pub criteria: SortCriteria,
    pub location: String,
}

/// Validates `form`, applies its action to the criteria it was rendered with
/// and saves the outcome to `store`.
pub fn apply_sort_form<F>(
    form: &F,
    store: &dyn SortStateStore,
    ids: &dyn IdentitySource,
) -> ServiceResult<SortUpdate>
where
    F: SortForm,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate sort form: {err}");
        return Err(FormError::from(err).into());
    }

    let context = form.context();
    let current = hydrate(context.sort.as_deref(), store);

    let mut editor = SortEditor::new(current);
    editor.open();
    let criteria = editor.apply(form.action(), ids);
    store.save(&criteria);

    log::info!(
        "Sort criteria updated: [{}]",
        criteria
            .iter()
            .map(|c| format!("{}:{}", c.field, c.direction))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let location = sort_location("/", context.search.as_deref(), &criteria, editor.is_open());
    Ok(SortUpdate { criteria, location })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sort::{SequentialIdentitySource, SortDirection, SortField};
    use crate::forms::sort::{
        AddSortFieldForm, ClearSortForm, MoveSortFieldForm, RemoveSortFieldForm,
        SortDirectionForm,
    };
    use crate::persistence::{MemorySortStore, encode_share_param};
    use crate::services::ServiceError;

    fn add(field: SortField, sort: Option<String>) -> AddSortFieldForm {
        AddSortFieldForm {
            field,
            sort,
            q: None,
        }
    }

    #[test]
    fn add_persists_and_points_at_new_location() {
        let ids = SequentialIdentitySource::new();
        let store = MemorySortStore::new();

        let update = apply_sort_form(&add(SortField::CreatedAt, None), &store, &ids).expect("ok");
        assert_eq!(update.criteria.len(), 1);
        assert_eq!(update.criteria.as_slice()[0].direction, SortDirection::Desc);
        assert_eq!(store.load(), Some(update.criteria.clone()));
        assert_eq!(
            update.location,
            format!(
                "/?sort={}&panel=open",
                encode_share_param(&update.criteria)
            )
        );
    }

    #[test]
    fn actions_start_from_the_posted_state() {
        let ids = SequentialIdentitySource::new();
        let store = MemorySortStore::new();

        let first = apply_sort_form(&add(SortField::Name, None), &store, &ids).expect("ok");
        let posted = encode_share_param(&first.criteria);
        let second = apply_sort_form(&add(SortField::Status, Some(posted.clone())), &store, &ids)
            .expect("ok");
        let posted = encode_share_param(&second.criteria);

        let status = second.criteria.as_slice()[1].id.clone();
        let name = second.criteria.as_slice()[0].id.clone();
        let moved = apply_sort_form(
            &MoveSortFieldForm {
                id: status.to_string(),
                before: name.to_string(),
                sort: Some(posted),
                q: Some("acme".to_string()),
            },
            &store,
            &ids,
        )
        .expect("ok");
        let fields: Vec<_> = moved.criteria.iter().map(|c| c.field).collect();
        assert_eq!(fields, vec![SortField::Status, SortField::Name]);
        assert!(moved.location.starts_with("/?q=acme&sort="));

        let toggled = apply_sort_form(
            &SortDirectionForm {
                id: name.to_string(),
                direction: None,
                sort: Some(encode_share_param(&moved.criteria)),
                q: None,
            },
            &store,
            &ids,
        )
        .expect("ok");
        assert_eq!(toggled.criteria.as_slice()[1].direction, SortDirection::Desc);

        let removed = apply_sort_form(
            &RemoveSortFieldForm {
                id: status.to_string(),
                sort: Some(encode_share_param(&toggled.criteria)),
                q: None,
            },
            &store,
            &ids,
        )
        .expect("ok");
        assert_eq!(removed.criteria.len(), 1);
        assert_eq!(store.load(), Some(removed.criteria));
    }

    #[test]
    fn clear_drops_sort_from_location() {
        let ids = SequentialIdentitySource::new();
        let store = MemorySortStore::new();
        apply_sort_form(&add(SortField::Email, None), &store, &ids).expect("ok");

        let cleared = apply_sort_form(&ClearSortForm { q: None }, &store, &ids).expect("ok");
        assert!(cleared.criteria.is_empty());
        assert_eq!(cleared.location, "/?panel=open");
        assert_eq!(store.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn invalid_form_is_rejected_without_saving() {
        let ids = SequentialIdentitySource::new();
        let store = MemorySortStore::new();
        let form = RemoveSortFieldForm {
            id: String::new(),
            sort: None,
            q: None,
        };
        let result = apply_sort_form(&form, &store, &ids);
        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert_eq!(store.raw(), None);
    }
}
