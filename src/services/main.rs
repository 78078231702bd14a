use crate::domain::sort_editor::SortEditor;
use crate::dto::main::{ClientView, IndexPage, IndexPageData};
pub use crate::dto::main::IndexQuery;
use crate::persistence::{SortStateStore, encode_share_param, hydrate, sort_location};
use crate::repository::{ClientListQuery, ClientReader};
use crate::services::ServiceResult;
use crate::sorting::sort_clients;

/// Loads the clients list for the main index page: filter, then sort by the
/// current criteria, then persist them.
pub fn load_index_page<R>(
    repo: &R,
    store: &dyn SortStateStore,
    query: IndexQuery,
) -> ServiceResult<IndexPage>
where
    R: ClientReader + ?Sized,
{
    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let shared = query.sort.as_deref().filter(|s| !s.trim().is_empty());
    let criteria = hydrate(shared, store);
    store.save(&criteria);

    if shared.is_none() && !criteria.is_empty() {
        return Ok(IndexPage::Redirect(sort_location(
            "/",
            search_query.as_deref(),
            &criteria,
            query.panel_open,
        )));
    }

    let mut list_query = ClientListQuery::new();
    if let Some(term) = &search_query {
        list_query = list_query.search(term.clone());
    }

    let (_total, mut clients) = repo.list_clients(list_query).map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err
    })?;
    sort_clients(&mut clients, &criteria);

    let mut editor = SortEditor::new(criteria);
    if query.panel_open {
        editor.open();
    }

    let criteria = editor.criteria();
    Ok(IndexPage::Render(Box::new(IndexPageData {
        clients: clients.iter().map(ClientView::from).collect(),
        criteria: editor.rows(),
        available_fields: editor.available_fields(),
        sort_param: (!criteria.is_empty()).then(|| encode_share_param(criteria)),
        toggle_panel_url: sort_location(
            "/",
            search_query.as_deref(),
            criteria,
            !editor.is_open(),
        ),
        panel_open: editor.is_open(),
        search_query,
    })))
}
