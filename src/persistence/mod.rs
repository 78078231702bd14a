//! Keeps the criteria list in sync with the shareable link and the durable
//! per-browser store.

use crate::domain::sort::SortCriteria;

pub mod codec;
pub mod memory;
#[cfg(feature = "server")]
pub mod session;

pub use codec::{decode_criteria, decode_share_param, encode_criteria, encode_share_param};
pub use memory::MemorySortStore;
#[cfg(feature = "server")]
pub use session::SessionSortStore;

/// Query parameter carrying the shareable sort state.
pub const SORT_QUERY_PARAM: &str = "sort";
/// Key of the sort state in the durable store.
pub const DURABLE_STORE_KEY: &str = "client-sort";

/// Durable storage for the criteria list.
///
/// `load` treats unreadable state as absent. `save` is best effort: failures
/// are logged, never returned.
pub trait SortStateStore {
    fn load(&self) -> Option<SortCriteria>;
    fn save(&self, criteria: &SortCriteria);
}

/// Resolves the criteria for a new session.
///
/// A parseable shareable parameter wins; otherwise the durable store is
/// consulted; otherwise the list starts empty.
pub fn hydrate(share_param: Option<&str>, durable: &dyn SortStateStore) -> SortCriteria {
    if let Some(criteria) = share_param
        .filter(|value| !value.trim().is_empty())
        .and_then(decode_share_param)
    {
        return criteria;
    }
    durable.load().unwrap_or_default()
}

/// Builds a location for `path` carrying the search term and the sort state.
///
/// The `sort` parameter is left out entirely when `criteria` is empty.
pub fn sort_location(
    path: &str,
    search: Option<&str>,
    criteria: &SortCriteria,
    panel_open: bool,
) -> String {
    let mut params: Vec<String> = Vec::new();
    if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
        params.push(format!("q={}", urlencoding::encode(term)));
    }
    if !criteria.is_empty() {
        params.push(format!("{SORT_QUERY_PARAM}={}", encode_share_param(criteria)));
    }
    if panel_open {
        params.push("panel=open".to_string());
    }

    if params.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", params.join("&"))
    }
}
