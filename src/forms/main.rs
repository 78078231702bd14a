use serde::Deserialize;

use crate::dto::api::ClientsQuery;
use crate::dto::main::IndexQuery;

/// Query string of the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQueryParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub panel: Option<String>,
}

impl From<IndexQueryParams> for IndexQuery {
    fn from(params: IndexQueryParams) -> Self {
        Self {
            search: params.q,
            sort: params.sort,
            panel_open: params.panel.as_deref() == Some("open"),
        }
    }
}

/// Query string of `/api/v1/clients`.
#[derive(Debug, Default, Deserialize)]
pub struct ApiClientsQueryParams {
    pub q: Option<String>,
    pub sort: Option<String>,
}

impl From<ApiClientsQueryParams> for ClientsQuery {
    fn from(params: ApiClientsQueryParams) -> Self {
        Self {
            search: params.q,
            sort: params.sort,
        }
    }
}
