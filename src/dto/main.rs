use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::sort_editor::{EditorRow, FieldOption};

/// Query parameters accepted by the index page service.
#[derive(Debug, Default)]
pub struct IndexQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Shareable sort state taken from the address bar.
    pub sort: Option<String>,
    /// Whether the "Sort By" panel is shown.
    pub panel_open: bool,
}

/// A client row formatted for the table.
#[derive(Debug, Serialize)]
pub struct ClientView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub client_type: &'static str,
    pub status: &'static str,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Client> for ClientView {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.get(),
            name: client.name.to_string(),
            email: client.email.to_string(),
            client_type: client.client_type.as_str(),
            status: client.status.as_str(),
            active: client.status == crate::domain::client::ClientStatus::Active,
            created_at: client.created_at.display(),
            updated_at: client.updated_at.display(),
        }
    }
}

/// Data required to render the main index template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    /// Filtered and sorted clients.
    pub clients: Vec<ClientView>,
    /// Active criteria in priority order.
    pub criteria: Vec<EditorRow>,
    /// Fields that can still be added to the criteria.
    pub available_fields: Vec<FieldOption>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
    /// Encoded sort state, posted back by the editor forms.
    pub sort_param: Option<String>,
    pub panel_open: bool,
    /// Same page with the panel toggled.
    pub toggle_panel_url: String,
}

/// Outcome of loading the index page.
#[derive(Debug)]
pub enum IndexPage {
    Render(Box<IndexPageData>),
    /// The address bar lacks the saved sort state; send the browser to a
    /// location that carries it.
    Redirect(String),
}
