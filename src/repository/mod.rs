use crate::domain::client::Client;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use memory::InMemoryRepository;

#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    pub search: Option<String>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the list to clients matching `term`; blank terms are ignored.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self
    }
}

/// Read access to the client rows. Returned rows keep the source order.
pub trait ClientReader {
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
}
