//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::Client;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientListQuery, ClientReader};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
    }
}
