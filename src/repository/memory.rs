//! Read-only client source held in memory.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::domain::client::Client;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientListQuery, ClientReader};

/// Demo rows shown when no clients file is configured.
const DEMO_CLIENTS: [(i32, &str, &str, &str, &str, &str, &str); 10] = [
    (
        20,
        "John Doe",
        "johndoe@email.com",
        "Individual",
        "Active",
        "2024-10-02T09:31:00Z",
        "2025-01-12T12:05:00Z",
    ),
    (
        21,
        "Test Test",
        "test@test.com",
        "Individual",
        "Active",
        "2025-01-03T11:25:00Z",
        "2025-01-11T08:45:00Z",
    ),
    (
        9,
        "Acme Corp",
        "contact@acme.com",
        "Company",
        "Inactive",
        "2023-12-15T08:00:00Z",
        "2024-04-22T10:10:00Z",
    ),
    (
        3,
        "Blue Ocean",
        "hi@blueocean.co",
        "Company",
        "Active",
        "2024-04-06T14:15:00Z",
        "2024-09-06T09:30:00Z",
    ),
    (
        44,
        "Karthik Kumar",
        "karthik@kk.dev",
        "Individual",
        "Active",
        "2025-02-18T07:10:00Z",
        "2025-02-28T17:01:00Z",
    ),
    (
        7,
        "Zen Motors",
        "sales@zenmotors.com",
        "Company",
        "Inactive",
        "2024-07-23T10:40:00Z",
        "2025-03-04T10:40:00Z",
    ),
    (
        68,
        "Alice Wonderland",
        "alice@wonder.land",
        "Individual",
        "Active",
        "2025-03-01T06:30:00Z",
        "2025-03-03T06:31:00Z",
    ),
    (
        70,
        "Charlie Root",
        "charlie@root.io",
        "Individual",
        "Active",
        "2024-11-25T13:10:00Z",
        "2024-12-05T13:30:00Z",
    ),
    (
        12,
        "Nimbus LLC",
        "admin@nimbus.llc",
        "Company",
        "Active",
        "2023-10-09T05:00:00Z",
        "2025-01-05T10:00:00Z",
    ),
    (
        52,
        "Beta Labs",
        "team@betalabs.ai",
        "Company",
        "Inactive",
        "2024-12-30T12:20:00Z",
        "2025-01-01T09:00:00Z",
    ),
];

/// One line of a clients CSV file.
#[derive(Debug, Deserialize)]
struct ClientCsvRecord {
    id: i32,
    name: String,
    email: String,
    #[serde(rename = "type")]
    client_type: String,
    status: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ClientCsvRecord> for Client {
    type Error = crate::domain::types::TypeConstraintError;

    fn try_from(record: ClientCsvRecord) -> Result<Self, Self::Error> {
        Client::try_new(
            record.id,
            &record.name,
            &record.email,
            &record.client_type,
            &record.status,
            &record.created_at,
            &record.updated_at,
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    clients: Vec<Client>,
}

impl InMemoryRepository {
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    pub fn with_demo_clients() -> RepositoryResult<Self> {
        let clients = DEMO_CLIENTS
            .iter()
            .map(|(id, name, email, client_type, status, created_at, updated_at)| {
                Client::try_new(
                    *id,
                    name,
                    email,
                    client_type,
                    status,
                    created_at,
                    updated_at,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(clients))
    }

    /// Loads clients from CSV with the header
    /// `id,name,email,type,status,created_at,updated_at`.
    pub fn from_csv_reader<R: Read>(reader: R) -> RepositoryResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut clients = Vec::new();
        for record in rdr.deserialize::<ClientCsvRecord>() {
            clients.push(Client::try_from(record?)?);
        }
        log::info!("Loaded {} clients", clients.len());
        Ok(Self::new(clients))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }
}

impl ClientReader for InMemoryRepository {
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        let clients: Vec<Client> = match query.search.as_deref() {
            Some(term) => self
                .clients
                .iter()
                .filter(|client| client.matches_search(term))
                .cloned()
                .collect(),
            None => self.clients.clone(),
        };
        Ok((clients.len(), clients))
    }
}
