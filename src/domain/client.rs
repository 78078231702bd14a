use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientEmail, ClientId, ClientName, Timestamp, TypeConstraintError};

/// Legal form of a client.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClientType {
    Individual,
    Company,
}

impl ClientType {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientType::Individual => "Individual",
            ClientType::Company => "Company",
        }
    }
}

impl Display for ClientType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Individual" => Ok(ClientType::Individual),
            "Company" => Ok(ClientType::Company),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown client type `{other}`"
            ))),
        }
    }
}

/// Whether the client is currently active.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClientStatus {
    Active,
    Inactive,
}

impl ClientStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
        }
    }
}

impl Display for ClientStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Active" => Ok(ClientStatus::Active),
            "Inactive" => Ok(ClientStatus::Inactive),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown client status `{other}`"
            ))),
        }
    }
}

/// A single row of the clients table. Read-only for the sorting core.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub email: ClientEmail,
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub status: ClientStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Client {
    /// Builds a client from raw values, validating each of them.
    pub fn try_new(
        id: i32,
        name: &str,
        email: &str,
        client_type: &str,
        status: &str,
        created_at: &str,
        updated_at: &str,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: ClientId::new(id)?,
            name: ClientName::new(name)?,
            email: ClientEmail::new(email)?,
            client_type: client_type.parse()?,
            status: status.parse()?,
            created_at: Timestamp::new(created_at),
            updated_at: Timestamp::new(updated_at),
        })
    }

    /// Case-insensitive substring match over name, email and the decimal id.
    /// A blank term matches every client.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.email.normalized().contains(&needle)
            || self.id.to_string().contains(&needle)
    }
}
