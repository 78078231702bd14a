use actix_session::Session;

use crate::domain::sort::SortCriteria;
use crate::persistence::codec::{decode_criteria, encode_criteria};
use crate::persistence::{DURABLE_STORE_KEY, SortStateStore};

/// Durable store backed by the browser's session cookie.
pub struct SessionSortStore {
    session: Session,
}

impl SessionSortStore {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl SortStateStore for SessionSortStore {
    fn load(&self) -> Option<SortCriteria> {
        match self.session.get::<String>(DURABLE_STORE_KEY) {
            Ok(Some(text)) => decode_criteria(&text),
            Ok(None) => None,
            Err(err) => {
                log::warn!("Failed to read saved sort state: {err}");
                None
            }
        }
    }

    fn save(&self, criteria: &SortCriteria) {
        if let Err(err) = self
            .session
            .insert(DURABLE_STORE_KEY, encode_criteria(criteria))
        {
            log::warn!("Failed to save sort state: {err}");
        }
    }
}
