use std::sync::Mutex;

use crate::domain::sort::SortCriteria;
use crate::persistence::SortStateStore;
use crate::persistence::codec::{decode_criteria, encode_criteria};

/// Process-local durable store holding the serialized criteria text.
#[derive(Debug, Default)]
pub struct MemorySortStore {
    text: Mutex<Option<String>>,
}

impl MemorySortStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: &SortCriteria) -> Self {
        Self::with_raw(encode_criteria(criteria))
    }

    /// Seeds the store with arbitrary text, well-formed or not.
    pub fn with_raw(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(Some(text.into())),
        }
    }

    /// The text last written, if any.
    pub fn raw(&self) -> Option<String> {
        match self.text.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SortStateStore for MemorySortStore {
    fn load(&self) -> Option<SortCriteria> {
        self.raw().as_deref().and_then(decode_criteria)
    }

    fn save(&self, criteria: &SortCriteria) {
        let text = encode_criteria(criteria);
        match self.text.lock() {
            Ok(mut guard) => *guard = Some(text),
            Err(poisoned) => *poisoned.into_inner() = Some(text),
        }
    }
}
