// ============================================================================
// SESSION PERSISTENCE - Versioned record under the "user" storage key
// ============================================================================

use std::cell::RefCell;

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::stores::SessionStore;

pub const STORAGE_KEY_SESSION: &str = "user";
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// On-disk envelope; bump `SESSION_SCHEMA_VERSION` when `SessionStore` changes shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub version: u32,
    pub state: SessionStore,
}

impl PersistedSession {
    pub fn current(state: &SessionStore) -> Self {
        Self {
            version: SESSION_SCHEMA_VERSION,
            state: state.clone(),
        }
    }

    pub fn into_state(self) -> Result<SessionStore, StorageError> {
        if self.version != SESSION_SCHEMA_VERSION {
            return Err(StorageError::VersionMismatch {
                found: self.version,
                expected: SESSION_SCHEMA_VERSION,
            });
        }
        Ok(self.state)
    }
}

pub trait SessionPersistence {
    /// `Ok(None)` when nothing has been saved yet
    fn read(&self) -> Result<Option<SessionStore>, StorageError>;

    fn write(&self, state: &SessionStore) -> Result<(), StorageError>;

    /// Restores the saved session, or the default one when the record is
    /// missing or unusable
    fn load(&self) -> SessionStore {
        match self.read() {
            Ok(Some(state)) => {
                log::info!("📋 Session restored from storage (signed in: {})", state.is_signed_in);
                state
            }
            Ok(None) => SessionStore::default(),
            Err(e) => {
                log::warn!("⚠️ Discarding stored session: {}", e);
                SessionStore::default()
            }
        }
    }

    /// Fire-and-forget save used after every store change
    fn save(&self, state: &SessionStore) {
        if let Err(e) = self.write(state) {
            log::error!("❌ Error saving session to storage: {}", e);
        }
    }
}

/// Browser localStorage
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStoragePersistence;

impl SessionPersistence for LocalStoragePersistence {
    fn read(&self) -> Result<Option<SessionStore>, StorageError> {
        match LocalStorage::get::<PersistedSession>(STORAGE_KEY_SESSION) {
            Ok(record) => record.into_state().map(Some),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, state: &SessionStore) -> Result<(), StorageError> {
        LocalStorage::set(STORAGE_KEY_SESSION, PersistedSession::current(state))?;
        Ok(())
    }
}

/// Keeps the serialized record in memory; same encoding as localStorage
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    slot: RefCell<Option<String>>,
}

impl MemoryPersistence {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: RefCell::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionPersistence for MemoryPersistence {
    fn read(&self) -> Result<Option<SessionStore>, StorageError> {
        let slot = self.slot.borrow();
        let Some(raw) = slot.as_deref() else {
            return Ok(None);
        };
        let record: PersistedSession = serde_json::from_str(raw)?;
        record.into_state().map(Some)
    }

    fn write(&self, state: &SessionStore) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&PersistedSession::current(state))?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cart::tests::medicine;
    use crate::stores::SessionAction;

    #[test]
    fn empty_storage_loads_default() {
        let storage = MemoryPersistence::default();
        assert_eq!(storage.load(), SessionStore::default());
    }

    #[test]
    fn saved_session_is_restored() {
        let storage = MemoryPersistence::default();
        let mut state = SessionStore::default();
        state.apply(SessionAction::Authorize {
            token: "jwt".to_string(),
            refresh_token: None,
        });
        state.apply(SessionAction::AddToCart {
            medicine: medicine("a", 3.0),
            count: 2,
        });

        storage.save(&state);
        assert_eq!(storage.load(), state);
    }

    #[test]
    fn record_carries_schema_version() {
        let storage = MemoryPersistence::default();
        storage.save(&SessionStore::default());

        let raw: serde_json::Value = serde_json::from_str(&storage.raw().unwrap()).unwrap();
        assert_eq!(raw["version"], SESSION_SCHEMA_VERSION);
        assert_eq!(raw["state"]["is_signed_in"], false);
    }

    #[test]
    fn other_version_is_discarded() {
        let mut record = serde_json::to_value(PersistedSession::current(&SessionStore {
            is_signed_in: true,
            token: Some("old".to_string()),
            ..SessionStore::default()
        }))
        .unwrap();
        record["version"] = serde_json::json!(SESSION_SCHEMA_VERSION + 1);
        let storage = MemoryPersistence::with_raw(&record.to_string());

        assert!(matches!(
            storage.read(),
            Err(StorageError::VersionMismatch { .. })
        ));
        assert_eq!(storage.load(), SessionStore::default());
    }

    #[test]
    fn garbage_is_discarded() {
        let storage = MemoryPersistence::with_raw("{not json");
        assert!(matches!(storage.read(), Err(StorageError::Json(_))));
        assert!(!storage.load().is_signed_in);
    }
}
