use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use olymp_core::model::{ParticipantId, StoredParticipant};

/// Fixed key for the stored participant identifier.
pub const PARTICIPANT_ID_KEY: &str = "participant_id";
/// Fixed key for the stored participant display name.
pub const STUDENT_NAME_KEY: &str = "student_name";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the durable session: the two string values under
/// their fixed keys, plus the time they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub participant_id: String,
    pub student_name: String,
    pub saved_at: DateTime<Utc>,
}

impl SessionRecord {
    #[must_use]
    pub fn from_participant(participant: &StoredParticipant, saved_at: DateTime<Utc>) -> Self {
        Self {
            participant_id: participant.id().to_string(),
            student_name: participant.student_name().to_string(),
            saved_at,
        }
    }

    /// Convert the record back into a domain `StoredParticipant`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored identifier
    /// is not a number.
    pub fn into_participant(self) -> Result<StoredParticipant, StorageError> {
        let id: ParticipantId = self
            .participant_id
            .parse()
            .map_err(|_| StorageError::Serialization("invalid stored participant id".into()))?;
        Ok(StoredParticipant::new(id, self.student_name))
    }
}

/// Repository contract for the durable participant session.
///
/// Written only by the registration-success and logout paths; read once
/// at startup.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Fetch the stored session, if both keys are present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn load_session(&self) -> Result<Option<SessionRecord>, StorageError>;

    /// Persist or replace both keys.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_session(&self, record: &SessionRecord) -> Result<(), StorageError>;

    /// Remove both keys. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn clear_session(&self) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    record: Arc<Mutex<Option<SessionRecord>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn load_session(&self) -> Result<Option<SessionRecord>, StorageError> {
        let guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_session(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(record.clone());
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let sessions: Arc<dyn SessionRepository> = Arc::new(InMemorySessionStore::new());
        Self { sessions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olymp_core::time::fixed_now;

    #[tokio::test]
    async fn round_trips_session_record() {
        let store = InMemorySessionStore::new();
        let participant = StoredParticipant::new(ParticipantId::new(42), "Иван Петров");
        let record = SessionRecord::from_participant(&participant, fixed_now());

        store.save_session(&record).await.unwrap();
        let loaded = store.load_session().await.unwrap().unwrap();
        assert_eq!(loaded.into_participant().unwrap(), participant);

        store.clear_session().await.unwrap();
        assert!(store.load_session().await.unwrap().is_none());
    }

    #[test]
    fn corrupt_identifier_is_a_serialization_error() {
        let record = SessionRecord {
            participant_id: "not-a-number".to_string(),
            student_name: "Иван".to_string(),
            saved_at: fixed_now(),
        };
        assert!(matches!(
            record.into_participant(),
            Err(StorageError::Serialization(_))
        ));
    }
}
