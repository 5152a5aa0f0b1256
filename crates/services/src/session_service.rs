use std::sync::Arc;

use olymp_core::model::{ParticipantSession, StoredParticipant};
use storage::repository::{SessionRecord, SessionRepository};

use crate::Clock;
use crate::error::SessionServiceError;

/// Owns every read and write of the durable participant session.
///
/// The contract is explicit: one load at startup, one save on
/// registration success, one clear on logout. Nothing else touches the
/// stored keys.
#[derive(Clone)]
pub struct SessionService {
    clock: Clock,
    sessions: Arc<dyn SessionRepository>,
}

impl SessionService {
    #[must_use]
    pub fn new(clock: Clock, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { clock, sessions }
    }

    /// Load the persisted session, mapping an empty store to
    /// `Anonymous`.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError` on storage failures, including a
    /// corrupt stored identifier.
    pub async fn load(&self) -> Result<ParticipantSession, SessionServiceError> {
        let Some(record) = self.sessions.load_session().await? else {
            return Ok(ParticipantSession::Anonymous);
        };
        let participant = record.into_participant()?;
        Ok(ParticipantSession::registered(participant))
    }

    /// Persist the identity retained after a successful registration.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError` if persistence fails.
    pub async fn save(&self, participant: &StoredParticipant) -> Result<(), SessionServiceError> {
        let record = SessionRecord::from_participant(participant, self.clock.now());
        self.sessions.save_session(&record).await?;
        Ok(())
    }

    /// Remove both durable keys. The only teardown path.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError` if the store cannot be written.
    pub async fn clear(&self) -> Result<(), SessionServiceError> {
        self.sessions.clear_session().await?;
        Ok(())
    }
}
