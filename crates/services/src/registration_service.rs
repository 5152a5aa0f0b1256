use std::sync::Arc;

use olymp_core::model::RegistrationForm;

use crate::api::{CompetitionApi, RegistrationOutcome};
use crate::error::RegistrationServiceError;
use crate::session_service::SessionService;

/// Validates the form, posts it, and persists the returned identity.
#[derive(Clone)]
pub struct RegistrationService {
    api: Arc<dyn CompetitionApi>,
    sessions: SessionService,
}

impl RegistrationService {
    #[must_use]
    pub fn new(api: Arc<dyn CompetitionApi>, sessions: SessionService) -> Self {
        Self { api, sessions }
    }

    /// Run the registration flow end to end.
    ///
    /// On success the participant identifier and display name are
    /// persisted before the outcome is returned, so the identity
    /// survives a reload even if the caller drops the result.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationServiceError::Validation` before any
    /// network call when a required field is empty, `Api` when the
    /// remote refuses or the transport fails, `Session` if the
    /// identity cannot be persisted.
    pub async fn register(
        &self,
        form: &RegistrationForm,
    ) -> Result<RegistrationOutcome, RegistrationServiceError> {
        let request = form.validate()?;
        let outcome = self.api.register(&request).await?;
        self.sessions.save(&outcome.participant).await?;
        Ok(outcome)
    }
}
