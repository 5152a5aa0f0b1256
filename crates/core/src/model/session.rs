use crate::model::ParticipantId;

/// Identity the client retains after a successful registration:
/// identifier and display name only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredParticipant {
    id: ParticipantId,
    student_name: String,
}

impl StoredParticipant {
    #[must_use]
    pub fn new(id: ParticipantId, student_name: impl Into<String>) -> Self {
        Self {
            id,
            student_name: student_name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }
}

/// Client-side participant state.
///
/// A present participant identifier is the sole precondition for
/// submitting answers or requesting results; callers guard on
/// [`ParticipantSession::participant_id`] rather than re-reading
/// durable storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ParticipantSession {
    #[default]
    Anonymous,
    Registered(StoredParticipant),
}

impl ParticipantSession {
    #[must_use]
    pub fn registered(participant: StoredParticipant) -> Self {
        Self::Registered(participant)
    }

    #[must_use]
    pub fn participant(&self) -> Option<&StoredParticipant> {
        match self {
            Self::Anonymous => None,
            Self::Registered(participant) => Some(participant),
        }
    }

    #[must_use]
    pub fn participant_id(&self) -> Option<ParticipantId> {
        self.participant().map(StoredParticipant::id)
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.participant().is_some()
    }

    /// The only teardown transition: back to `Anonymous`.
    pub fn clear(&mut self) {
        *self = Self::Anonymous;
    }
}
