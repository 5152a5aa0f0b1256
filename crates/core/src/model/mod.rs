mod answer;
mod ids;
mod registration;
mod results;
mod session;
mod task;

pub use answer::{AnswerRecord, AnswerSheet};
pub use ids::{ParseIdError, ParticipantId, TaskId};
pub use registration::{
    DEFAULT_CLASS_LABEL, RegistrationError, RegistrationForm, RegistrationRequest,
    split_school_class,
};
pub use results::{Scoreboard, TaskResult};
pub use session::{ParticipantSession, StoredParticipant};
pub use task::{Task, sort_by_display_order};
