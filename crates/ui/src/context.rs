use std::sync::Arc;

use olymp_core::model::ParticipantSession;
use services::{GradingService, RegistrationService, ResultsService, SessionService, TaskService};

pub trait UiApp: Send + Sync {
    /// Session loaded from durable storage before launch.
    fn initial_session(&self) -> ParticipantSession;

    fn session_service(&self) -> SessionService;
    fn registration_service(&self) -> Arc<RegistrationService>;
    fn task_service(&self) -> Arc<TaskService>;
    fn grading_service(&self) -> Arc<GradingService>;
    fn results_service(&self) -> Arc<ResultsService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_session: ParticipantSession,

    session_service: SessionService,
    registration_service: Arc<RegistrationService>,
    task_service: Arc<TaskService>,
    grading_service: Arc<GradingService>,
    results_service: Arc<ResultsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_session: app.initial_session(),
            session_service: app.session_service(),
            registration_service: app.registration_service(),
            task_service: app.task_service(),
            grading_service: app.grading_service(),
            results_service: app.results_service(),
        }
    }

    #[must_use]
    pub fn initial_session(&self) -> ParticipantSession {
        self.initial_session.clone()
    }

    #[must_use]
    pub fn session_service(&self) -> SessionService {
        self.session_service.clone()
    }

    #[must_use]
    pub fn registration_service(&self) -> Arc<RegistrationService> {
        Arc::clone(&self.registration_service)
    }

    #[must_use]
    pub fn task_service(&self) -> Arc<TaskService> {
        Arc::clone(&self.task_service)
    }

    #[must_use]
    pub fn grading_service(&self) -> Arc<GradingService> {
        Arc::clone(&self.grading_service)
    }

    #[must_use]
    pub fn results_service(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results_service)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
