use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::api::{CompetitionApi, HttpCompetitionApi};
use crate::error::AppServicesError;
use crate::grading_service::GradingService;
use crate::registration_service::RegistrationService;
use crate::results_service::ResultsService;
use crate::session_service::SessionService;
use crate::task_service::TaskService;

/// Assembles the app-facing services over one API client and one
/// storage backend.
#[derive(Clone)]
pub struct AppServices {
    session_service: SessionService,
    registration_service: Arc<RegistrationService>,
    task_service: Arc<TaskService>,
    grading_service: Arc<GradingService>,
    results_service: Arc<ResultsService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the remote HTTP
    /// endpoints.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let api: Arc<dyn CompetitionApi> = Arc::new(HttpCompetitionApi::new());
        Ok(Self::assemble(api, &storage, clock))
    }

    /// Build services over explicit collaborators. Used by tests and
    /// the view harness.
    #[must_use]
    pub fn assemble(api: Arc<dyn CompetitionApi>, storage: &Storage, clock: Clock) -> Self {
        let session_service = SessionService::new(clock, Arc::clone(&storage.sessions));
        let registration_service = Arc::new(RegistrationService::new(
            Arc::clone(&api),
            session_service.clone(),
        ));
        let task_service = Arc::new(TaskService::new(Arc::clone(&api)));
        let grading_service = Arc::new(GradingService::new(Arc::clone(&api)));
        let results_service = Arc::new(ResultsService::new(api));

        Self {
            session_service,
            registration_service,
            task_service,
            grading_service,
            results_service,
        }
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
