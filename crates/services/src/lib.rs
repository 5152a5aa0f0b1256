#![forbid(unsafe_code)]

pub mod api;
pub mod error;

mod app_services;
mod grading_service;
mod registration_service;
mod results_service;
mod session_service;
mod task_service;

pub use olymp_core::Clock;

pub use api::{
    CompetitionApi, GradingSummary, HttpCompetitionApi, InMemoryCompetitionApi,
    RegistrationOutcome, ResultsSummary,
};
pub use error::{
    ApiError, AppServicesError, GradingError, RegistrationServiceError, ResultsError,
    SessionServiceError, TasksError,
};

pub use app_services::AppServices;
pub use grading_service::GradingService;
pub use registration_service::RegistrationService;
pub use results_service::ResultsService;
pub use session_service::SessionService;
pub use task_service::TaskService;
