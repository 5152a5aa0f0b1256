//! Shared error types for the services crate.

use thiserror::Error;

use olymp_core::model::RegistrationError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the remote competition endpoints.
///
/// Every remote failure collapses into one of two shapes: transport
/// trouble (`Http`/`HttpStatus`) or an application-level rejection
/// carrying the server-supplied message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("{message}")]
    Rejected { message: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `RegistrationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistrationServiceError {
    #[error(transparent)]
    Validation(#[from] RegistrationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionServiceError),
}

/// Errors emitted by `TaskService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TasksError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `GradingService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GradingError {
    /// The session is anonymous; no request was made.
    #[error("registration required before submitting answers")]
    RegistrationRequired,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ResultsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResultsError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
