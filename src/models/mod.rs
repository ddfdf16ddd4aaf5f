pub mod common;
pub mod evaluations;
pub mod profil;
pub mod referentiel;
pub mod utilisateurs;
pub mod validations;

pub use common::response::ApiResponse;

/// Application start time, injected into app data for the health endpoint.
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// Stable business error codes carried in every API response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    InternalServerError = 1002,

    UtilisateurNotFound = 2000,
    UtilisateurEmailConflict = 2001,
    UtilisateurCreationFailed = 2002,
    UtilisateurUpdateFailed = 2003,
    UtilisateurDeleteFailed = 2004,

    EvaluationNotFound = 3000,
    EvaluationCreationFailed = 3001,
    EvaluationUpdateFailed = 3002,
    EvaluationDeleteFailed = 3003,
    ItemNotFound = 3004,

    AttributionInvalid = 4000,
    AttributionConflict = 4001,
    AttributionNotFound = 4002,

    ValidationFailed = 5000,
    NiveauInvalid = 5001,
}
