use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("invalid request")]
    Invalid,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("menu analysis unavailable: {0}")]
    AnalysisUnavailable(String),

    #[error("internal server error")]
    InternalServerError,
}
