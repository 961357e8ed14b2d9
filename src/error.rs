use actix_web::http::StatusCode;
use thiserror::Error;

/// Error taxonomy for the service.
/// Failures are tagged by kind so the endpoint layer can map them to a
/// status code without inspecting message text.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client-caused: a required field is missing or empty.
    #[error("{0}")]
    Validation(String),
    /// Server-caused: an insert failed or a cursor could not be opened.
    #[error("{0}")]
    Store(#[from] tokio_postgres::Error),
    /// Server-caused: the cursor failed mid-iteration.
    #[error("error streaming user data: {0}")]
    Stream(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Stream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
