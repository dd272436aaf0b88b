//! Error type returned by the service layer

/// Failure of a service operation; no state was changed
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Session error: {message}")]
    Session { message: String },
}

impl ServiceError {
    pub fn session(e: anyhow::Error) -> Self {
        ServiceError::Session {
            message: format!("{:#}", e),
        }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(e: anyhow::Error) -> Self {
        ServiceError::Storage {
            message: format!("{:#}", e),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
