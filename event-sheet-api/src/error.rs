use std::error::Error as StdError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No empty note slot left for event {0}")]
    CapacityExhausted(String),

    #[error("Operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ApiError {
    /// Wrap a backing-store failure with the name of the operation that hit it.
    pub fn operation_failed(
        context: impl Into<String>,
        source: Box<dyn StdError + Send + Sync>,
    ) -> Self {
        ApiError::OperationFailed {
            context: context.into(),
            source,
        }
    }

    /// Status code the HTTP boundary answers with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ApiError::ValidationError(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::CapacityExhausted(_) | ApiError::OperationFailed { .. } => 500,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
