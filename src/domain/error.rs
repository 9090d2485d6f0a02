// src/domain/error.rs
use thiserror::Error;

/// Failures raised by the parking core. The message is what the user sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParkingError {
    /// Entry requested for a plate that is already parked.
    #[error("{0}")]
    Conflict(String),

    /// Exit requested for a plate that is not parked.
    #[error("{0}")]
    NotFound(String),

    /// Unknown vehicle type, or a required field missing from the request.
    #[error("{0}")]
    InvalidInput(String),

    /// A record was asked to leave twice.
    #[error("{0}")]
    InvariantViolation(String),

    /// The repository could not complete the operation.
    #[error("storage failure: {0}")]
    Storage(String),
}

pub type ParkingResult<T> = Result<T, ParkingError>;

impl ParkingError {
    /// Errors the user caused and can correct (as opposed to storage trouble).
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, ParkingError::Storage(_))
    }
}
