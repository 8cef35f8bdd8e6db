use crate::dispatch::replies;

use rn_core::CoreError;
use rn_db::DbError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("Store unavailable: {0}")]
    Store(#[from] DbError),

    #[error("No record found for user {id} {location}")]
    RecordNotFound { id: String, location: ErrorLocation },
}

impl DispatchError {
    /// Converts a failure into the single user-facing reply line.
    ///
    /// Validation and authorization text is safe to show verbatim; store
    /// failures are reported generically with no internal detail.
    pub fn to_reply(&self) -> String {
        match self {
            Self::Validation(CoreError::InvalidRealName { .. }) => {
                "Invalid name: it must not be empty.".to_string()
            }
            Self::Validation(CoreError::InvalidIdFormat { message, .. }) => {
                format!("Invalid ID number: {message}.")
            }
            Self::Validation(CoreError::IdChecksumMismatch { expected, .. }) => format!(
                "Invalid ID number: checksum mismatch (expected check character '{expected}')."
            ),
            Self::Validation(CoreError::InvalidAuthStatus { value, .. }) => format!(
                "Invalid status '{value}'. Valid values: {}.",
                replies::VALID_STATUSES
            ),
            Self::Store(_) => replies::STORE_UNAVAILABLE.to_string(),
            Self::RecordNotFound { .. } => replies::RECORD_NOT_FOUND.to_string(),
        }
    }
}
