use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid real name: {message} {location}")]
    InvalidRealName {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid ID number format: {message} {location}")]
    InvalidIdFormat {
        message: String,
        location: ErrorLocation,
    },

    #[error("ID number checksum mismatch: expected '{expected}', found '{found}' {location}")]
    IdChecksumMismatch {
        expected: char,
        found: char,
        location: ErrorLocation,
    },

    #[error("Invalid auth status: {value} {location}")]
    InvalidAuthStatus {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
