//! Real-name identity validation.
//!
//! The 18-character national ID carries a weighted mod-11 check character
//! (ISO 7064 style) over its first 17 digits. Validation is pure: no
//! registry lookup is performed on the name, and format failures are
//! reported separately from checksum failures so callers can give an
//! actionable message.

use crate::error::{CoreError, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const ID_NUMBER_LEN: usize = 18;

/// Positional weights applied to digits 1-17.
const ID_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check characters indexed by the weighted sum mod 11.
const ID_CHECK_CHARS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Validates a full identity submission: name first, then ID number.
#[track_caller]
pub fn validate(name: &str, id_number: &str) -> CoreResult<()> {
    validate_real_name(name)?;
    validate_id_number(id_number)
}

/// Names must be non-empty after trimming; nothing more is checked.
#[track_caller]
pub fn validate_real_name(name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::InvalidRealName {
            message: "name must not be empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Validates length, character classes, and the check character.
#[track_caller]
pub fn validate_id_number(id_number: &str) -> CoreResult<()> {
    let chars: Vec<char> = id_number.chars().collect();

    if chars.len() != ID_NUMBER_LEN {
        return Err(CoreError::InvalidIdFormat {
            message: format!(
                "expected {ID_NUMBER_LEN} characters, got {}",
                chars.len()
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if !chars[..17].iter().all(char::is_ascii_digit) {
        return Err(CoreError::InvalidIdFormat {
            message: "first 17 characters must be ASCII digits".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let found = chars[17];
    if !found.is_ascii_digit() && found != 'X' {
        return Err(CoreError::InvalidIdFormat {
            message: "check character must be a digit or uppercase 'X'".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let expected = check_char(&chars[..17]);
    if found != expected {
        return Err(CoreError::IdChecksumMismatch {
            expected,
            found,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

fn check_char(digits: &[char]) -> char {
    let sum: u32 = digits
        .iter()
        .zip(ID_WEIGHTS)
        .map(|(c, weight)| c.to_digit(10).unwrap_or(0) * weight)
        .sum();

    ID_CHECK_CHARS[(sum % 11) as usize]
}
