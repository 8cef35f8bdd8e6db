use crate::error::CoreError;
use crate::identity::{validate, validate_id_number, validate_real_name};

#[test]
fn test_valid_id_with_x_check_char() {
    assert!(validate_id_number("11010519491231002X").is_ok());
}

#[test]
fn test_valid_id_with_digit_check_char() {
    // Same prefix with the last payload digit bumped; sum mod 11 becomes 4,
    // which maps to check character '8'.
    assert!(validate_id_number("110105194912310038").is_ok());
}

#[test]
fn test_wrong_check_char_is_checksum_mismatch() {
    let err = validate_id_number("110105194912310020").unwrap_err();
    match err {
        CoreError::IdChecksumMismatch { expected, found, .. } => {
            assert_eq!(expected, 'X');
            assert_eq!(found, '0');
        }
        other => panic!("expected checksum mismatch, got {other:?}"),
    }
}

#[test]
fn test_wrong_length_is_format_error() {
    assert!(matches!(
        validate_id_number("1101051949123100"),
        Err(CoreError::InvalidIdFormat { .. })
    ));
    assert!(matches!(
        validate_id_number("11010519491231002X9"),
        Err(CoreError::InvalidIdFormat { .. })
    ));
}

#[test]
fn test_non_digit_payload_is_format_error() {
    assert!(matches!(
        validate_id_number("1101051949123100AX"),
        Err(CoreError::InvalidIdFormat { .. })
    ));
}

#[test]
fn test_lowercase_check_char_is_format_error() {
    // The character class is checked before the checksum, so a lowercase
    // 'x' never reaches the mismatch path.
    assert!(matches!(
        validate_id_number("11010519491231002x"),
        Err(CoreError::InvalidIdFormat { .. })
    ));
}

#[test]
fn test_empty_name_rejected() {
    assert!(matches!(
        validate_real_name(""),
        Err(CoreError::InvalidRealName { .. })
    ));
    assert!(matches!(
        validate_real_name("   "),
        Err(CoreError::InvalidRealName { .. })
    ));
}

#[test]
fn test_full_submission() {
    assert!(validate("张三", "11010519491231002X").is_ok());
    assert!(validate("", "11010519491231002X").is_err());
}
