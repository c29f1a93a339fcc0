use crate::utils::{UtilsError, validate_numbers};

#[test]
fn test_validate_numbers_valid() {
    assert_eq!(validate_numbers(&[1, 2, 3, 4]), Ok([1, 2, 3, 4]));
    assert_eq!(validate_numbers(&[13, 13, 1, 1]), Ok([13, 13, 1, 1]));
}

#[test]
fn test_validate_numbers_wrong_count() {
    assert_eq!(
        validate_numbers(&[1, 2, 3]),
        Err(UtilsError::WrongOperandCount {
            expected: 4,
            actual: 3
        })
    );
    assert!(validate_numbers(&[]).is_err());
    assert!(validate_numbers(&[1, 2, 3, 4, 5]).is_err());
}

#[test]
fn test_validate_numbers_out_of_range() {
    assert_eq!(
        validate_numbers(&[1, 2, 0, 4]),
        Err(UtilsError::OperandOutOfRange {
            value: 0,
            min: 1,
            max: 13
        })
    );
    assert!(validate_numbers(&[14, 2, 3, 4]).is_err());
    assert!(validate_numbers(&[-3, 2, 3, 4]).is_err());
}
