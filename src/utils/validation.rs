use log::{debug, warn};

use crate::solver::constants::{CARD_MAX, CARD_MIN, OPERAND_COUNT};
use crate::utils::errors::UtilsError;

/// Check that `numbers` is a playable hand and return it as a fixed array
///
/// # Errors
///
/// Returns an error if the hand does not hold exactly four numbers or if any
/// of them lies outside 1..=13.
pub fn validate_numbers(numbers: &[i64]) -> Result<[i64; OPERAND_COUNT], UtilsError> {
    debug!("Validating hand: {:?}", numbers);

    let hand: [i64; OPERAND_COUNT] = numbers.try_into().map_err(|_| {
        warn!("Hand has {} numbers", numbers.len());
        UtilsError::WrongOperandCount {
            expected: OPERAND_COUNT,
            actual: numbers.len(),
        }
    })?;

    if let Some(&value) = hand.iter().find(|&&n| !(CARD_MIN..=CARD_MAX).contains(&n)) {
        warn!("Hand contains out-of-range number {}", value);
        return Err(UtilsError::OperandOutOfRange {
            value,
            min: CARD_MIN,
            max: CARD_MAX,
        });
    }

    debug!("Hand validation successful");
    Ok(hand)
}
