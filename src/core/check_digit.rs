//! Weighted-sum modulo-11 check digit.
//!
//! For a sequence of `L` digits the first digit is weighted `L + 1`, the next
//! `L`, and so on down to 2. The check digit is `11 - (sum mod 11)`, except
//! that remainders 0 and 1 both map to 0.

use crate::domain::model::{BASE_LEN, CPF_LEN};
use crate::utils::error::{CpfError, Result};

const MODULUS: u32 = 11;

/// Computes one check digit over a string of ASCII decimal digits.
///
/// Fails with [`CpfError::InvalidInput`] on an empty string or on any
/// character outside `'0'..='9'`.
pub fn compute_check_digit(digits: &str) -> Result<u8> {
    if digits.is_empty() {
        return Err(CpfError::InvalidInput {
            message: "cannot compute a check digit over an empty sequence".to_string(),
        });
    }

    let values = digits
        .chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| CpfError::InvalidInput {
                    message: format!("'{}' at position {} is not a decimal digit", c, position),
                })
        })
        .collect::<Result<Vec<u8>>>()?;

    Ok(check_digit(&values))
}

/// Check digit over digit values that are already known to be in `0..=9`.
pub fn check_digit(digits: &[u8]) -> u8 {
    debug_assert!(digits.iter().all(|d| *d <= 9));

    let first_weight = digits.len() as u32 + 1;
    let total: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| (first_weight - i as u32) * u32::from(*d))
        .sum();

    let remainder = total % MODULUS;
    if remainder < 2 {
        0
    } else {
        (MODULUS - remainder) as u8
    }
}

/// Appends both check digits to a base. The second digit covers the first.
pub fn append_check_digits(base: [u8; BASE_LEN]) -> [u8; CPF_LEN] {
    let mut digits = [0u8; CPF_LEN];
    digits[..BASE_LEN].copy_from_slice(&base);
    digits[BASE_LEN] = check_digit(&digits[..BASE_LEN]);
    digits[BASE_LEN + 1] = check_digit(&digits[..BASE_LEN + 1]);
    digits
}
