use crate::core::check_digit::append_check_digits;
use crate::core::format::strip_non_digits;
use crate::domain::model::{Cpf, BASE_LEN, CPF_LEN};
use std::str::FromStr;
use thiserror::Error;

/// Why an input is not a valid identifier. These are ordinary outcomes, not failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("expected 11 digits, found {found}")]
    WrongLength { found: usize },

    #[error("all digits are identical")]
    RepeatedDigits,

    #[error("check digits {found:?} do not match expected {expected:?}")]
    CheckDigitMismatch { expected: [u8; 2], found: [u8; 2] },
}

/// Checks an input in any layout and returns the identifier it encodes.
///
/// Non-digit characters are discarded first, so `529.982.247-25`,
/// `52998224725` and `529 982 247 25` all check the same digits.
pub fn check(input: &str) -> Result<Cpf, Rejection> {
    let normalized = strip_non_digits(input);
    if normalized.len() != CPF_LEN {
        return Err(Rejection::WrongLength {
            found: normalized.len(),
        });
    }

    let mut supplied = [0u8; CPF_LEN];
    for (slot, b) in supplied.iter_mut().zip(normalized.bytes()) {
        *slot = b - b'0';
    }

    if supplied.iter().all(|d| *d == supplied[0]) {
        return Err(Rejection::RepeatedDigits);
    }

    let mut base = [0u8; BASE_LEN];
    base.copy_from_slice(&supplied[..BASE_LEN]);
    let expected = append_check_digits(base);

    if expected != supplied {
        return Err(Rejection::CheckDigitMismatch {
            expected: [expected[BASE_LEN], expected[BASE_LEN + 1]],
            found: [supplied[BASE_LEN], supplied[BASE_LEN + 1]],
        });
    }

    Ok(Cpf::from_digits(supplied))
}

/// Returns whether `input` is a valid identifier. Never fails.
pub fn validate(input: &str) -> bool {
    match check(input) {
        Ok(cpf) => {
            tracing::debug!(cpf = %cpf, "identifier accepted");
            true
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "identifier rejected");
            false
        }
    }
}

impl FromStr for Cpf {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_known_identifiers() {
        assert!(validate("52998224725"));
        assert!(validate("12345678909"));
        assert!(validate("53476490033"));
        assert!(validate("01000000109"));
        assert!(validate("10000000108"));
        assert!(validate("00000010820"));
    }

    #[test]
    fn test_accepts_punctuated_and_loose_layouts() {
        assert!(validate("529.982.247-25"));
        assert!(validate("534.764.900-33"));
        assert!(validate(" 529 982 247 25\n"));
        assert!(validate("5299822-4725"));
    }

    #[test]
    fn test_rejects_wrong_check_digits() {
        assert!(!validate("52998224726"));
        assert!(!validate("52998224715"));
        assert_eq!(
            check("53476490098"),
            Err(Rejection::CheckDigitMismatch {
                expected: [3, 3],
                found: [9, 8],
            })
        );
        assert!(!validate("53476490097"));
    }

    #[test]
    fn test_rejects_repeated_digits() {
        for d in 0..=9u8 {
            let repeated: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            assert_eq!(check(&repeated), Err(Rejection::RepeatedDigits), "{}", repeated);
            assert!(!validate(&repeated));
        }
        assert!(!validate("111.111.111-11"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(check("12345"), Err(Rejection::WrongLength { found: 5 }));
        assert_eq!(check(""), Err(Rejection::WrongLength { found: 0 }));
        assert_eq!(check("529982247250"), Err(Rejection::WrongLength { found: 12 }));
        assert!(!validate("12345"));
        assert!(!validate(""));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(check("abcdefghijk"), Err(Rejection::WrongLength { found: 0 }));
        assert!(!validate("abcdefghijk"));
    }

    #[test]
    fn test_from_str() {
        let cpf: Cpf = "529.982.247-25".parse().unwrap();
        assert_eq!(cpf.to_raw(), "52998224725");
        assert!("52998224726".parse::<Cpf>().is_err());
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::WrongLength { found: 5 }.to_string(),
            "expected 11 digits, found 5"
        );
        assert_eq!(
            Rejection::RepeatedDigits.to_string(),
            "all digits are identical"
        );
        assert_eq!(
            Rejection::CheckDigitMismatch {
                expected: [3, 3],
                found: [9, 7],
            }
            .to_string(),
            "check digits [9, 7] do not match expected [3, 3]"
        );
    }
}
