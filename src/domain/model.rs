use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const BASE_LEN: usize = 9;
pub const CPF_LEN: usize = 11;

/// How an identifier is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalForm {
    /// `DDDDDDDDDDD`
    Raw,
    /// `DDD.DDD.DDD-DD`
    #[default]
    Punctuated,
}

impl CanonicalForm {
    pub fn from_formatted(formatted: bool) -> Self {
        if formatted {
            CanonicalForm::Punctuated
        } else {
            CanonicalForm::Raw
        }
    }
}

/// A checksum-valid identifier.
///
/// Values only come out of the validator or the generator, so holding a `Cpf`
/// means both check digits match and the digits are not all identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf {
    digits: [u8; CPF_LEN],
}

impl Cpf {
    pub(crate) fn from_digits(digits: [u8; CPF_LEN]) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> &[u8; CPF_LEN] {
        &self.digits
    }

    pub fn base(&self) -> &[u8] {
        &self.digits[..BASE_LEN]
    }

    pub fn check_digits(&self) -> [u8; 2] {
        [self.digits[BASE_LEN], self.digits[BASE_LEN + 1]]
    }

    pub fn to_raw(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    pub fn render(&self, form: CanonicalForm) -> String {
        match form {
            CanonicalForm::Raw => self.to_raw(),
            CanonicalForm::Punctuated => punctuate_raw(&self.to_raw()),
        }
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(CanonicalForm::Punctuated))
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_raw())
    }
}

/// Groups an 11-character ASCII digit string as `DDD.DDD.DDD-DD`.
pub(crate) fn punctuate_raw(raw: &str) -> String {
    format!("{}.{}.{}-{}", &raw[..3], &raw[3..6], &raw[6..9], &raw[9..])
}
