use crate::domain::model::{punctuate_raw, CPF_LEN};
use regex::Regex;
use std::sync::LazyLock;

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("non-digit pattern is valid"));

/// Removes every character that is not an ASCII decimal digit.
pub fn strip_non_digits(input: &str) -> String {
    NON_DIGITS.replace_all(input, "").into_owned()
}

/// Renders an 11-digit RAW string as `DDD.DDD.DDD-DD`.
///
/// Returns `None` unless `raw` is exactly 11 ASCII digits. No checksum is applied.
pub fn punctuate(raw: &str) -> Option<String> {
    if raw.len() != CPF_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(punctuate_raw(raw))
}

/// Normalizes arbitrary input and punctuates it when it holds exactly 11 digits.
pub fn format_input(input: &str) -> Option<String> {
    punctuate(&strip_non_digits(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_non_digits() {
        assert_eq!(strip_non_digits("529.982.247-25"), "52998224725");
        assert_eq!(strip_non_digits(" 529 982 247 25 "), "52998224725");
        assert_eq!(strip_non_digits("abc"), "");
        assert_eq!(strip_non_digits(""), "");
        assert_eq!(strip_non_digits("١٢٣4"), "4");
    }

    #[test]
    fn test_strip_is_noop_on_raw() {
        assert_eq!(strip_non_digits("52998224725"), "52998224725");
    }

    #[test]
    fn test_punctuate() {
        assert_eq!(punctuate("52998224725").as_deref(), Some("529.982.247-25"));
        assert_eq!(punctuate("5299822472"), None);
        assert_eq!(punctuate("529982247255"), None);
        assert_eq!(punctuate("529.982.247"), None);
    }

    #[test]
    fn test_punctuate_ignores_checksum() {
        assert_eq!(punctuate("53476490097").as_deref(), Some("534.764.900-97"));
    }

    #[test]
    fn test_format_input_regroups_any_layout() {
        assert_eq!(format_input("5299-8224-725").as_deref(), Some("529.982.247-25"));
        assert_eq!(format_input("12345"), None);
    }
}
