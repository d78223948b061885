//! Input masks applied on every keystroke

use crate::constants::{
    BIRTH_DATE_LENGTH, MAX_BIRTH_DATE_DIGITS, MAX_PHONE_DIGITS, VERIFICATION_CODE_LENGTH,
};

fn digits(raw: &str, limit: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(limit).collect()
}

/// Progressive `DD`, `DD.MM`, `DD.MM.YYYY` mask.
///
/// Keeps at most 8 digits, so the output never exceeds 10 characters.
/// Re-applying the mask to its own output is a no-op.
///
/// # Examples
///
/// ```
/// use numerolog_domain::format_birth_date_input;
///
/// assert_eq!(format_birth_date_input("02081995"), "02.08.1995");
/// assert_eq!(format_birth_date_input("0208"), "02.08");
/// assert_eq!(format_birth_date_input("abc02"), "02");
/// ```
#[must_use]
pub fn format_birth_date_input(raw: &str) -> String {
    let digits = digits(raw, MAX_BIRTH_DATE_DIGITS);

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}.{}", &digits[..2], &digits[2..]),
        _ => format!("{}.{}.{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Whether the value is a complete `DD.MM.YYYY` date (shape only).
pub fn is_complete_birth_date(value: &str) -> bool {
    value.len() == BIRTH_DATE_LENGTH
        && value.chars().enumerate().all(|(i, c)| match i {
            2 | 5 => c == '.',
            _ => c.is_ascii_digit(),
        })
}

/// Capitalise every space-separated word.
///
/// Splits on single spaces only, so runs of spaces produce empty words that
/// survive the join: `"ivan  petrov"` keeps its double space.
///
/// # Examples
///
/// ```
/// use numerolog_domain::format_name_input;
///
/// assert_eq!(format_name_input("MARIA"), "Maria");
/// assert_eq!(format_name_input("ivan  petrov"), "Ivan  Petrov");
/// ```
#[must_use]
pub fn format_name_input(raw: &str) -> String {
    raw.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Digits only, at most 15.
#[must_use]
pub fn format_phone_input(raw: &str) -> String {
    digits(raw, MAX_PHONE_DIGITS)
}

/// Digits only, at most 6.
#[must_use]
pub fn format_code_input(raw: &str) -> String {
    digits(raw, VERIFICATION_CODE_LENGTH)
}
