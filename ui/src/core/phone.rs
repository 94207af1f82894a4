//! Phone number shape check used by the login form.
//!
//! Accepted shape: `+` followed by a 1–3 digit country prefix and a 6–12 digit
//! national number. Since both parts are plain digits, that is the same as
//! `+` followed by 7 to 15 ASCII digits. Whitespace anywhere is ignored.

const MIN_DIGITS: usize = 1 + 6;
const MAX_DIGITS: usize = 3 + 12;

/// Remove every whitespace character (`"+261 34 12 345 67"` → `"+261341234567"`).
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `true` when `raw` has the international shape described in the module docs.
pub fn validate_phone(raw: &str) -> bool {
    let normalized = normalize_phone(raw);
    let Some(digits) = normalized.strip_prefix('+') else {
        return false;
    };

    (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}
