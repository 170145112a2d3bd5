// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::preferences::Preferences;
use regex::Regex;
use std::sync::LazyLock;

/// Number of digits in a verification code.
pub const VERIFICATION_CODE_LENGTH: usize = 6;

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validates that a string has a conventional `local@domain.tld` shape.
///
/// The check is purely syntactic. No whitespace is allowed anywhere,
/// exactly one `@` must be present, and the domain must contain a dot
/// with at least one character on each side.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the input does not match.
pub fn validate_email(input: &str) -> Result<(), DomainError> {
    if EMAIL_PATTERN.is_match(input) {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail {
            input: input.to_string(),
        })
    }
}

/// Filters keystrokes into the code field.
///
/// Non-digits are dropped and the result is capped at the code length,
/// matching the `maxLength` of the input box.
#[must_use]
pub fn sanitize_code_input(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(VERIFICATION_CODE_LENGTH)
        .collect()
}

/// Validates an already-sanitized verification code.
///
/// # Errors
///
/// Returns `DomainError::InvalidVerificationCode` unless the code is
/// exactly six ASCII digits.
pub fn validate_verification_code(code: &str) -> Result<(), DomainError> {
    let digits: usize = code.chars().filter(char::is_ascii_digit).count();
    if digits != code.chars().count() || digits != VERIFICATION_CODE_LENGTH {
        return Err(DomainError::InvalidVerificationCode {
            length: digits,
            expected: VERIFICATION_CODE_LENGTH,
        });
    }
    Ok(())
}

/// Validates that at least one category is selected.
///
/// # Errors
///
/// Returns `DomainError::NoCategoriesSelected` if the set is empty.
pub fn validate_categories(preferences: &Preferences) -> Result<(), DomainError> {
    if preferences.categories.is_empty() {
        return Err(DomainError::NoCategoriesSelected);
    }
    Ok(())
}
