// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidEmail {
        input: String::from("nope"),
    };
    assert_eq!(format!("{err}"), "Please enter a valid email address");

    let err: DomainError = DomainError::InvalidVerificationCode {
        length: 5,
        expected: 6,
    };
    assert_eq!(
        format!("{err}"),
        "Verification code must be exactly 6 digits (got 5)"
    );

    let err: DomainError = DomainError::NoCategoriesSelected;
    assert_eq!(format!("{err}"), "Please select at least one category");

    let err: DomainError = DomainError::InvalidCategory("blank");
    assert_eq!(format!("{err}"), "Invalid category: blank");

    let err: DomainError = DomainError::InvalidFrequency(String::from("daily"));
    assert_eq!(
        format!("{err}"),
        "Unknown frequency 'daily'. Expected weekly, biweekly or monthly"
    );

    let err: DomainError = DomainError::InvalidStageTransition {
        from: String::from("email_entry"),
        to: String::from("success"),
    };
    assert_eq!(format!("{err}"), "Cannot move from email_entry to success");
}

#[test]
fn test_domain_error_field_labels() {
    assert_eq!(
        DomainError::InvalidEmail {
            input: String::new()
        }
        .field(),
        "email"
    );
    assert_eq!(
        DomainError::InvalidVerificationCode {
            length: 0,
            expected: 6
        }
        .field(),
        "verification_code"
    );
    assert_eq!(DomainError::NoCategoriesSelected.field(), "categories");
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::NoCategoriesSelected);
    assert_eq!(err.to_string(), "Please select at least one category");
}
