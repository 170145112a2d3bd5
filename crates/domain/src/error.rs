// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
///
/// The `Display` output of each variant is the message shown to the
/// subscriber, so it is worded for people rather than logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The email address does not have a `local@domain.tld` shape.
    #[error("Please enter a valid email address")]
    InvalidEmail {
        /// The rejected input.
        input: String,
    },

    /// The verification code does not contain exactly six digits.
    #[error("Verification code must be exactly {expected} digits (got {length})")]
    InvalidVerificationCode {
        /// The number of digits left after sanitizing.
        length: usize,
        /// The required number of digits.
        expected: usize,
    },

    /// A preference update was submitted with no categories selected.
    #[error("Please select at least one category")]
    NoCategoriesSelected,

    /// A category identifier is empty.
    #[error("Invalid category: {0}")]
    InvalidCategory(&'static str),

    /// An unknown delivery frequency was requested.
    #[error("Unknown frequency '{0}'. Expected weekly, biweekly or monthly")]
    InvalidFrequency(String),

    /// A stage transition outside the wizard's edge set.
    #[error("Cannot move from {from} to {to}")]
    InvalidStageTransition {
        /// The stage the session is in.
        from: String,
        /// The requested stage.
        to: String,
    },
}

impl DomainError {
    /// The form field this error belongs to.
    ///
    /// Used as the label of `validation_failed` analytics events.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail { .. } => "email",
            Self::InvalidVerificationCode { .. } => "verification_code",
            Self::NoCategoriesSelected | Self::InvalidCategory(_) => "categories",
            Self::InvalidFrequency(_) => "frequency",
            Self::InvalidStageTransition { .. } => "stage",
        }
    }
}
