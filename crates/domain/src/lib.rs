// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod preferences;
mod stage;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use preferences::{NotificationSettings, NotificationsUpdate, Preferences, PreferencesUpdate};
pub use stage::{Stage, SubmissionStatus};
pub use types::{
    Category, CategoryId, EmailAddress, Frequency, VerificationCode, default_categories,
};
pub use validation::{
    VERIFICATION_CODE_LENGTH, sanitize_code_input, validate_categories,
    validate_email, validate_verification_code,
};
