// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use signup_domain::{CategoryId, EmailAddress, PreferencesUpdate, Stage, VerificationCode};

/// A command represents subscriber intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the email form.
    SubmitEmail {
        /// The raw input.
        email: String,
    },
    /// Merge a partial update into the preferences.
    UpdatePreferences {
        /// Fields to change.
        update: PreferencesUpdate,
    },
    /// Select or deselect a category.
    ToggleCategory {
        /// The category to flip.
        category: CategoryId,
    },
    /// Submit the preferences form.
    SubmitPreferences,
    /// Return from preferences to the email form.
    GoBackToEmail,
    /// Keystrokes in the verification code box.
    EnterVerificationCode {
        /// The raw contents of the box.
        input: String,
    },
    /// Submit a verification code.
    SubmitVerificationCode {
        /// The raw input; non-digits are stripped.
        code: String,
    },
    /// Ask for a new verification code.
    ResendVerificationCode,
    /// Start over after a confirmed subscription.
    Restart,
}

impl Command {
    /// Name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SubmitEmail { .. } => "submit_email",
            Self::UpdatePreferences { .. } => "update_preferences",
            Self::ToggleCategory { .. } => "toggle_category",
            Self::SubmitPreferences => "submit_preferences",
            Self::GoBackToEmail => "go_back_to_email",
            Self::EnterVerificationCode { .. } => "enter_verification_code",
            Self::SubmitVerificationCode { .. } => "submit_verification_code",
            Self::ResendVerificationCode => "resend_verification_code",
            Self::Restart => "restart",
        }
    }

    /// The only stage at which this command is accepted.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::SubmitEmail { .. } => Stage::EmailEntry,
            Self::UpdatePreferences { .. }
            | Self::ToggleCategory { .. }
            | Self::SubmitPreferences
            | Self::GoBackToEmail => Stage::PreferenceSelection,
            Self::EnterVerificationCode { .. }
            | Self::SubmitVerificationCode { .. }
            | Self::ResendVerificationCode => Stage::Verification,
            Self::Restart => Stage::Success,
        }
    }
}

/// A simulated backend call awaiting completion.
///
/// These stand in for `POST /subscribe` and `POST /verify`. The driver
/// waits out a fixed latency and then hands the request back to
/// [`complete`](crate::complete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    /// Register the email address.
    Subscribe {
        /// The validated address.
        email: EmailAddress,
    },
    /// Store the chosen preferences and send a code.
    SavePreferences,
    /// Check the verification code.
    Verify {
        /// The validated code.
        code: VerificationCode,
    },
    /// Send another verification code.
    ResendCode,
}

impl PendingRequest {
    /// Name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Subscribe { .. } => "subscribe",
            Self::SavePreferences => "save_preferences",
            Self::Verify { .. } => "verify",
            Self::ResendCode => "resend_code",
        }
    }

    /// The stage the session must still be in when the request completes.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Subscribe { .. } => Stage::EmailEntry,
            Self::SavePreferences => Stage::PreferenceSelection,
            Self::Verify { .. } | Self::ResendCode => Stage::Verification,
        }
    }
}
