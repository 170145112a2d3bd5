// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wizard stages and submission status.
//!
//! A session moves forward through the four stages of the signup flow.
//! The only backward edges are returning from preference selection to
//! the email form, and restarting once the subscription is confirmed.
//! `SubmissionStatus` is orthogonal to the stage and describes the last
//! asynchronous action.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The stage of the signup wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Collecting the subscriber's email address.
    #[default]
    EmailEntry,
    /// Choosing frequency, categories and notifications.
    PreferenceSelection,
    /// Waiting for the six-digit verification code.
    Verification,
    /// Subscription confirmed.
    Success,
}

impl Stage {
    /// Returns the string representation of the stage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmailEntry => "email_entry",
            Self::PreferenceSelection => "preference_selection",
            Self::Verification => "verification",
            Self::Success => "success",
        }
    }

    /// One-based position of the stage, as shown in the progress indicator.
    #[must_use]
    pub const fn step(&self) -> u8 {
        match self {
            Self::EmailEntry => 1,
            Self::PreferenceSelection => 2,
            Self::Verification => 3,
            Self::Success => 4,
        }
    }

    /// Returns true if the signup is complete.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true if `next` is reachable from this stage in one step.
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::EmailEntry, Self::PreferenceSelection)
                | (Self::PreferenceSelection, Self::Verification | Self::EmailEntry)
                | (Self::Verification, Self::Success)
                | (Self::Success, Self::EmailEntry)
        )
    }

    /// Validates a transition from this stage to `next`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStageTransition` if the edge does not exist.
    pub fn validate_transition(&self, next: Self) -> Result<(), DomainError> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(DomainError::InvalidStageTransition {
                from: self.as_str().to_string(),
                to: next.as_str().to_string(),
            })
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the most recent asynchronous action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A simulated request is in flight.
    Submitting,
    /// The subscription was confirmed.
    Succeeded,
    /// The last submission was rejected by validation.
    Failed,
}

impl SubmissionStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    /// Returns true while a request is in flight.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
