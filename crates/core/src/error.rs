// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use signup_domain::{DomainError, Stage};

/// Reasons a command is refused.
///
/// A refused command leaves the session exactly as it was. Input that
/// merely fails validation is not an error: it is recorded on the
/// session as a `Failed` status with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A simulated request is already in flight.
    SubmissionInFlight {
        /// The stage that is submitting.
        stage: Stage,
    },
    /// The operation is not available at the current stage.
    InvalidStage {
        /// The operation that was attempted.
        operation: &'static str,
        /// The stage the session is in.
        stage: Stage,
    },
    /// A new code cannot be requested until the cooldown expires.
    CooldownActive {
        /// Seconds left on the cooldown.
        remaining: u32,
    },
    /// A completion arrived while nothing was in flight.
    NoPendingRequest,
    /// A countdown tick arrived while no cooldown was running.
    CountdownIdle,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SubmissionInFlight { stage } => {
                write!(f, "A submission is already in flight at stage {stage}")
            }
            Self::InvalidStage { operation, stage } => {
                write!(f, "'{operation}' is not available at stage {stage}")
            }
            Self::CooldownActive { remaining } => {
                write!(f, "A new code can be requested in {remaining}s")
            }
            Self::NoPendingRequest => write!(f, "No request is in flight"),
            Self::CountdownIdle => write!(f, "No resend cooldown is running"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
