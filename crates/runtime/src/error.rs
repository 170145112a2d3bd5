// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use signup::CoreError;
use signup_domain::DomainError;
use thiserror::Error;

/// Errors returned by [`Wizard`](crate::Wizard) handles.
///
/// Every variant means the session was left unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    /// The state machine refused the command.
    #[error(transparent)]
    Refused(#[from] CoreError),

    /// The command's arguments could not be parsed.
    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    /// The wizard has been disposed.
    #[error("The wizard has been disposed")]
    Disposed,
}
