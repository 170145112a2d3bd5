// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::PendingRequest;
use serde::Serialize;
use signup_analytics::AnalyticsEvent;
use signup_domain::{EmailAddress, Preferences, Stage, SubmissionStatus};

/// Seconds a subscriber must wait before another code can be sent.
pub const RESEND_COOLDOWN_SECONDS: u32 = 60;

/// Message shown once the subscription is confirmed.
pub const WELCOME_MESSAGE: &str = "Welcome aboard! Your subscription is confirmed.";

/// Message shown after a new code was sent.
pub const CODE_RESENT_MESSAGE: &str = "Verification code resent!";

/// The state of one pass through the signup wizard.
///
/// A session is created when the wizard is shown and discarded when it
/// goes away; nothing survives a reload. This struct is also the
/// read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Session {
    /// Current stage.
    pub stage: Stage,
    /// Accepted email address, set when the email step completes.
    pub email: Option<EmailAddress>,
    /// Delivery preferences.
    pub preferences: Preferences,
    /// Digits entered for verification.
    pub verification_code: String,
    /// Seconds until another code may be requested.
    pub resend_cooldown_seconds: u32,
    /// Outcome of the last asynchronous action.
    pub status: SubmissionStatus,
    /// User-facing message accompanying `status`.
    pub message: Option<String>,
}

impl Session {
    /// Creates a fresh session at the email step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a simulated request is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.status.is_in_flight()
    }

    /// Returns true if another code can be requested now.
    #[must_use]
    pub const fn can_resend(&self) -> bool {
        matches!(self.stage, Stage::Verification)
            && self.resend_cooldown_seconds == 0
            && !self.is_submitting()
    }

    /// Returns true if the preferences form can be submitted.
    #[must_use]
    pub fn can_submit_preferences(&self) -> bool {
        matches!(self.stage, Stage::PreferenceSelection)
            && !self.preferences.categories.is_empty()
            && !self.is_submitting()
    }
}

/// Work the driver must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Wait out the simulated latency, then complete the request.
    Simulate(PendingRequest),
    /// (Re)start the one-second countdown timer.
    StartCountdown,
    /// Stop the countdown timer.
    CancelCountdown,
}

/// The result of a successful transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new session after the transition.
    pub new_session: Session,
    /// Effects for the driver, in order.
    pub effects: Vec<Effect>,
    /// Analytics events produced by this transition.
    pub events: Vec<AnalyticsEvent>,
}

impl TransitionResult {
    pub(crate) const fn new(new_session: Session) -> Self {
        Self {
            new_session,
            effects: Vec::new(),
            events: Vec::new(),
        }
    }

    pub(crate) fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub(crate) fn with_event(mut self, event: AnalyticsEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// The result of one countdown tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    /// The session with the cooldown decremented.
    pub new_session: Session,
    /// True once the cooldown has reached zero.
    pub finished: bool,
}
