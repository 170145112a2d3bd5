// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, PendingRequest};
use crate::error::CoreError;
use crate::state::{
    CODE_RESENT_MESSAGE, Effect, RESEND_COOLDOWN_SECONDS, Session, TickResult, TransitionResult,
    WELCOME_MESSAGE,
};
use signup_analytics::AnalyticsEvent;
use signup_domain::{
    DomainError, EmailAddress, Stage, SubmissionStatus, VerificationCode,
    sanitize_code_input, validate_categories,
};
use tracing::debug;

/// Records a validation failure on a copy of the session.
fn rejected(mut session: Session, err: &DomainError) -> TransitionResult {
    debug!(field = err.field(), error = %err, "Validation failed");
    session.status = SubmissionStatus::Failed;
    session.message = Some(err.to_string());
    TransitionResult::new(session)
        .with_event(AnalyticsEvent::newsletter("validation_failed").with_label(err.field()))
}

/// Marks a copy of the session as submitting `request`.
fn submitting(mut session: Session, request: PendingRequest) -> TransitionResult {
    session.status = SubmissionStatus::Submitting;
    session.message = None;
    TransitionResult::new(session).with_effect(Effect::Simulate(request))
}

fn category_count(session: &Session) -> i64 {
    i64::try_from(session.preferences.categories.len()).unwrap_or(i64::MAX)
}

/// Applies a command to the current session, producing a new session.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session, the effects the
///   driver must run and the analytics events to report
/// * `Err(CoreError)` if the command is refused
///
/// Input that fails validation is not refused. It produces a session
/// with `status = Failed` and a message, so the form can show it.
///
/// # Errors
///
/// Returns an error if:
/// - A simulated request is already in flight
/// - The command does not belong to the current stage
/// - A new code is requested while the cooldown is running
pub fn apply(session: &Session, command: Command) -> Result<TransitionResult, CoreError> {
    if session.is_submitting() {
        return Err(CoreError::SubmissionInFlight {
            stage: session.stage,
        });
    }

    if command.stage() != session.stage {
        return Err(CoreError::InvalidStage {
            operation: command.name(),
            stage: session.stage,
        });
    }

    let mut next: Session = session.clone();

    match command {
        Command::SubmitEmail { email } => match EmailAddress::parse(&email) {
            Ok(email) => Ok(submitting(next, PendingRequest::Subscribe { email })
                .with_event(AnalyticsEvent::newsletter("email_submitted"))),
            Err(err) => Ok(rejected(next, &err)),
        },
        Command::UpdatePreferences { update } => {
            next.preferences = next.preferences.merged(update);
            Ok(TransitionResult::new(next))
        }
        Command::ToggleCategory { category } => {
            let selected: bool = next.preferences.toggle_category(category.clone());
            debug!(%category, selected, "Toggled category");
            Ok(TransitionResult::new(next))
        }
        Command::SubmitPreferences => match validate_categories(&next.preferences) {
            Ok(()) => {
                let event: AnalyticsEvent = AnalyticsEvent::newsletter("preferences_submitted")
                    .with_label(next.preferences.frequency.as_str())
                    .with_value(category_count(&next));
                Ok(submitting(next, PendingRequest::SavePreferences).with_event(event))
            }
            Err(err) => Ok(rejected(next, &err)),
        },
        Command::GoBackToEmail => {
            session.stage.validate_transition(Stage::EmailEntry)?;
            next.stage = Stage::EmailEntry;
            next.status = SubmissionStatus::Idle;
            next.message = None;
            Ok(TransitionResult::new(next)
                .with_event(AnalyticsEvent::newsletter("returned_to_email")))
        }
        Command::EnterVerificationCode { input } => {
            next.verification_code = sanitize_code_input(&input);
            Ok(TransitionResult::new(next))
        }
        Command::SubmitVerificationCode { code } => {
            next.verification_code = VerificationCode::sanitize(&code);
            match VerificationCode::parse(&next.verification_code) {
                Ok(code) => Ok(submitting(next, PendingRequest::Verify { code })),
                Err(err) => Ok(rejected(next, &err)),
            }
        }
        Command::ResendVerificationCode => {
            if next.resend_cooldown_seconds > 0 {
                return Err(CoreError::CooldownActive {
                    remaining: next.resend_cooldown_seconds,
                });
            }
            Ok(submitting(next, PendingRequest::ResendCode))
        }
        Command::Restart => {
            session.stage.validate_transition(Stage::EmailEntry)?;
            Ok(TransitionResult::new(Session::new())
                .with_effect(Effect::CancelCountdown)
                .with_event(AnalyticsEvent::newsletter("restarted")))
        }
    }
}

/// Completes a simulated request once its latency has elapsed.
///
/// # Errors
///
/// Returns an error if:
/// - Nothing is in flight
/// - The session is no longer at the stage the request was issued from
pub fn complete(session: &Session, request: PendingRequest) -> Result<TransitionResult, CoreError> {
    if !session.is_submitting() {
        return Err(CoreError::NoPendingRequest);
    }

    if request.stage() != session.stage {
        return Err(CoreError::InvalidStage {
            operation: request.name(),
            stage: session.stage,
        });
    }

    let mut next: Session = session.clone();
    next.status = SubmissionStatus::Idle;

    match request {
        PendingRequest::Subscribe { email } => {
            session.stage.validate_transition(Stage::PreferenceSelection)?;
            next.stage = Stage::PreferenceSelection;
            next.email = Some(email);
            Ok(TransitionResult::new(next))
        }
        PendingRequest::SavePreferences => {
            session.stage.validate_transition(Stage::Verification)?;
            next.stage = Stage::Verification;
            next.verification_code.clear();
            next.resend_cooldown_seconds = RESEND_COOLDOWN_SECONDS;
            Ok(TransitionResult::new(next).with_effect(Effect::StartCountdown))
        }
        PendingRequest::Verify { .. } => {
            session.stage.validate_transition(Stage::Success)?;
            next.stage = Stage::Success;
            next.status = SubmissionStatus::Succeeded;
            next.message = Some(String::from(WELCOME_MESSAGE));
            next.verification_code.clear();
            next.resend_cooldown_seconds = 0;
            let event: AnalyticsEvent = AnalyticsEvent::newsletter("subscription_confirmed")
                .with_label(next.preferences.frequency.as_str())
                .with_value(category_count(&next));
            Ok(TransitionResult::new(next)
                .with_effect(Effect::CancelCountdown)
                .with_event(event))
        }
        PendingRequest::ResendCode => {
            next.message = Some(String::from(CODE_RESENT_MESSAGE));
            next.resend_cooldown_seconds = RESEND_COOLDOWN_SECONDS;
            Ok(TransitionResult::new(next)
                .with_effect(Effect::StartCountdown)
                .with_event(AnalyticsEvent::newsletter("verification_code_resent")))
        }
    }
}

/// Advances the resend cooldown by one second.
///
/// # Errors
///
/// Returns `CoreError::CountdownIdle` if the session is not at the
/// verification stage or the cooldown is already zero.
pub fn tick(session: &Session) -> Result<TickResult, CoreError> {
    if session.stage != Stage::Verification || session.resend_cooldown_seconds == 0 {
        return Err(CoreError::CountdownIdle);
    }

    let mut next: Session = session.clone();
    next.resend_cooldown_seconds -= 1;
    let finished: bool = next.resend_cooldown_seconds == 0;

    Ok(TickResult {
        new_session: next,
        finished,
    })
}
