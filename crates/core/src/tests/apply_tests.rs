// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CODE_RESENT_MESSAGE, Command, Effect, PendingRequest, RESEND_COOLDOWN_SECONDS, Session,
    TransitionResult, WELCOME_MESSAGE, apply, complete,
};
use signup_domain::{
    Frequency, NotificationsUpdate, PreferencesUpdate, Stage, SubmissionStatus,
};

use super::helpers::{
    category, pending_request, session_at_preferences, session_at_success,
    session_at_verification,
};

#[test]
fn test_new_session_starts_at_email_entry() {
    let session: Session = Session::new();

    assert_eq!(session.stage, Stage::EmailEntry);
    assert_eq!(session.status, SubmissionStatus::Idle);
    assert_eq!(session.email, None);
    assert_eq!(session.message, None);
    assert_eq!(session.resend_cooldown_seconds, 0);
    assert!(session.verification_code.is_empty());
}

#[test]
fn test_submit_valid_email_starts_subscribe_request() {
    let session: Session = Session::new();
    let result: TransitionResult = apply(
        &session,
        Command::SubmitEmail {
            email: String::from("dev@example.com"),
        },
    )
    .unwrap();

    assert_eq!(result.new_session.stage, Stage::EmailEntry);
    assert_eq!(result.new_session.status, SubmissionStatus::Submitting);
    assert_eq!(result.new_session.email, None);
    assert!(matches!(
        pending_request(&result),
        PendingRequest::Subscribe { ref email } if email.as_str() == "dev@example.com"
    ));
    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].action, "email_submitted");
}

#[test]
fn test_apply_does_not_mutate_input_session() {
    let session: Session = Session::new();
    let before: Session = session.clone();

    let _ = apply(
        &session,
        Command::SubmitEmail {
            email: String::from("dev@example.com"),
        },
    )
    .unwrap();

    assert_eq!(session, before);
}

#[test]
fn test_subscribe_completion_moves_to_preferences() {
    let session: Session = Session::new();
    let submitted: TransitionResult = apply(
        &session,
        Command::SubmitEmail {
            email: String::from("dev@example.com"),
        },
    )
    .unwrap();

    let completed: TransitionResult =
        complete(&submitted.new_session, pending_request(&submitted)).unwrap();

    assert_eq!(completed.new_session.stage, Stage::PreferenceSelection);
    assert_eq!(completed.new_session.status, SubmissionStatus::Idle);
    assert_eq!(
        completed.new_session.email.as_ref().map(|e| e.as_str()),
        Some("dev@example.com")
    );
    assert!(completed.effects.is_empty());
}

#[test]
fn test_update_preferences_merges_synchronously() {
    let session: Session = session_at_preferences();
    let result: TransitionResult = apply(
        &session,
        Command::UpdatePreferences {
            update: PreferencesUpdate {
                frequency: Some(Frequency::Biweekly),
                categories: None,
                notifications: Some(NotificationsUpdate {
                    community_events: Some(true),
                    ..NotificationsUpdate::default()
                }),
            },
        },
    )
    .unwrap();

    assert_eq!(result.new_session.preferences.frequency, Frequency::Biweekly);
    assert!(result.new_session.preferences.notifications.community_events);
    assert!(result.new_session.preferences.notifications.new_posts);
    assert_eq!(result.new_session.status, SubmissionStatus::Idle);
    assert!(result.effects.is_empty());
}

#[test]
fn test_toggle_category_does_not_change_stage() {
    let session: Session = session_at_preferences();
    let result: TransitionResult = apply(
        &session,
        Command::ToggleCategory {
            category: category("rust"),
        },
    )
    .unwrap();

    assert_eq!(result.new_session.stage, Stage::PreferenceSelection);
    assert!(result.new_session.preferences.has_category(&category("rust")));
}

#[test]
fn test_submit_preferences_reports_frequency_and_count() {
    let mut session: Session = session_at_preferences();
    session.preferences.toggle_category(category("rust"));
    session.preferences.toggle_category(category("devops"));

    let result: TransitionResult = apply(&session, Command::SubmitPreferences).unwrap();

    assert_eq!(result.new_session.status, SubmissionStatus::Submitting);
    assert_eq!(pending_request(&result), PendingRequest::SavePreferences);
    let event = &result.events[0];
    assert_eq!(event.action, "preferences_submitted");
    assert_eq!(event.label.as_deref(), Some("weekly"));
    assert_eq!(event.value, Some(2));
}

#[test]
fn test_save_preferences_completion_starts_cooldown() {
    let mut session: Session = session_at_preferences();
    session.preferences.toggle_category(category("rust"));
    let submitted: TransitionResult = apply(&session, Command::SubmitPreferences).unwrap();

    let completed: TransitionResult =
        complete(&submitted.new_session, PendingRequest::SavePreferences).unwrap();

    assert_eq!(completed.new_session.stage, Stage::Verification);
    assert_eq!(completed.new_session.status, SubmissionStatus::Idle);
    assert_eq!(
        completed.new_session.resend_cooldown_seconds,
        RESEND_COOLDOWN_SECONDS
    );
    assert_eq!(completed.effects, vec![Effect::StartCountdown]);
}

#[test]
fn test_go_back_keeps_email() {
    let session: Session = session_at_preferences();
    let result: TransitionResult = apply(&session, Command::GoBackToEmail).unwrap();

    assert_eq!(result.new_session.stage, Stage::EmailEntry);
    assert_eq!(result.new_session.status, SubmissionStatus::Idle);
    assert_eq!(result.new_session.email, session.email);
    assert_eq!(result.events[0].action, "returned_to_email");
}

#[test]
fn test_go_back_clears_failure() {
    let session: Session = session_at_preferences();
    let failed: Session = apply(&session, Command::SubmitPreferences)
        .unwrap()
        .new_session;
    assert_eq!(failed.status, SubmissionStatus::Failed);

    let result: TransitionResult = apply(&failed, Command::GoBackToEmail).unwrap();

    assert_eq!(result.new_session.status, SubmissionStatus::Idle);
    assert_eq!(result.new_session.message, None);
}

#[test]
fn test_enter_verification_code_filters_input() {
    let session: Session = session_at_verification();
    let result: TransitionResult = apply(
        &session,
        Command::EnterVerificationCode {
            input: String::from("12ab34-5678"),
        },
    )
    .unwrap();

    assert_eq!(result.new_session.verification_code, "123456");
    assert_eq!(result.new_session.status, SubmissionStatus::Idle);
}

#[test]
fn test_submit_valid_code_starts_verify_request() {
    let session: Session = session_at_verification();
    let result: TransitionResult = apply(
        &session,
        Command::SubmitVerificationCode {
            code: String::from("123 456"),
        },
    )
    .unwrap();

    assert_eq!(result.new_session.status, SubmissionStatus::Submitting);
    assert_eq!(result.new_session.verification_code, "123456");
    assert!(matches!(
        pending_request(&result),
        PendingRequest::Verify { ref code } if code.as_str() == "123456"
    ));
}

#[test]
fn test_verify_completion_confirms_subscription() {
    let session: Session = session_at_verification();
    let submitted: TransitionResult = apply(
        &session,
        Command::SubmitVerificationCode {
            code: String::from("123456"),
        },
    )
    .unwrap();

    let completed: TransitionResult =
        complete(&submitted.new_session, pending_request(&submitted)).unwrap();

    assert_eq!(completed.new_session.stage, Stage::Success);
    assert_eq!(completed.new_session.status, SubmissionStatus::Succeeded);
    assert_eq!(
        completed.new_session.message.as_deref(),
        Some(WELCOME_MESSAGE)
    );
    assert!(completed.new_session.verification_code.is_empty());
    assert_eq!(completed.new_session.resend_cooldown_seconds, 0);
    assert_eq!(completed.effects, vec![Effect::CancelCountdown]);
    assert_eq!(completed.events[0].action, "subscription_confirmed");
}

#[test]
fn test_resend_after_cooldown_restarts_it() {
    let mut session: Session = session_at_verification();
    session.resend_cooldown_seconds = 0;

    let submitted: TransitionResult = apply(&session, Command::ResendVerificationCode).unwrap();
    assert_eq!(submitted.new_session.status, SubmissionStatus::Submitting);
    assert_eq!(pending_request(&submitted), PendingRequest::ResendCode);

    let completed: TransitionResult =
        complete(&submitted.new_session, PendingRequest::ResendCode).unwrap();

    assert_eq!(completed.new_session.stage, Stage::Verification);
    assert_eq!(completed.new_session.status, SubmissionStatus::Idle);
    assert_eq!(
        completed.new_session.message.as_deref(),
        Some(CODE_RESENT_MESSAGE)
    );
    assert_eq!(
        completed.new_session.resend_cooldown_seconds,
        RESEND_COOLDOWN_SECONDS
    );
    assert_eq!(completed.effects, vec![Effect::StartCountdown]);
    assert_eq!(completed.events[0].action, "verification_code_resent");
}

#[test]
fn test_restart_returns_fresh_session() {
    let session: Session = session_at_success();
    let result: TransitionResult = apply(&session, Command::Restart).unwrap();

    assert_eq!(result.new_session, Session::new());
    assert_eq!(result.effects, vec![Effect::CancelCountdown]);
    assert_eq!(result.events[0].action, "restarted");
}

#[test]
fn test_session_snapshot_serializes_for_presentation() {
    let session: Session = session_at_verification();
    let json: serde_json::Value = serde_json::to_value(&session).unwrap();

    assert_eq!(json["stage"], "verification");
    assert_eq!(json["status"], "idle");
    assert_eq!(json["email"], "dev@example.com");
    assert_eq!(json["resend_cooldown_seconds"], 60);
    assert_eq!(json["preferences"]["frequency"], "weekly");
    assert_eq!(json["preferences"]["categories"][0], "web-dev");
}
