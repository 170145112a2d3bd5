// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::WizardError;
use signup::{CODE_RESENT_MESSAGE, CoreError, RESEND_COOLDOWN_SECONDS, Session};
use signup_domain::{Stage, SubmissionStatus};
use std::time::Duration;
use tokio::time::sleep;

use super::helpers::{advance_to_verification, create_test_wizard};

#[tokio::test(start_paused = true)]
async fn test_cooldown_starts_at_sixty() {
    let (wizard, _) = create_test_wizard();
    let session: Session = advance_to_verification(&wizard).await;

    assert_eq!(session.resend_cooldown_seconds, RESEND_COOLDOWN_SECONDS);
}

#[tokio::test(start_paused = true)]
async fn test_cooldown_decrements_once_per_second() {
    let (wizard, _) = create_test_wizard();
    advance_to_verification(&wizard).await;

    sleep(Duration::from_millis(500)).await;
    assert_eq!(wizard.snapshot().resend_cooldown_seconds, 60);

    for expected in (55..60).rev() {
        sleep(Duration::from_secs(1)).await;
        assert_eq!(wizard.snapshot().resend_cooldown_seconds, expected);
    }
}

#[tokio::test(start_paused = true)]
async fn test_cooldown_stops_at_zero() {
    let (wizard, _) = create_test_wizard();
    advance_to_verification(&wizard).await;

    sleep(Duration::from_millis(59_500)).await;
    assert_eq!(wizard.snapshot().resend_cooldown_seconds, 1);

    sleep(Duration::from_secs(1)).await;
    assert_eq!(wizard.snapshot().resend_cooldown_seconds, 0);

    sleep(Duration::from_secs(30)).await;
    assert_eq!(wizard.snapshot().resend_cooldown_seconds, 0);
}

#[tokio::test(start_paused = true)]
async fn test_resend_is_noop_during_cooldown() {
    let (wizard, data_layer) = create_test_wizard();
    advance_to_verification(&wizard).await;
    sleep(Duration::from_millis(10_500)).await;

    let before: Session = wizard.snapshot();
    let events_before: usize = data_layer.len();

    let result = wizard.resend_verification_code();

    assert_eq!(
        result,
        Err(WizardError::Refused(CoreError::CooldownActive {
            remaining: 50
        }))
    );
    assert_eq!(wizard.snapshot(), before);
    assert_eq!(wizard.snapshot().message, None);
    assert_eq!(data_layer.len(), events_before);
}

#[tokio::test(start_paused = true)]
async fn test_resend_after_cooldown_restarts_countdown() {
    let (wizard, data_layer) = create_test_wizard();
    advance_to_verification(&wizard).await;
    sleep(Duration::from_millis(60_500)).await;

    wizard.resend_verification_code().unwrap();
    assert_eq!(wizard.snapshot().status, SubmissionStatus::Submitting);

    let session: Session = wizard.settled().await;
    assert_eq!(session.message.as_deref(), Some(CODE_RESENT_MESSAGE));
    assert_eq!(session.resend_cooldown_seconds, RESEND_COOLDOWN_SECONDS);
    assert_eq!(
        data_layer.actions().last().map(String::as_str),
        Some("verification_code_resent")
    );

    sleep(Duration::from_millis(1_500)).await;
    assert_eq!(wizard.snapshot().resend_cooldown_seconds, 59);
}

#[tokio::test(start_paused = true)]
async fn test_countdown_keeps_running_while_verifying() {
    let (wizard, _) = create_test_wizard();
    advance_to_verification(&wizard).await;

    wizard.submit_verification_code("123456").unwrap();
    sleep(Duration::from_millis(1_100)).await;

    let session: Session = wizard.snapshot();
    assert_eq!(session.status, SubmissionStatus::Submitting);
    assert_eq!(session.resend_cooldown_seconds, 59);
}

#[tokio::test(start_paused = true)]
async fn test_success_stops_countdown() {
    let (wizard, _) = create_test_wizard();
    advance_to_verification(&wizard).await;

    wizard.submit_verification_code("123456").unwrap();
    let session: Session = wizard.settled().await;
    assert_eq!(session.stage, Stage::Success);
    assert_eq!(session.resend_cooldown_seconds, 0);

    sleep(Duration::from_secs(5)).await;
    assert_eq!(wizard.snapshot(), session);
}
