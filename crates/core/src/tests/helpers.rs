// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Effect, PendingRequest, Session, TransitionResult, apply, complete};
use signup_domain::CategoryId;

pub fn category(id: &str) -> CategoryId {
    CategoryId::new(id).unwrap()
}

/// Returns the request carried by the first `Simulate` effect, if any.
pub fn simulated_request(result: &TransitionResult) -> Option<PendingRequest> {
    result.effects.iter().find_map(|effect| match effect {
        Effect::Simulate(request) => Some(request.clone()),
        _ => None,
    })
}

/// Returns the request carried by the first `Simulate` effect.
pub fn pending_request(result: &TransitionResult) -> PendingRequest {
    simulated_request(result).expect("transition did not start a simulated request")
}

/// Applies a command and, if it started a request, completes it.
pub fn apply_and_settle(session: &Session, command: Command) -> Session {
    let result: TransitionResult = apply(session, command).unwrap();
    match simulated_request(&result) {
        Some(request) => complete(&result.new_session, request).unwrap().new_session,
        None => result.new_session,
    }
}

pub fn session_at_preferences() -> Session {
    apply_and_settle(
        &Session::new(),
        Command::SubmitEmail {
            email: String::from("dev@example.com"),
        },
    )
}

pub fn session_at_verification() -> Session {
    let session: Session = apply_and_settle(
        &session_at_preferences(),
        Command::ToggleCategory {
            category: category("web-dev"),
        },
    );
    apply_and_settle(&session, Command::SubmitPreferences)
}

pub fn session_at_success() -> Session {
    apply_and_settle(
        &session_at_verification(),
        Command::SubmitVerificationCode {
            code: String::from("123456"),
        },
    )
}
