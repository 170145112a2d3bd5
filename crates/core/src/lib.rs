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

//! The newsletter signup wizard as a pure state machine.
//!
//! The machine never sleeps or spawns. Commands go in through [`apply`];
//! simulated backend calls come back through [`complete`]; the resend
//! cooldown advances through [`tick`]. Each call returns a new
//! [`Session`] and leaves the old one untouched, together with the
//! [`Effect`]s a driver has to run and the analytics events to report.

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, complete, tick};
pub use command::{Command, PendingRequest};
pub use error::CoreError;
pub use state::{
    CODE_RESENT_MESSAGE, Effect, RESEND_COOLDOWN_SECONDS, Session, TickResult, TransitionResult,
    WELCOME_MESSAGE,
};
