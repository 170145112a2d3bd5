// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use signup::PendingRequest;
use std::time::Duration;

/// Timing of the simulated backend and the resend countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardConfig {
    /// Latency of the simulated subscribe call.
    pub subscribe_latency: Duration,
    /// Latency of the simulated preferences call.
    pub preferences_latency: Duration,
    /// Latency of the simulated verification call.
    pub verify_latency: Duration,
    /// Latency of the simulated resend call.
    pub resend_latency: Duration,
    /// Interval between countdown ticks.
    pub countdown_tick: Duration,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            subscribe_latency: Duration::from_millis(800),
            preferences_latency: Duration::from_millis(800),
            verify_latency: Duration::from_millis(1500),
            resend_latency: Duration::from_millis(800),
            countdown_tick: Duration::from_secs(1),
        }
    }
}

impl WizardConfig {
    /// Uses `latency` for every call except verification, which takes 1.5×.
    #[must_use]
    pub fn with_uniform_latency(self, latency: Duration) -> Self {
        Self {
            subscribe_latency: latency,
            preferences_latency: latency,
            verify_latency: latency.mul_f64(1.5),
            resend_latency: latency,
            ..self
        }
    }

    /// Sets the countdown tick interval.
    #[must_use]
    pub const fn with_countdown_tick(self, countdown_tick: Duration) -> Self {
        Self {
            countdown_tick,
            ..self
        }
    }

    /// The simulated latency of `request`.
    #[must_use]
    pub const fn latency_for(&self, request: &PendingRequest) -> Duration {
        match request {
            PendingRequest::Subscribe { .. } => self.subscribe_latency,
            PendingRequest::SavePreferences => self.preferences_latency,
            PendingRequest::Verify { .. } => self.verify_latency,
            PendingRequest::ResendCode => self.resend_latency,
        }
    }
}
