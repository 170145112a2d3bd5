// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The wizard handle owned by a presentation layer.
//!
//! # Architecture
//!
//! - The session lives in a `tokio::sync::watch` channel; every accepted
//!   transition publishes a new snapshot to all subscribers
//! - At most one simulated request task and one countdown task exist
//! - Spawned tasks hold a `Weak` reference, so once the handle is gone
//!   no task can write to the session
//! - Disposing or dropping the handle aborts both tasks
//! - Session writes and disposal serialize on one gate, so once
//!   `dispose` returns nothing can publish or spawn again

use crate::config::WizardConfig;
use crate::error::WizardError;
use signup::{Command, CoreError, Effect, PendingRequest, Session, apply, complete, tick};
use signup_analytics::{AnalyticsEvent, AnalyticsSink};
use signup_domain::{CategoryId, PreferencesUpdate};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::{debug, info, warn};

/// Background work owned by one wizard.
#[derive(Debug, Default)]
struct Tasks {
    request: Option<JoinHandle<()>>,
    countdown: Option<JoinHandle<()>>,
}

impl Tasks {
    fn abort_all(&mut self) {
        for handle in [self.request.take(), self.countdown.take()]
            .into_iter()
            .flatten()
        {
            handle.abort();
        }
    }
}

struct Inner {
    config: WizardConfig,
    sink: Arc<dyn AnalyticsSink>,
    session: watch::Sender<Session>,
    gate: Mutex<()>,
    tasks: Mutex<Tasks>,
    disposed: AtomicBool,
    closed: Notify,
}

impl Inner {
    fn gate(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn tasks(&self) -> MutexGuard<'_, Tasks> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Runs `f` against the current session and publishes the new one.
    ///
    /// Subscribers are only notified when `f` succeeds. Nothing is
    /// published once the wizard is disposed.
    fn transition<T, F>(&self, f: F) -> Result<T, WizardError>
    where
        F: FnOnce(&Session) -> Result<(Session, T), CoreError>,
    {
        let gate: MutexGuard<'_, ()> = self.gate();
        if self.is_disposed() {
            return Err(WizardError::Disposed);
        }

        let (from, next, value) = {
            let current = self.session.borrow();
            let (next, value) = f(&current)?;
            (current.stage, next, value)
        };

        if next.stage != from {
            info!(from = %from, to = %next.stage, "Stage changed");
        }
        self.session.send_replace(next);
        drop(gate);
        Ok(value)
    }

    fn dispatch(self: &Arc<Self>, command: Command) -> Result<(), WizardError> {
        if self.is_disposed() {
            return Err(WizardError::Disposed);
        }

        let name: &'static str = command.name();
        debug!(command = name, "Applying command");

        let (effects, events) = self
            .transition(|session| {
                apply(session, command).map(|t| (t.new_session, (t.effects, t.events)))
            })
            .map_err(|err| {
                debug!(command = name, error = %err, "Command refused");
                err
            })?;

        self.report(events);
        self.run_effects(effects);
        Ok(())
    }

    fn finish(self: &Arc<Self>, request: PendingRequest) {
        let name: &'static str = request.name();
        match self.transition(|session| {
            complete(session, request).map(|t| (t.new_session, (t.effects, t.events)))
        }) {
            Ok((effects, events)) => {
                debug!(request = name, "Simulated request completed");
                self.report(events);
                self.run_effects(effects);
            }
            Err(WizardError::Disposed) => {
                debug!(request = name, "Wizard disposed, dropping completion");
            }
            Err(err) => {
                warn!(request = name, error = %err, "Dropping stale completion");
            }
        }
    }

    fn report(&self, events: Vec<AnalyticsEvent>) {
        for event in events {
            self.sink.report(event);
        }
    }

    fn run_effects(self: &Arc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Simulate(request) => self.spawn_request(request),
                Effect::StartCountdown => self.start_countdown(),
                Effect::CancelCountdown => self.cancel_countdown(),
            }
        }
    }

    fn spawn_request(self: &Arc<Self>, request: PendingRequest) {
        let latency = self.config.latency_for(&request);
        debug!(request = request.name(), ?latency, "Simulating request");

        let mut tasks: MutexGuard<'_, Tasks> = self.tasks();
        if self.is_disposed() {
            debug!(request = request.name(), "Wizard disposed, not simulating");
            return;
        }

        let weak: Weak<Self> = Arc::downgrade(self);
        let handle: JoinHandle<()> = tokio::spawn(async move {
            sleep(latency).await;
            if let Some(inner) = weak.upgrade() {
                inner.finish(request);
            }
        });

        if let Some(previous) = tasks.request.replace(handle) {
            previous.abort();
        }
    }

    fn start_countdown(self: &Arc<Self>) {
        let period = self.config.countdown_tick;
        let mut tasks: MutexGuard<'_, Tasks> = self.tasks();
        if self.is_disposed() {
            debug!("Wizard disposed, not starting countdown");
            return;
        }

        let weak: Weak<Self> = Arc::downgrade(self);

        let handle: JoinHandle<()> = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                match inner.transition(|session| {
                    tick(session).map(|t| (t.new_session, t.finished))
                }) {
                    Ok(false) => {}
                    Ok(true) => {
                        debug!("Resend cooldown finished");
                        break;
                    }
                    Err(err) => {
                        debug!(error = %err, "Countdown stopped");
                        break;
                    }
                }
            }
        });

        if let Some(previous) = tasks.countdown.replace(handle) {
            previous.abort();
        }
    }

    fn cancel_countdown(&self) {
        if let Some(handle) = self.tasks().countdown.take() {
            handle.abort();
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.tasks
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .abort_all();
    }
}

/// A running signup wizard.
///
/// Each handle owns exactly one [`Session`]. The methods mirror the
/// callbacks a form hands to its controls; none of them block. Work that
/// takes time (the simulated backend and the resend countdown) runs on
/// the tokio runtime and shows up as new snapshots on [`Wizard::subscribe`].
///
/// # Panics
///
/// Methods that start simulated requests or the countdown spawn tokio
/// tasks and panic if called outside a tokio runtime.
pub struct Wizard {
    inner: Arc<Inner>,
}

impl Wizard {
    /// Creates a wizard with a fresh session.
    #[must_use]
    pub fn new(config: WizardConfig, sink: Arc<dyn AnalyticsSink>) -> Self {
        let (session, _rx) = watch::channel(Session::new());
        Self {
            inner: Arc::new(Inner {
                config,
                sink,
                session,
                gate: Mutex::new(()),
                tasks: Mutex::new(Tasks::default()),
                disposed: AtomicBool::new(false),
                closed: Notify::new(),
            }),
        }
    }

    /// The timing this wizard runs with.
    #[must_use]
    pub fn config(&self) -> &WizardConfig {
        &self.inner.config
    }

    /// Returns a copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    /// Subscribes to session snapshots.
    ///
    /// The receiver sees the current session immediately and every
    /// accepted transition afterwards.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.session.subscribe()
    }

    /// Waits until no simulated request is in flight and returns the session.
    ///
    /// Returns immediately once the wizard has been disposed.
    pub async fn settled(&self) -> Session {
        let closed = self.inner.closed.notified();
        if self.inner.is_disposed() {
            return self.snapshot();
        }

        let mut rx: watch::Receiver<Session> = self.subscribe();
        tokio::select! {
            result = rx.wait_for(|session| !session.is_submitting()) => {
                result.map_or_else(|_| self.snapshot(), |session| session.clone())
            }
            () = closed => self.snapshot(),
        }
    }

    /// Applies a command.
    ///
    /// # Errors
    ///
    /// Returns an error if the wizard was disposed or the state machine
    /// refused the command. The session is unchanged in both cases.
    pub fn dispatch(&self, command: Command) -> Result<(), WizardError> {
        self.inner.dispatch(command)
    }

    /// Submits the email form.
    ///
    /// # Errors
    ///
    /// See [`Wizard::dispatch`].
    pub fn submit_email(&self, email: impl Into<String>) -> Result<(), WizardError> {
        self.dispatch(Command::SubmitEmail {
            email: email.into(),
        })
    }

    /// Merges a partial preferences update.
    ///
    /// # Errors
    ///
    /// See [`Wizard::dispatch`].
    pub fn update_preferences(&self, update: PreferencesUpdate) -> Result<(), WizardError> {
        self.dispatch(Command::UpdatePreferences { update })
    }

    /// Selects or deselects a category.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` for a blank identifier, otherwise
    /// see [`Wizard::dispatch`].
    pub fn toggle_category(&self, category: &str) -> Result<(), WizardError> {
        let category: CategoryId = CategoryId::new(category)?;
        self.dispatch(Command::ToggleCategory { category })
    }

    /// Submits the preferences form.
    ///
    /// # Errors
    ///
    /// See [`Wizard::dispatch`].
    pub fn submit_preferences(&self) -> Result<(), WizardError> {
        self.dispatch(Command::SubmitPreferences)
    }

    /// Returns to the email form.
    ///
    /// # Errors
    ///
    /// See [`Wizard::dispatch`].
    pub fn go_back_to_email(&self) -> Result<(), WizardError> {
        self.dispatch(Command::GoBackToEmail)
    }

    /// Updates the code box as the subscriber types.
    ///
    /// # Errors
    ///
    /// See [`Wizard::dispatch`].
    pub fn enter_verification_code(&self, input: impl Into<String>) -> Result<(), WizardError> {
        self.dispatch(Command::EnterVerificationCode {
            input: input.into(),
        })
    }

    /// Submits a verification code.
    ///
    /// # Errors
    ///
    /// See [`Wizard::dispatch`].
    pub fn submit_verification_code(&self, code: impl Into<String>) -> Result<(), WizardError> {
        self.dispatch(Command::SubmitVerificationCode { code: code.into() })
    }

    /// Asks for another verification code.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CooldownActive` (wrapped) while the cooldown runs.
    pub fn resend_verification_code(&self) -> Result<(), WizardError> {
        self.dispatch(Command::ResendVerificationCode)
    }

    /// Starts over after a confirmed subscription.
    ///
    /// # Errors
    ///
    /// See [`Wizard::dispatch`].
    pub fn restart(&self) -> Result<(), WizardError> {
        self.dispatch(Command::Restart)
    }

    /// Tears the wizard down.
    ///
    /// Pending requests and the countdown are aborted and later commands
    /// are refused. Calling this more than once is harmless.
    pub fn dispose(&self) {
        {
            let _gate: MutexGuard<'_, ()> = self.inner.gate();
            if self.inner.disposed.swap(true, Ordering::AcqRel) {
                return;
            }
        }
        self.inner.tasks().abort_all();
        self.inner.closed.notify_waiters();
        info!("Wizard disposed");
    }

    /// Returns true once [`Wizard::dispose`] has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }
}

impl std::fmt::Debug for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("config", &self.inner.config)
            .field("session", &*self.inner.session.borrow())
            .field("disposed", &self.inner.is_disposed())
            .finish_non_exhaustive()
    }
}
