// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An in-process queue of reported events.
//!
//! The data layer keeps the most recent events in arrival order so a
//! tag manager, a test, or the terminal front end can read them back.
//! It is bounded: once full, the oldest event is dropped.

use crate::{AnalyticsEvent, AnalyticsSink};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use time::OffsetDateTime;
use tracing::debug;

/// Default number of events retained by a [`DataLayer`].
pub const DEFAULT_DATA_LAYER_CAPACITY: usize = 500;

/// An event together with the time it was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedEvent {
    /// The reported event.
    #[serde(flatten)]
    pub event: AnalyticsEvent,
    /// When the event was reported (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

/// Bounded in-memory analytics sink.
#[derive(Debug)]
pub struct DataLayer {
    capacity: usize,
    events: Mutex<VecDeque<RecordedEvent>>,
}

impl DataLayer {
    /// Creates a data layer retaining at most `capacity` events.
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity: usize = capacity.max(1);
        Self {
            capacity,
            events: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    // A panic while holding the lock cannot leave the queue half-written,
    // so a poisoned lock is still safe to read.
    fn lock(&self) -> MutexGuard<'_, VecDeque<RecordedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the retained events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.lock().iter().cloned().collect()
    }

    /// Returns the retained actions, oldest first.
    #[must_use]
    pub fn actions(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.event.action.clone()).collect()
    }

    /// Number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Serializes the retained events as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.events())
    }
}

impl Default for DataLayer {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_LAYER_CAPACITY)
    }
}

impl AnalyticsSink for DataLayer {
    fn report(&self, event: AnalyticsEvent) {
        let mut events = self.lock();
        if events.len() == self.capacity {
            if let Some(dropped) = events.pop_front() {
                debug!(action = %dropped.event.action, "Data layer full, dropping oldest event");
            }
        }
        events.push_back(RecordedEvent {
            event,
            recorded_at: OffsetDateTime::now_utc(),
        });
    }
}
