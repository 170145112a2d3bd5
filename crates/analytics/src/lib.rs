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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod data_layer;

pub use data_layer::{DEFAULT_DATA_LAYER_CAPACITY, DataLayer, RecordedEvent};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Category shared by every event the signup flow reports.
pub const NEWSLETTER_CATEGORY: &str = "newsletter";

/// A single analytics record.
///
/// The record is flat on purpose so any reporting backend can consume it:
/// an action name, a category, and an optional label and numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// What happened (e.g., "`email_submitted`").
    pub action: String,
    /// The feature area the action belongs to.
    pub category: String,
    /// Optional qualifier for the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Optional numeric measurement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl AnalyticsEvent {
    /// Creates a new event with no label or value.
    ///
    /// # Arguments
    ///
    /// * `action` - The name of the action
    /// * `category` - The feature area
    #[must_use]
    pub fn new(action: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            category: category.into(),
            label: None,
            value: None,
        }
    }

    /// Creates a new event in the newsletter category.
    #[must_use]
    pub fn newsletter(action: impl Into<String>) -> Self {
        Self::new(action, NEWSLETTER_CATEGORY)
    }

    /// Attaches a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches a numeric value.
    #[must_use]
    pub const fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Receives analytics events.
///
/// Reporting is fire-and-forget: there is no return value and callers
/// never learn whether delivery worked. Implementations must not panic.
pub trait AnalyticsSink: Send + Sync {
    /// Reports one event.
    fn report(&self, event: AnalyticsEvent);
}

/// Writes every event to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn report(&self, event: AnalyticsEvent) {
        info!(
            target: "signup::analytics",
            action = %event.action,
            category = %event.category,
            label = ?event.label,
            value = ?event.value,
            "Analytics event"
        );
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn report(&self, _event: AnalyticsEvent) {}
}

/// Forwards each event to every inner sink in order.
#[derive(Default)]
pub struct FanOut {
    sinks: Vec<std::sync::Arc<dyn AnalyticsSink>>,
}

impl FanOut {
    /// Creates an empty fan-out.
    #[must_use]
    pub const fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Adds a sink.
    #[must_use]
    pub fn with(mut self, sink: std::sync::Arc<dyn AnalyticsSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl AnalyticsSink for FanOut {
    fn report(&self, event: AnalyticsEvent) {
        for sink in &self.sinks {
            sink.report(event.clone());
        }
    }
}
