// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subscriber preferences and partial updates.

use crate::types::{CategoryId, Frequency};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which notification channels the subscriber opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Notify when a new blog post is published.
    pub new_posts: bool,
    /// Notify about project releases and updates.
    pub project_updates: bool,
    /// Notify about talks, meetups and other events.
    pub community_events: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            new_posts: true,
            project_updates: true,
            community_events: false,
        }
    }
}

/// A partial update to [`NotificationSettings`].
///
/// `None` leaves the corresponding flag untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationsUpdate {
    /// New value for [`NotificationSettings::new_posts`].
    pub new_posts: Option<bool>,
    /// New value for [`NotificationSettings::project_updates`].
    pub project_updates: Option<bool>,
    /// New value for [`NotificationSettings::community_events`].
    pub community_events: Option<bool>,
}

impl NotificationSettings {
    /// Returns these settings with `update` merged on top.
    #[must_use]
    pub fn merged(self, update: NotificationsUpdate) -> Self {
        Self {
            new_posts: update.new_posts.unwrap_or(self.new_posts),
            project_updates: update.project_updates.unwrap_or(self.project_updates),
            community_events: update.community_events.unwrap_or(self.community_events),
        }
    }
}

/// Delivery preferences collected on the second step of the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Delivery frequency.
    pub frequency: Frequency,
    /// Selected categories. Must be non-empty to continue.
    pub categories: BTreeSet<CategoryId>,
    /// Notification opt-ins.
    pub notifications: NotificationSettings,
}

/// A partial update to [`Preferences`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    /// Replaces the frequency when present.
    pub frequency: Option<Frequency>,
    /// Replaces the whole category set when present.
    pub categories: Option<BTreeSet<CategoryId>>,
    /// Merged flag by flag into the notification settings.
    pub notifications: Option<NotificationsUpdate>,
}

impl PreferencesUpdate {
    /// An update that only changes the frequency.
    #[must_use]
    pub const fn frequency(frequency: Frequency) -> Self {
        Self {
            frequency: Some(frequency),
            categories: None,
            notifications: None,
        }
    }

    /// An update that only touches notification flags.
    #[must_use]
    pub const fn notifications(update: NotificationsUpdate) -> Self {
        Self {
            frequency: None,
            categories: None,
            notifications: Some(update),
        }
    }
}

impl Preferences {
    /// Returns these preferences with `update` merged on top.
    #[must_use]
    pub fn merged(&self, update: PreferencesUpdate) -> Self {
        Self {
            frequency: update.frequency.unwrap_or(self.frequency),
            categories: update
                .categories
                .unwrap_or_else(|| self.categories.clone()),
            notifications: update
                .notifications
                .map_or(self.notifications, |n| self.notifications.merged(n)),
        }
    }

    /// Adds `id` if absent, removes it if present.
    ///
    /// Returns true if the category is selected afterwards.
    pub fn toggle_category(&mut self, id: CategoryId) -> bool {
        if self.categories.remove(&id) {
            false
        } else {
            self.categories.insert(id);
            true
        }
    }

    /// Returns true if `id` is selected.
    #[must_use]
    pub fn has_category(&self, id: &CategoryId) -> bool {
        self.categories.contains(id)
    }
}
