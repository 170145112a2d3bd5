// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of a session snapshot.

use signup::Session;
use signup_domain::{
    Category, NotificationSettings, Stage, VERIFICATION_CODE_LENGTH, default_categories,
};
use std::fmt;

const fn title(stage: Stage) -> &'static str {
    match stage {
        Stage::EmailEntry => "Subscribe to the newsletter",
        Stage::PreferenceSelection => "Choose your preferences",
        Stage::Verification => "Verify your email",
        Stage::Success => "You're subscribed",
    }
}

const fn switch(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn notifications(settings: &NotificationSettings) -> String {
    format!(
        "new-posts={} project-updates={} community-events={}",
        switch(settings.new_posts),
        switch(settings.project_updates),
        switch(settings.community_events)
    )
}

fn code_box(code: &str) -> String {
    let mut boxed: String = code.to_string();
    for _ in code.len()..VERIFICATION_CODE_LENGTH {
        boxed.push('_');
    }
    boxed
}

/// A session laid out the way the form would show it.
struct SessionView<'a>(&'a Session);

impl SessionView<'_> {
    fn fmt_preferences(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preferences = &self.0.preferences;
        let selected: Vec<&str> = preferences
            .categories
            .iter()
            .map(|c| c.as_str())
            .collect();
        let categories: String = if selected.is_empty() {
            String::from("(none)")
        } else {
            selected.join(", ")
        };

        writeln!(f, "  frequency:     {}", preferences.frequency)?;
        writeln!(f, "  categories:    {categories}")?;
        writeln!(
            f,
            "  notifications: {}",
            notifications(&preferences.notifications)
        )
    }

    fn fmt_verification(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session: &Session = self.0;
        if let Some(email) = &session.email {
            writeln!(f, "  code sent to:  {email}")?;
        }
        writeln!(f, "  code:          {}", code_box(&session.verification_code))?;
        if session.resend_cooldown_seconds > 0 {
            writeln!(f, "  resend in {}s", session.resend_cooldown_seconds)
        } else {
            writeln!(f, "  resend available")
        }
    }
}

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session: &Session = self.0;
        writeln!(
            f,
            "[{}/4] {} ({})",
            session.stage.step(),
            title(session.stage),
            session.status
        )?;

        match session.stage {
            Stage::EmailEntry => {
                if let Some(email) = &session.email {
                    writeln!(f, "  previously entered: {email}")?;
                }
            }
            Stage::PreferenceSelection => self.fmt_preferences(f)?,
            Stage::Verification => self.fmt_verification(f)?,
            Stage::Success => writeln!(
                f,
                "  {} digest, {} categories",
                session.preferences.frequency,
                session.preferences.categories.len()
            )?,
        }

        if let Some(message) = &session.message {
            writeln!(f, "  > {message}")?;
        }
        Ok(())
    }
}

/// The category catalog with the session's selection marked.
struct CategoryList<'a>(&'a Session);

impl fmt::Display for CategoryList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for Category { id, label } in default_categories() {
            let mark: &str = if self.0.preferences.categories.iter().any(|c| c.as_str() == *id) {
                "x"
            } else {
                " "
            };
            writeln!(f, "  [{mark}] {id:<12} {label}")?;
        }
        Ok(())
    }
}

/// Renders the session the way the form would show it.
#[must_use]
pub fn render_session(session: &Session) -> String {
    SessionView(session).to_string()
}

/// Renders the category catalog, marking selected entries.
#[must_use]
pub fn render_categories(session: &Session) -> String {
    CategoryList(session).to_string()
}
