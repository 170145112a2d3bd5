// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of the line-oriented command language read from stdin.

use signup_domain::{Frequency, NotificationsUpdate};
use std::str::FromStr;
use thiserror::Error;

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  email <address>                  submit the email form
  frequency <weekly|biweekly|monthly>
  notify <channel> <on|off>        channels: new-posts, project-updates, community-events
  toggle <category>                select or deselect a category
  categories                       list the available categories
  next                             submit the preferences form
  back                             return to the email form
  code <digits>                    type into the verification code box
  verify [digits]                  submit the verification code
  resend                           request another code
  restart                          start over after subscribing
  show                             print the current state
  help                             print this text
  quit                             exit";

/// A notification channel on the preferences form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    NewPosts,
    ProjectUpdates,
    CommunityEvents,
}

impl Channel {
    /// An update setting only this channel.
    #[must_use]
    pub fn update(self, enabled: bool) -> NotificationsUpdate {
        let mut update: NotificationsUpdate = NotificationsUpdate::default();
        match self {
            Self::NewPosts => update.new_posts = Some(enabled),
            Self::ProjectUpdates => update.project_updates = Some(enabled),
            Self::CommunityEvents => update.community_events = Some(enabled),
        }
        update
    }
}

impl FromStr for Channel {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new-posts" => Ok(Self::NewPosts),
            "project-updates" => Ok(Self::ProjectUpdates),
            "community-events" => Ok(Self::CommunityEvents),
            _ => Err(InputError::InvalidArgument {
                command: "notify",
                value: s.to_string(),
            }),
        }
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Email(String),
    Frequency(Frequency),
    Notify { channel: Channel, enabled: bool },
    Toggle(String),
    Categories,
    Next,
    Back,
    Code(String),
    Verify(Option<String>),
    Resend,
    Restart,
    Show,
    Help,
    Quit,
}

/// Errors from parsing a line of input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("Invalid argument '{value}' for '{command}'")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
}

fn required<'a>(command: &'static str, rest: Option<&'a str>) -> Result<&'a str, InputError> {
    rest.filter(|s| !s.is_empty())
        .ok_or(InputError::MissingArgument(command))
}

fn parse_switch(value: &str) -> Result<bool, InputError> {
    match value {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        _ => Err(InputError::InvalidArgument {
            command: "notify",
            value: value.to_string(),
        }),
    }
}

/// Parses one line.
///
/// The first word names the command; the remainder is its argument.
/// Arguments are passed through verbatim so the wizard sees exactly
/// what was typed.
///
/// # Errors
///
/// Returns an error for unknown commands and missing or invalid arguments.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line: &str = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest.trim())),
        None => (line, None),
    };

    match word.to_ascii_lowercase().as_str() {
        "email" => Ok(Input::Email(required("email", rest)?.to_string())),
        "frequency" => {
            let value: &str = required("frequency", rest)?;
            Frequency::from_str(value)
                .map(Input::Frequency)
                .map_err(|_| InputError::InvalidArgument {
                    command: "frequency",
                    value: value.to_string(),
                })
        }
        "notify" => {
            let args: &str = required("notify", rest)?;
            let mut parts = args.split_whitespace();
            let channel: Channel = parts
                .next()
                .ok_or(InputError::MissingArgument("notify"))?
                .parse()?;
            let enabled: bool =
                parse_switch(parts.next().ok_or(InputError::MissingArgument("notify"))?)?;
            Ok(Input::Notify { channel, enabled })
        }
        "toggle" => Ok(Input::Toggle(required("toggle", rest)?.to_string())),
        "categories" => Ok(Input::Categories),
        "next" => Ok(Input::Next),
        "back" => Ok(Input::Back),
        "code" => Ok(Input::Code(rest.unwrap_or_default().to_string())),
        "verify" => Ok(Input::Verify(
            rest.filter(|s| !s.is_empty()).map(str::to_string),
        )),
        "resend" => Ok(Input::Resend),
        "restart" => Ok(Input::Restart),
        "show" => Ok(Input::Show),
        "help" | "?" => Ok(Input::Help),
        "quit" | "exit" => Ok(Input::Quit),
        _ => Err(InputError::UnknownCommand(word.to_string())),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_email_keeps_argument_verbatim() {
        assert_eq!(
            parse_input("email Dev@Example.com").unwrap(),
            Input::Email(String::from("Dev@Example.com"))
        );
    }

    #[test]
    fn test_parse_email_requires_argument() {
        assert_eq!(
            parse_input("email"),
            Err(InputError::MissingArgument("email"))
        );
    }

    #[test]
    fn test_parse_frequency() {
        assert_eq!(
            parse_input("frequency monthly").unwrap(),
            Input::Frequency(Frequency::Monthly)
        );
        assert!(matches!(
            parse_input("frequency daily"),
            Err(InputError::InvalidArgument {
                command: "frequency",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_notify() {
        assert_eq!(
            parse_input("notify community-events on").unwrap(),
            Input::Notify {
                channel: Channel::CommunityEvents,
                enabled: true,
            }
        );
        assert!(parse_input("notify new-posts maybe").is_err());
        assert!(parse_input("notify weather on").is_err());
        assert!(parse_input("notify new-posts").is_err());
    }

    #[test]
    fn test_channel_update_sets_one_flag() {
        let update: NotificationsUpdate = Channel::ProjectUpdates.update(false);
        assert_eq!(update.project_updates, Some(false));
        assert_eq!(update.new_posts, None);
        assert_eq!(update.community_events, None);
    }

    #[test]
    fn test_parse_verify_with_and_without_code() {
        assert_eq!(parse_input("verify").unwrap(), Input::Verify(None));
        assert_eq!(
            parse_input("verify 12 34 56").unwrap(),
            Input::Verify(Some(String::from("12 34 56")))
        );
    }

    #[test]
    fn test_parse_simple_commands_case_insensitively() {
        assert_eq!(parse_input("NEXT").unwrap(), Input::Next);
        assert_eq!(parse_input("  back  ").unwrap(), Input::Back);
        assert_eq!(parse_input("exit").unwrap(), Input::Quit);
        assert_eq!(parse_input("?").unwrap(), Input::Help);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("subscribe"),
            Err(InputError::UnknownCommand(String::from("subscribe")))
        );
    }
}
