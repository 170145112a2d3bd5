// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{validate_email, validate_verification_code};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A syntactically valid email address.
///
/// Construction goes through [`EmailAddress::parse`], so holding one means
/// the shape check has passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses a raw email address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmail` if the input is not shaped like
    /// `local@domain.tld`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        validate_email(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// Returns the address as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A six-digit verification code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Removes every character that is not an ASCII digit.
    #[must_use]
    pub fn sanitize(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }

    /// Strips non-digits from `raw`, then checks the length.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVerificationCode` carrying the number of
    /// digits found when it is not exactly six.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits: String = Self::sanitize(raw);
        validate_verification_code(&digits)?;
        Ok(Self(digits))
    }

    /// Returns the digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a newsletter category such as `web-dev`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a category identifier from trimmed, non-empty input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCategory` if the input is blank.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed: &str = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCategory(
                "Category identifier cannot be empty",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How often the newsletter is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Once a week.
    #[default]
    Weekly,
    /// Every other week.
    Biweekly,
    /// Once a month.
    Monthly,
}

impl Frequency {
    /// Returns the string representation of the frequency.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(DomainError::InvalidFrequency(s.to_string())),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A category offered on the preferences form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

const DEFAULT_CATEGORIES: [Category; 6] = [
    Category {
        id: "web-dev",
        label: "Web Development",
    },
    Category {
        id: "rust",
        label: "Rust",
    },
    Category {
        id: "systems",
        label: "Systems Programming",
    },
    Category {
        id: "devops",
        label: "DevOps & Infrastructure",
    },
    Category {
        id: "open-source",
        label: "Open Source",
    },
    Category {
        id: "career",
        label: "Career & Growth",
    },
];

/// The categories offered by default.
#[must_use]
pub const fn default_categories() -> &'static [Category] {
    &DEFAULT_CATEGORIES
}
