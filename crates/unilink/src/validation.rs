//! Field validation shared by the appointment, profile, club and client forms.
//!
//! A [`Validator`] runs every check and collects all failures instead of
//! stopping at the first one, so callers can report the whole form at once.
//! Each failure carries a translation key for the presentation layer.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

/// 24-hour wall-clock time, zero padded (`09:00`, `23:59`).
static TIME_OF_DAY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap());
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns true if `value` is an `HH:MM` time of day.
pub fn is_time_of_day(value: &str) -> bool {
    TIME_OF_DAY_REGEX.is_match(value)
}

/// Returns true if `value` looks like an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// The constraint a field failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    TooShort { min: usize },
    InvalidTimeFormat,
    NotOneOf { allowed: &'static [&'static str] },
    InvalidEmail,
    OutOfRange { min: i64, max: i64 },
    InvalidUrl,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::TooShort { min } if *min == 1 => write!(f, "is required"),
            Rule::TooShort { min } => write!(f, "must be at least {min} characters"),
            Rule::InvalidTimeFormat => write!(f, "invalid time format (HH:MM)"),
            Rule::NotOneOf { allowed } => write!(f, "must be one of {}", allowed.join(", ")),
            Rule::InvalidEmail => write!(f, "invalid email address"),
            Rule::OutOfRange { min, max } => write!(f, "must be between {min} and {max}"),
            Rule::InvalidUrl => write!(f, "must be an absolute URL"),
        }
    }
}

/// One failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFailure {
    /// Wire name of the field (e.g. `startTime`)
    pub field: &'static str,
    #[serde(flatten)]
    pub rule: Rule,
    /// Translation key of the user-facing message (e.g. `zod.time.invalid`)
    pub message_key: &'static str,
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}

/// Input failed one or more field constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub failures: Vec<FieldFailure>,
}

impl ValidationError {
    /// Returns true if `field` failed any rule.
    pub fn has_failure(&self, field: &str) -> bool {
        self.failures.iter().any(|f| f.field == field)
    }

    /// Returns the rule `field` failed first, if any.
    pub fn rule_for(&self, field: &str) -> Option<&Rule> {
        self.failures.iter().find(|f| f.field == field).map(|f| &f.rule)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.failures.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Accumulates field failures for one form.
#[derive(Debug, Default)]
pub struct Validator {
    failures: Vec<FieldFailure>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &'static str, rule: Rule, message_key: &'static str) {
        self.failures.push(FieldFailure {
            field,
            rule,
            message_key,
        });
    }

    /// Requires at least `min` characters.
    pub fn min_len(
        &mut self,
        field: &'static str,
        value: &str,
        min: usize,
        message_key: &'static str,
    ) -> &mut Self {
        if value.chars().count() < min {
            self.fail(field, Rule::TooShort { min }, message_key);
        }
        self
    }

    /// Requires an `HH:MM` time of day.
    pub fn time_of_day(
        &mut self,
        field: &'static str,
        value: &str,
        message_key: &'static str,
    ) -> &mut Self {
        if !is_time_of_day(value) {
            self.fail(field, Rule::InvalidTimeFormat, message_key);
        }
        self
    }

    /// Requires an email address.
    pub fn email(&mut self, field: &'static str, value: &str, message_key: &'static str) -> &mut Self {
        if !is_email(value) {
            self.fail(field, Rule::InvalidEmail, message_key);
        }
        self
    }

    /// Requires `min <= value <= max`.
    pub fn range(
        &mut self,
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
        message_key: &'static str,
    ) -> &mut Self {
        if value < min || value > max {
            self.fail(field, Rule::OutOfRange { min, max }, message_key);
        }
        self
    }

    /// Requires an absolute URL.
    pub fn absolute_url(
        &mut self,
        field: &'static str,
        value: &str,
        message_key: &'static str,
    ) -> &mut Self {
        if Url::parse(value).is_err() {
            self.fail(field, Rule::InvalidUrl, message_key);
        }
        self
    }

    /// Parses a closed-set value; records a failure and returns `None` if
    /// `value` is not one of `allowed`.
    pub fn one_of<T: FromStr>(
        &mut self,
        field: &'static str,
        value: &str,
        allowed: &'static [&'static str],
        message_key: &'static str,
    ) -> Option<T> {
        match value.parse::<T>() {
            Ok(parsed) if allowed.contains(&value) => Some(parsed),
            _ => {
                self.fail(field, Rule::NotOneOf { allowed }, message_key);
                None
            }
        }
    }

    /// Returns the collected failures as an error, even if there are none.
    pub fn into_error(self) -> ValidationError {
        ValidationError {
            failures: self.failures,
        }
    }

    /// Succeeds only if no check failed.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}
