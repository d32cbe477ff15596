use std::sync::LazyLock;

use chrono::NaiveDate;
use chrono::Utc;
use regex::Regex;

/// A single field rule: a predicate plus the message recorded when it
/// fails.
#[derive(Clone, Copy)]
pub struct Rule {
    pub field: &'static str,
    pub message: &'static str,
    pub check: fn(&str) -> bool,
}

/// A named ordered list of field rules.
///
/// Rules for the same field are evaluated in declaration order and stop at
/// the first failure, so an empty id reports only the emptiness message and
/// never the format one.
pub struct RuleSet {
    name: &'static str,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules declared for a field, in order.
    pub fn rules_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Rule> {
        self.rules.iter().filter(move |rule| rule.field == field)
    }
}

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÁÉÍÓÚáéíóúñÑ]{4,15}$").expect("pattern compiles"));

static LASTNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÁÉÍÓÚáéíóúñÑ]{4,30}$").expect("pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("pattern compiles"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(3\d{9})$").expect("pattern compiles"));

static BOARD_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÁ-ÿñÑ ]{4,30}$").expect("pattern compiles"));

static RECIPIENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("pattern compiles")
});

pub(crate) fn not_empty(value: &str) -> bool {
    !value.is_empty()
}

/// The document store's native key encoding: 24 lowercase-hex characters.
pub(crate) fn is_valid_object_id(value: &str) -> bool {
    value.len() == 24
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

pub(crate) fn is_valid_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

pub(crate) fn is_valid_lastname(value: &str) -> bool {
    LASTNAME_PATTERN.is_match(value)
}

pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub(crate) fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

pub(crate) fn is_valid_board_name(value: &str) -> bool {
    BOARD_NAME_PATTERN.is_match(value)
}

pub(crate) fn is_valid_recipient(value: &str) -> bool {
    RECIPIENT_PATTERN.is_match(value)
}

/// At least 8 characters, one uppercase letter, one lowercase letter, one
/// digit, and one of `@$!%*?&`, with no characters outside those classes.
pub(crate) fn is_valid_password(value: &str) -> bool {
    const SPECIALS: &str = "@$!%*?&";

    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| SPECIALS.contains(c))
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c))
}

pub(crate) fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Strictly after today; today itself is not a future date.
pub(crate) fn is_future_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date > Utc::now().date_naive())
        .unwrap_or(false)
}
