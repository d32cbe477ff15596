//! Entity rule tables.
//!
//! Each entity's validator is data: an ordered rule list evaluated by the
//! generic [`Validator`](super::validator::Validator). Rules and messages
//! mirror the entity contracts of the backing CRM collections.

use std::sync::LazyLock;

use crate::domain::user::models::UserRole;
use crate::domain::validation::rules;
use crate::domain::validation::rules::Rule;
use crate::domain::validation::rules::RuleSet;

const PROJECT_STATUSES: [&str; 3] = ["ACTIVE", "DELAYED", "COMPLETED"];

fn is_valid_role(value: &str) -> bool {
    UserRole::parse(value).is_ok()
}

fn is_valid_status(value: &str) -> bool {
    PROJECT_STATUSES.contains(&value)
}

static USER_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "user",
        vec![
            Rule {
                field: "id",
                message: "The ID cannot be empty",
                check: rules::not_empty,
            },
            Rule {
                field: "id",
                message: "The ID must be a 24-character hexadecimal string",
                check: rules::is_valid_object_id,
            },
            Rule {
                field: "name",
                message: "The first name must have between 4 and 15 characters and contain only letters",
                check: rules::is_valid_name,
            },
            Rule {
                field: "lastname",
                message: "The last name must have between 4 and 30 characters",
                check: rules::is_valid_lastname,
            },
            Rule {
                field: "email",
                message: "The email is not valid",
                check: rules::is_valid_email,
            },
            Rule {
                field: "password",
                message: "The password must have at least 8 characters, one uppercase letter, one lowercase letter, one number, and one special character",
                check: rules::is_valid_password,
            },
            Rule {
                field: "role",
                message: "The role cannot be empty",
                check: rules::not_empty,
            },
            Rule {
                field: "role",
                message: "The role must be one of the following: ADMIN, EDITOR, VIEWER",
                check: is_valid_role,
            },
        ],
    )
});

static LEAD_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "lead",
        vec![
            Rule {
                field: "id",
                message: "The ID cannot be empty",
                check: rules::not_empty,
            },
            Rule {
                field: "id",
                message: "The ID must be a 24-character hexadecimal string",
                check: rules::is_valid_object_id,
            },
            Rule {
                field: "name",
                message: "The first name must have between 4 and 15 characters and contain only letters",
                check: rules::is_valid_name,
            },
            Rule {
                field: "lastname",
                message: "The last name must have between 4 and 30 characters",
                check: rules::is_valid_lastname,
            },
            Rule {
                field: "email",
                message: "The email is not valid",
                check: rules::is_valid_email,
            },
            Rule {
                field: "phone",
                message: "The phone must be a 10-digit number starting with 3",
                check: rules::is_valid_phone,
            },
        ],
    )
});

static BOARD_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "board",
        vec![
            Rule {
                field: "id",
                message: "ID cannot be null or empty",
                check: rules::not_empty,
            },
            Rule {
                field: "id",
                message: "Id must be a 24-character hexadecimal",
                check: rules::is_valid_object_id,
            },
            Rule {
                field: "name",
                message: "The name must be between 4 and 15 characters and only letters",
                check: rules::is_valid_board_name,
            },
            Rule {
                field: "description",
                message: "Description cannot be empty",
                check: rules::not_empty,
            },
            Rule {
                field: "description",
                message: "Description must not exceed 300 characters",
                check: |value| value.chars().count() <= 300,
            },
            Rule {
                field: "date",
                message: "Date cannot be empty",
                check: rules::not_empty,
            },
            Rule {
                field: "date",
                message: "Date must be in the format yyyy-MM-dd",
                check: rules::is_valid_date,
            },
            Rule {
                field: "future_date",
                message: "Date cannot be empty",
                check: rules::not_empty,
            },
            Rule {
                field: "future_date",
                message: "Date must be in the format yyyy-MM-dd",
                check: rules::is_valid_date,
            },
            Rule {
                field: "future_date",
                message: "Date must be in the future",
                check: rules::is_future_date,
            },
            Rule {
                field: "status",
                message: "Status cannot be empty",
                check: rules::not_empty,
            },
            Rule {
                field: "status",
                message: "Status must be one of the following: ACTIVE, DELAYED, COMPLETED",
                check: is_valid_status,
            },
        ],
    )
});

static EMAIL_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "email",
        vec![
            Rule {
                field: "id",
                message: "The ID cannot be empty.",
                check: rules::not_empty,
            },
            Rule {
                field: "id",
                message: "The ID must be a 24-character hexadecimal string.",
                check: rules::is_valid_object_id,
            },
            Rule {
                field: "recipient",
                message: "The recipient cannot be empty.",
                check: rules::not_empty,
            },
            Rule {
                field: "recipient",
                message: "The recipient email is not valid.",
                check: rules::is_valid_recipient,
            },
            Rule {
                field: "subject",
                message: "The subject cannot be more than 100 characters.",
                check: |value| value.chars().count() <= 100,
            },
            Rule {
                field: "body",
                message: "The message cannot be more than 1000 characters.",
                check: |value| value.chars().count() <= 1000,
            },
            Rule {
                field: "attachment",
                message: "The attachment link must be a valid URL (http or https).",
                check: |value| {
                    value.is_empty()
                        || value.starts_with("http://")
                        || value.starts_with("https://")
                },
            },
        ],
    )
});

pub fn user_rules() -> &'static RuleSet {
    &USER_RULES
}

pub fn lead_rules() -> &'static RuleSet {
    &LEAD_RULES
}

pub fn board_rules() -> &'static RuleSet {
    &BOARD_RULES
}

pub fn email_rules() -> &'static RuleSet {
    &EMAIL_RULES
}
