//! Field-level validation for client input.
//!
//! # Responsibility
//! - Map input names (`nombre`, `email`, `telefono`, `empresa`) to field roles.
//! - Evaluate one field against its rule and report the inline message.
//!
//! # Invariants
//! - Empty (trimmed) input always reports `REQUIRED_MESSAGE`.
//! - Input names without a rule are always valid.
//! - Validation is pure; showing/clearing messages is the caller's job.

mod rules;

use crate::model::client::NewClient;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use rules::{ValidationRule, REQUIRED_MESSAGE};

static COMPILED: Lazy<Vec<Regex>> = Lazy::new(|| {
    rules::RULES
        .iter()
        .map(|rule| Regex::new(rule.pattern).expect("valid validation rule regex"))
        .collect()
});

/// Role of one client input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldRole {
    Name,
    Email,
    Phone,
    Company,
}

impl FieldRole {
    /// Every role, in form order.
    pub const ALL: [FieldRole; 4] = [Self::Name, Self::Email, Self::Phone, Self::Company];

    /// Input/column name used by forms and storage.
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "nombre",
            Self::Email => "email",
            Self::Phone => "telefono",
            Self::Company => "empresa",
        }
    }

    pub fn from_input_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.input_name() == name.trim())
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Company => 3,
        }
    }
}

impl Display for FieldRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.input_name())
    }
}

/// Result of checking one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    Valid,
    /// Carries the inline message to show next to the field.
    Invalid(&'static str),
}

impl FieldCheck {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

/// Returns the full rule table in form order.
pub fn rules() -> &'static [ValidationRule] {
    &rules::RULES
}

/// Returns the rule bound to `role`.
pub fn rule_for(role: FieldRole) -> &'static ValidationRule {
    &rules::RULES[role.index()]
}

/// Checks `value` against the rule for `role`.
pub fn check_field(role: FieldRole, value: &str) -> FieldCheck {
    let rule = rule_for(role);
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return if rule.required {
            FieldCheck::Invalid(REQUIRED_MESSAGE)
        } else {
            FieldCheck::Valid
        };
    }

    if COMPILED[role.index()].is_match(trimmed) {
        FieldCheck::Valid
    } else {
        FieldCheck::Invalid(rule.message)
    }
}

/// Checks a field identified by its input name.
///
/// Unknown input names have no rule and are always valid.
pub fn check_input(input_name: &str, value: &str) -> FieldCheck {
    match FieldRole::from_input_name(input_name) {
        Some(role) => check_field(role, value),
        None => FieldCheck::Valid,
    }
}

/// Validation failure for a whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientValidationError {
    pub role: FieldRole,
    pub message: &'static str,
}

impl Display for ClientValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.role, self.message)
    }
}

impl Error for ClientValidationError {}

/// Validates every field of `client`, reporting the first failure.
pub fn validate_client(client: &NewClient) -> Result<(), ClientValidationError> {
    for role in FieldRole::ALL {
        if let FieldCheck::Invalid(message) = check_field(role, client.field(role)) {
            return Err(ClientValidationError { role, message });
        }
    }
    Ok(())
}
