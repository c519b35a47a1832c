//! Declarative per-field validation rule table.

use super::FieldRole;

/// Generic message shown for empty input; wins over pattern messages.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// One (required, pattern, message) triple bound to a field role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    pub role: FieldRole,
    pub required: bool,
    /// Matched against the trimmed input.
    pub pattern: &'static str,
    pub message: &'static str,
}

// Letters incl. Latin-1 accented range plus whitespace, at least 3 chars.
const LETTERS_MIN_3: &str = r"^[a-zA-ZÀ-ÿ\s]{3,}$";

pub(super) static RULES: [ValidationRule; 4] = [
    ValidationRule {
        role: FieldRole::Name,
        required: true,
        pattern: LETTERS_MIN_3,
        message: "Enter a valid name (letters only, at least 3 characters)",
    },
    ValidationRule {
        role: FieldRole::Email,
        required: true,
        pattern: r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
        message: "Enter a valid email address",
    },
    ValidationRule {
        role: FieldRole::Phone,
        required: true,
        // ASCII digits only; `\d` would admit other Unicode digits.
        pattern: r"^[0-9]{9}$",
        message: "Enter a valid phone number (9 digits)",
    },
    ValidationRule {
        role: FieldRole::Company,
        required: true,
        pattern: LETTERS_MIN_3,
        message: "Enter a valid company name (letters only, at least 3 characters)",
    },
];
