use regex::Regex;
use std::sync::LazyLock;

use crate::form::{FieldError, FieldName, FieldState, InputKind, Validity};

pub const VALID_MESSAGE: &str = "Looks good!";

// Same shape as the classic `\w+([.-]?\w+)*@...` email check. `\w` is spelled out
// as ASCII word characters and the separator class admits backslash, dot and hyphen.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_]+([\\.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([\\.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Outcome of validating one raw field value
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub tag: Validity,
    pub message: String,
}

impl ValidationResult {
    pub fn into_field_error(self) -> FieldError {
        FieldError {
            result: self.tag,
            message: self.message,
        }
    }
}

pub fn is_valid_text(value: &str) -> bool {
    !value.is_empty()
}

/// Not RFC 5322: rejects some deliverable addresses (e.g. `a+b@x.com`, long TLDs)
/// and accepts some odd ones. Matches what the form has always accepted.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn validate(kind: InputKind, field: FieldName, value: &str) -> ValidationResult {
    let is_valid = match kind {
        InputKind::Text => is_valid_text(value),
        InputKind::Email => is_valid_email(value),
    };

    let message = if is_valid {
        VALID_MESSAGE.to_string()
    } else {
        format!("Please provide a valid {}", field.as_str())
    };

    ValidationResult {
        is_valid,
        tag: Validity::from_bool(is_valid),
        message,
    }
}

/// Validates `value` using the rule for `field`'s own input kind
pub fn validate_field(field: FieldName, value: &str) -> ValidationResult {
    validate(field.input_kind(), field, value)
}

pub fn input_class(field: &FieldState) -> &'static str {
    match field.validity() {
        Some(Validity::Valid) => "form-control is-valid",
        Some(Validity::Invalid) => "form-control is-invalid",
        None => "form-control",
    }
}

pub fn feedback_class(validity: Validity) -> &'static str {
    match validity {
        Validity::Valid => "valid-feedback",
        Validity::Invalid => "invalid-feedback",
    }
}
