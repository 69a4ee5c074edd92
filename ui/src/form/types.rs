// Core types for the user form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of `<input>` a field is rendered as. Drives which validation rule applies.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
        }
    }
}

/// The three named fields of the form, in render order.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::FirstName, FieldName::LastName, FieldName::Email];

    /// Name used for the input `name` attribute and in validation messages
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Email => "Email",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            FieldName::FirstName | FieldName::LastName => InputKind::Text,
            FieldName::Email => InputKind::Email,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Validation status enum
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Validity {
    #[serde(rename = "is-valid")]
    Valid,
    #[serde(rename = "is-invalid")]
    Invalid,
}

impl Validity {
    pub fn from_bool(is_valid: bool) -> Self {
        if is_valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// CSS class form of the result (`is-valid` / `is-invalid`)
    pub fn as_class(&self) -> &'static str {
        match self {
            Validity::Valid => "is-valid",
            Validity::Invalid => "is-invalid",
        }
    }

    /// Styling-agnostic tag (`valid` / `invalid`)
    pub fn tag(&self) -> &'static str {
        match self {
            Validity::Valid => "valid",
            Validity::Invalid => "invalid",
        }
    }
}

/// Validation descriptor attached to a field after its first change.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FieldError {
    pub result: Validity,
    pub message: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    /// `None` until the field is first edited
    pub error: Option<FieldError>,
}

impl FieldState {
    pub fn validity(&self) -> Option<Validity> {
        self.error.as_ref().map(|error| error.result)
    }

    pub fn is_untouched(&self) -> bool {
        self.error.is_none()
    }
}

// Action enum for state mutations
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FormAction {
    Change { field: FieldName, value: String },
    Reset,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub first_name: FieldState,
    pub last_name: FieldState,
    pub email: FieldState,
}

impl FormState {
    pub fn field(&self, name: FieldName) -> &FieldState {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FieldState {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
        }
    }

    /// All fields in render order
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &FieldState)> + '_ {
        FieldName::ALL.into_iter().map(move |name| (name, self.field(name)))
    }
}
