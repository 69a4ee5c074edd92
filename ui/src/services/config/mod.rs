//! Form configuration
//!
//! Dialog copy and display toggles for the user form. Defaults reproduce the
//! stock form; a JSON document can override any part of it.

use serde::{Deserialize, Serialize};

use crate::services::errors::{FormError, FormResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogIcon {
    Success,
    Error,
}

impl DialogIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            DialogIcon::Success => "✓",
            DialogIcon::Error => "✕",
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            DialogIcon::Success => "alert-icon alert-icon-success",
            DialogIcon::Error => "alert-icon alert-icon-error",
        }
    }
}

/// Everything shown in one acknowledgment dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogContent {
    pub title: String,
    pub text: String,
    pub icon: DialogIcon,
    pub confirm_button_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Shown after a valid submission
    pub success: DialogContent,
    /// Shown when any field is empty or invalid on submit
    pub error: DialogContent,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            success: DialogContent {
                title: "Success!".to_string(),
                text: "User created".to_string(),
                icon: DialogIcon::Success,
                confirm_button_text: "Cool".to_string(),
            },
            error: DialogContent {
                title: "Error!".to_string(),
                text: "All fields are required and must be valid".to_string(),
                icon: DialogIcon::Error,
                confirm_button_text: "I understand".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub dialogs: DialogConfig,

    /// Render the live JSON dump of the form state under the card
    pub show_state_dump: bool,

    /// Optional heading rendered above the form
    pub title: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            dialogs: DialogConfig::default(),
            show_state_dump: true,
            title: None,
        }
    }
}

impl FormConfig {
    /// Parses an override document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> FormResult<Self> {
        let config: FormConfig =
            serde_json::from_str(json).map_err(|e| FormError::Configuration {
                field: "<document>".to_string(),
                value: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FormResult<()> {
        let dialogs = [("success", &self.dialogs.success), ("error", &self.dialogs.error)];
        for (name, dialog) in dialogs {
            if dialog.title.trim().is_empty() {
                return Err(FormError::Configuration {
                    field: format!("dialogs.{name}.title"),
                    value: dialog.title.clone(),
                });
            }
            if dialog.confirm_button_text.trim().is_empty() {
                return Err(FormError::Configuration {
                    field: format!("dialogs.{name}.confirm_button_text"),
                    value: dialog.confirm_button_text.clone(),
                });
            }
        }

        Ok(())
    }
}
