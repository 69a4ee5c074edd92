use thiserror::Error;

/// Failures outside of field validation. Invalid input is never an error here:
/// it is carried as data on each field's `FieldError`.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {field} = {value}")]
    Configuration { field: String, value: String },
}

pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let error = FormError::Configuration {
            field: "dialogs.success.title".to_string(),
            value: "".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: dialogs.success.title = "
        );
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: FormError = source.into();
        assert!(error.to_string().starts_with("Serialization error:"));
    }
}
