use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubscriberError {
    #[error("Invalid value for '{field}' ({value}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Seed file parse error: {0}")]
    SeedParseError(#[from] toml::de::Error),
}

impl SubscriberError {
    pub fn validation(field: &str, value: impl ToString, reason: &str) -> Self {
        SubscriberError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SubscriberError::ValidationError { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SubscriberError::ValidationError { field, reason, .. } => {
                format!("Subscriber data is invalid: {} ({})", reason, field)
            }
            SubscriberError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            SubscriberError::UnknownRule { name } => {
                format!("No business rule is registered under '{}'", name)
            }
            SubscriberError::IoError(e) => format!("Could not read input: {}", e),
            SubscriberError::SerializationError(e) => {
                format!("Could not render the report: {}", e)
            }
            SubscriberError::SeedParseError(e) => {
                format!("The seed file is not valid TOML: {}", e)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SubscriberError::ValidationError { .. } => {
                "Check that every email is non-blank, months remaining is not negative and the plan is FREE, BASIC or PRO"
            }
            SubscriberError::ConfigError { .. } => "Run with --help to review the accepted options",
            SubscriberError::UnknownRule { .. } => {
                "Use one of the names listed by the rule catalog"
            }
            SubscriberError::IoError(_) => "Make sure the file exists and is readable",
            SubscriberError::SerializationError(_) => "Retry with --format text",
            SubscriberError::SeedParseError(_) => {
                "Each entry needs id, email, plan, active and months_remaining under [[subscribers]]"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SubscriberError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = SubscriberError::validation("email", "   ", "Email cannot be blank");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid value for 'email' (   ): Email cannot be blank"
        );
        assert!(err.user_friendly_message().contains("email"));
    }

    #[test]
    fn test_non_validation_errors() {
        let err = SubscriberError::UnknownRule {
            name: "gold".to_string(),
        };
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Unknown rule: gold");
    }
}
